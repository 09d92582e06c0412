//! Localized box blur within a circular disc.

use raster::{CanvasPoint, PixelBuffer, Rgb8};

/// Half-width of the box-sampling window. Targets closer than this to any
/// buffer edge are skipped outright so sampling never leaves the buffer.
pub const BOX_SAMPLE_RADIUS: i32 = 3;

/// Softens every pixel within `radius` of the rounded center by replacing its
/// R, G, B with the rounded mean of the surrounding 7×7 window; alpha is
/// untouched. Pixels whose window would cross the buffer boundary are left
/// as they are: no clamping, no mirroring.
///
/// Targets are overwritten sequentially within one call. Blur is a
/// single-shot operation, not an iterative convergence, so later targets
/// sampling earlier outputs is accepted behavior.
pub fn blur_disc(buffer: &mut PixelBuffer, center: CanvasPoint, radius: u32) {
    let (center_x, center_y) = center.rounded();
    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let r = radius as i32;
    for j in -r..=r {
        for i in -r..=r {
            if i * i + j * j > r * r {
                continue;
            }
            let x = center_x + i;
            let y = center_y + j;
            if x < BOX_SAMPLE_RADIUS
                || x >= width - BOX_SAMPLE_RADIUS
                || y < BOX_SAMPLE_RADIUS
                || y >= height - BOX_SAMPLE_RADIUS
            {
                continue;
            }
            let mean = box_mean(buffer, x, y);
            buffer.set_rgb(x, y, mean);
        }
    }
}

fn box_mean(buffer: &PixelBuffer, x: i32, y: i32) -> Rgb8 {
    let mut sum_r = 0u32;
    let mut sum_g = 0u32;
    let mut sum_b = 0u32;
    let mut count = 0u32;
    for bj in -BOX_SAMPLE_RADIUS..=BOX_SAMPLE_RADIUS {
        for bi in -BOX_SAMPLE_RADIUS..=BOX_SAMPLE_RADIUS {
            let Some(sample) = buffer.get(x + bi, y + bj) else {
                continue;
            };
            sum_r += u32::from(sample.r);
            sum_g += u32::from(sample.g);
            sum_b += u32::from(sample.b);
            count += 1;
        }
    }
    Rgb8 {
        r: rounded_mean(sum_r, count),
        g: rounded_mean(sum_g, count),
        b: rounded_mean(sum_b, count),
    }
}

fn rounded_mean(sum: u32, count: u32) -> u8 {
    (sum as f32 / count as f32).round() as u8
}
