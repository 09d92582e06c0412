//! Soft circular brush strokes along pointer segments.

use raster::{CanvasPoint, PixelBuffer, Rgb8};

/// What a stroke deposits: a brush color, or the eraser's opaque white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Color(Rgb8),
    Erase,
}

impl Paint {
    fn color(self) -> Rgb8 {
        match self {
            Paint::Color(color) => color,
            Paint::Erase => Rgb8::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeParams {
    /// Brush radius in pixels. Zero degenerates to a single-pixel stamp with
    /// no falloff.
    pub radius: u32,
    pub paint: Paint,
    /// 0–100, read as the blend fraction at the disc center.
    pub opacity_percent: u8,
}

/// Paints a soft disc along the segment from `prev` to `curr`, producing a
/// continuous stroke regardless of pointer sampling rate. Blending always
/// composites over the buffer's current state, so overlapping strokes
/// accumulate. A zero-length segment stamps a single disc.
pub fn paint_stroke(
    buffer: &mut PixelBuffer,
    prev: CanvasPoint,
    curr: CanvasPoint,
    params: &StrokeParams,
) {
    let color = params.paint.color();
    let opacity = f32::from(params.opacity_percent.min(100)) / 100.0;

    // Integer error-accumulator line walk between the rounded endpoints.
    // Every grid cell the ideal segment passes through is stamped exactly
    // once, with no floating-point drift.
    let (end_x, end_y) = curr.rounded();
    let (mut x, mut y) = prev.rounded();
    let dx = (end_x - x).abs();
    let dy = (end_y - y).abs();
    let step_x = if x < end_x { 1 } else { -1 };
    let step_y = if y < end_y { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        stamp_disc(buffer, x, y, params.radius, color, opacity);
        if x == end_x && y == end_y {
            break;
        }
        let doubled = 2 * err;
        if doubled > -dy {
            err -= dy;
            x += step_x;
        }
        if doubled < dx {
            err += dx;
            y += step_y;
        }
    }
}

/// Stamps one disc: fully opaque (per the requested opacity) at the center,
/// fully transparent at the rim. Only R, G, B blend; the alpha byte stays as
/// the buffer holds it.
fn stamp_disc(
    buffer: &mut PixelBuffer,
    center_x: i32,
    center_y: i32,
    radius: u32,
    color: Rgb8,
    opacity: f32,
) {
    let r = radius as i32;
    for j in -r..=r {
        for i in -r..=r {
            let distance_squared = i * i + j * j;
            if distance_squared > r * r {
                continue;
            }
            let x = center_x + i;
            let y = center_y + j;
            let Some(old) = buffer.get(x, y) else {
                continue;
            };
            let falloff = if radius == 0 {
                1.0
            } else {
                1.0 - (distance_squared as f32).sqrt() / radius as f32
            };
            let alpha = opacity * falloff;
            buffer.set_rgb(
                x,
                y,
                Rgb8 {
                    r: blend_channel(old.r, color.r, alpha),
                    g: blend_channel(old.g, color.g, alpha),
                    b: blend_channel(old.b, color.b, alpha),
                },
            );
        }
    }
}

fn blend_channel(old: u8, new: u8, alpha: f32) -> u8 {
    (f32::from(old) * (1.0 - alpha) + f32::from(new) * alpha).round() as u8
}
