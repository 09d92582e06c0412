//! Seed-driven flood fill over a connected, color-similar region.

use bitvec::prelude::{BitVec, Lsb0};
use raster::{CanvasPoint, PixelBuffer, Rgb8};

/// Maximum per-channel absolute difference from the seed sample for a pixel
/// to join the region.
pub const FILL_TOLERANCE: u8 = 32;

/// Replaces the 4-connected region around `seed` whose pixels match the seed
/// sample within [`FILL_TOLERANCE`] per channel. Only R, G, B are matched and
/// written; alpha is untouched. Growth order is unspecified; only final
/// region membership is contractual.
///
/// A seed outside the buffer is a no-op, as is a seed whose sampled color
/// already equals the fill color exactly (a full-region rewrite to the same
/// values would be wasted work).
pub fn flood_fill(buffer: &mut PixelBuffer, seed: CanvasPoint, fill: Rgb8) {
    let (seed_x, seed_y) = seed.rounded();
    let Some(sample) = buffer.get(seed_x, seed_y) else {
        return;
    };
    let target = sample.rgb();
    if target == fill {
        return;
    }

    // Termination: the visited mask strictly grows and the buffer is finite,
    // so the walk is O(region size).
    let mut visited: BitVec<usize, Lsb0> = BitVec::repeat(false, buffer.pixel_count());
    let mut stack = vec![(seed_x, seed_y)];
    while let Some((x, y)) = stack.pop() {
        let Some(index) = buffer.pixel_index(x, y) else {
            continue;
        };
        if visited[index] {
            continue;
        }
        visited.set(index, true);

        let Some(pixel) = buffer.get(x, y) else {
            continue;
        };
        if !matches_within_tolerance(pixel.rgb(), target) {
            continue;
        }

        buffer.set_rgb(x, y, fill);
        stack.push((x + 1, y));
        stack.push((x - 1, y));
        stack.push((x, y + 1));
        stack.push((x, y - 1));
    }
}

fn matches_within_tolerance(pixel: Rgb8, target: Rgb8) -> bool {
    channel_close(pixel.r, target.r)
        && channel_close(pixel.g, target.g)
        && channel_close(pixel.b, target.b)
}

fn channel_close(a: u8, b: u8) -> bool {
    (i16::from(a) - i16::from(b)).abs() <= i16::from(FILL_TOLERANCE)
}
