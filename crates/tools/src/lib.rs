//! Pixel-mutation engines for the painting surface.
//!
//! Every engine mutates the canonical `PixelBuffer` in place and runs to
//! completion before returning; the caller re-syncs the display afterwards.
//! All engines clip per-pixel against the buffer bounds and never report
//! out-of-range coordinates as errors.
//!
//! - `stroke`: soft circular brush along a pointer segment (also the eraser).
//! - `fill`: seed-driven flood fill with per-channel tolerance.
//! - `blur`: localized box blur within a circular disc.
//! - `registry`: per-tool parameter tables for an external properties panel.

mod blur;
mod fill;
mod registry;
mod stroke;

pub use blur::{BOX_SAMPLE_RADIUS, blur_disc};
pub use fill::{FILL_TOLERANCE, flood_fill};
pub use registry::{
    BRUSH_SIZE_BOUNDS, COLOR_SWATCHES, DEFAULT_COLOR, OPACITY_BOUNDS, SliderBounds, Tool,
    ToolProperties,
};
pub use stroke::{Paint, StrokeParams, paint_stroke};

#[cfg(test)]
mod tests;
