//! Display pipeline: GPU presentation and export for the canvas raster.
//!
//! The CPU-side `PixelBuffer` is authoritative; this crate keeps a
//! device-side mirror texture consistent with it. Every `sync` re-uploads
//! the whole buffer and redraws the surface with a fullscreen two-triangle
//! pass-through blit. The push model is deliberate: no dirty-rectangle
//! tracking, the mirror is overwritten wholesale.
//!
//! Internal layout:
//! - `pipeline_init`: GPU resource construction (`DisplayPipeline::new`).
//! - `pipeline_frame`: per-sync upload, draw, and present.
//! - `export`: lossless PNG encoding of the buffer.

use std::fmt;

mod export;
mod pipeline_frame;
mod pipeline_init;

pub use export::{ExportError, encode_png};

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct QuadVertexGpu {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
}

const fn quad_vertex(position: [f32; 2], tex_coord: [f32; 2]) -> QuadVertexGpu {
    QuadVertexGpu {
        position,
        tex_coord,
    }
}

/// Fullscreen quad in clip space, two triangles. Texture coordinates are
/// flipped in Y so the buffer's top row lands at the top of the viewport.
pub(crate) const QUAD_VERTICES: [QuadVertexGpu; 6] = [
    quad_vertex([-1.0, -1.0], [0.0, 1.0]),
    quad_vertex([1.0, -1.0], [1.0, 1.0]),
    quad_vertex([-1.0, 1.0], [0.0, 0.0]),
    quad_vertex([-1.0, 1.0], [0.0, 0.0]),
    quad_vertex([1.0, -1.0], [1.0, 1.0]),
    quad_vertex([1.0, 1.0], [1.0, 0.0]),
];

/// Owns the surface, the mirror texture, and the blit pipeline. Construction
/// happens once per session; the buffer is only ever borrowed per call, so
/// pipeline state can never drift from the canonical raster between syncs.
pub struct DisplayPipeline {
    pub(crate) surface: wgpu::Surface<'static>,
    pub(crate) surface_config: wgpu::SurfaceConfiguration,
    pub(crate) device: wgpu::Device,
    pub(crate) queue: wgpu::Queue,
    pub(crate) canvas_texture: wgpu::Texture,
    pub(crate) canvas_extent: wgpu::Extent3d,
    pub(crate) canvas_bind_group: wgpu::BindGroup,
    pub(crate) blit_pipeline: wgpu::RenderPipeline,
    pub(crate) quad_vertex_buffer: wgpu::Buffer,
}

#[derive(Debug)]
pub enum PresentError {
    Surface(wgpu::SurfaceError),
}

impl fmt::Display for PresentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentError::Surface(error) => {
                write!(formatter, "surface frame unavailable: {error}")
            }
        }
    }
}

impl std::error::Error for PresentError {}
