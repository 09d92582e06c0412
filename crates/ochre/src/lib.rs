//! Editing session: the canonical pixel buffer plus its display pipeline,
//! behind the operation surface the input shell drives.
//!
//! Every tool operation here is synchronous and self-contained: mutate the
//! buffer, then re-sync the display inline before returning, so a caller
//! never observes a half-drawn stroke from one input event. There is exactly
//! one writer; nothing in this crate suspends or queues work.

use std::fmt;
use std::sync::Arc;

use raster::{BufferCreateError, CanvasPoint, PixelBuffer, Rgb8, WHITE};
use renderer::{DisplayPipeline, ExportError, PresentError};
use tools::{StrokeParams, blur_disc, flood_fill, paint_stroke};
use winit::window::Window;

#[derive(Debug)]
pub enum SessionCreateError {
    Buffer(BufferCreateError),
    CreateSurface(wgpu::CreateSurfaceError),
    RequestAdapter(wgpu::RequestAdapterError),
    RequestDevice(wgpu::RequestDeviceError),
}

impl fmt::Display for SessionCreateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionCreateError::Buffer(error) => write!(formatter, "invalid canvas size: {error}"),
            SessionCreateError::CreateSurface(error) => {
                write!(formatter, "create rendering surface failed: {error}")
            }
            SessionCreateError::RequestAdapter(error) => {
                write!(formatter, "no suitable gpu adapter: {error}")
            }
            SessionCreateError::RequestDevice(error) => {
                write!(formatter, "gpu device request failed: {error}")
            }
        }
    }
}

impl From<BufferCreateError> for SessionCreateError {
    fn from(error: BufferCreateError) -> Self {
        SessionCreateError::Buffer(error)
    }
}

impl std::error::Error for SessionCreateError {}

/// One editing session over one fixed-size canvas. The buffer is the single
/// source of truth; the pipeline's texture mirror is overwritten from it on
/// every sync and can never drift between calls.
pub struct CanvasSession {
    buffer: PixelBuffer,
    display: DisplayPipeline,
}

impl CanvasSession {
    /// Establishes the GPU context and an opaque-white canvas of the given
    /// fixed dimensions. Every failure here is fatal to construction; no
    /// partially initialized session is ever returned.
    pub async fn new(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<CanvasSession, SessionCreateError> {
        let buffer = PixelBuffer::new(width, height)?;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .map_err(SessionCreateError::CreateSurface)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(SessionCreateError::RequestAdapter)?;

        let limits = adapter.limits();
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(SessionCreateError::RequestDevice)?;

        let caps = surface.get_capabilities(&adapter);
        let surface_format = caps
            .formats
            .iter()
            .copied()
            .find(|format| format.is_srgb())
            .unwrap_or(caps.formats[0]);

        let mut size = window.inner_size();
        size.width = size.width.max(1);
        size.height = size.height.max(1);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        let display = DisplayPipeline::new(device, queue, surface, surface_config, &buffer);
        Ok(CanvasSession { buffer, display })
    }

    /// Paints a brush or eraser segment from `prev` to `curr`, then redraws.
    pub fn paint_stroke(&mut self, prev: CanvasPoint, curr: CanvasPoint, params: &StrokeParams) {
        paint_stroke(&mut self.buffer, prev, curr, params);
        self.present_after_edit();
    }

    /// Flood-fills the connected region around `seed`, then redraws.
    pub fn fill(&mut self, seed: CanvasPoint, color: Rgb8) {
        flood_fill(&mut self.buffer, seed, color);
        self.present_after_edit();
    }

    /// Box-blurs the disc around `center`, then redraws.
    pub fn blur(&mut self, center: CanvasPoint, radius: u32) {
        blur_disc(&mut self.buffer, center, radius);
        self.present_after_edit();
    }

    pub fn clear_to_white(&mut self) {
        self.buffer.fill(WHITE);
        self.present_after_edit();
    }

    /// Uploads the buffer and redraws. The shell's redraw path calls this
    /// directly so it can react to surface loss; tool edits go through
    /// `present_after_edit`, which logs and skips the frame instead.
    pub fn sync_display(&mut self) -> Result<(), PresentError> {
        self.display.sync(&self.buffer)
    }

    fn present_after_edit(&mut self) {
        if let Err(error) = self.sync_display() {
            eprintln!("[display] frame skipped after edit: {error}");
        }
    }

    /// PNG-encodes the current canvas. Never mutates the buffer.
    pub fn export_image(&self) -> Result<Vec<u8>, ExportError> {
        self.display.export(&self.buffer)
    }

    /// The window's drawable area changed; the canvas itself never resizes.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.display.resize(width, height);
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn canvas_width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn canvas_height(&self) -> u32 {
        self.buffer.height()
    }
}
