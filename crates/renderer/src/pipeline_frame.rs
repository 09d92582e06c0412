//! Per-sync upload, draw, and present.

use raster::{CHANNELS_PER_PIXEL, PixelBuffer};

use crate::{DisplayPipeline, PresentError, QUAD_VERTICES};

impl DisplayPipeline {
    /// Re-uploads the whole buffer into the mirror texture.
    pub(crate) fn upload(&self, buffer: &PixelBuffer) {
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.canvas_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            buffer.bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(buffer.width() * CHANNELS_PER_PIXEL as u32),
                rows_per_image: Some(buffer.height()),
            },
            self.canvas_extent,
        );
    }

    /// Uploads the buffer and redraws the surface. A surface acquisition
    /// failure skips this frame and is returned for the caller to handle;
    /// the buffer itself is never affected by a failed present.
    pub fn sync(&mut self, buffer: &PixelBuffer) -> Result<(), PresentError> {
        self.upload(buffer);

        let frame = self
            .surface
            .get_current_texture()
            .map_err(PresentError::Surface)?;
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("display.frame"),
            });
        {
            let mut blit_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("display.blit"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame_view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            blit_pass.set_pipeline(&self.blit_pipeline);
            blit_pass.set_bind_group(0, &self.canvas_bind_group, &[]);
            blit_pass.set_vertex_buffer(0, self.quad_vertex_buffer.slice(..));
            blit_pass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Reconfigures the surface for a new viewport size. The mirror texture
    /// keeps the buffer's fixed dimensions; the quad stretches to fit.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        if self.surface_config.width == width && self.surface_config.height == height {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }
}
