//! Thin input shell: window creation, pointer capture, and tool state.
//!
//! Everything here is glue. Pointer positions are translated to buffer
//! coordinates and handed to the session; the session owns all pixel and
//! display state.

use std::sync::Arc;

use ochre::CanvasSession;
use raster::{CanvasPoint, Rgb8};
use renderer::PresentError;
use tools::{
    BRUSH_SIZE_BOUNDS, COLOR_SWATCHES, DEFAULT_COLOR, OPACITY_BOUNDS, Paint, StrokeParams, Tool,
};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;
const BRUSH_SIZE_STEP: u32 = 5;
const OPACITY_STEP: u32 = 10;
const EXPORT_PATH: &str = "artwork.png";

struct PaintApp {
    window: Option<Arc<Window>>,
    session: Option<CanvasSession>,
    active_tool: Tool,
    brush_size: u32,
    opacity_percent: u32,
    brush_color: Rgb8,
    swatch_index: usize,
    is_pointer_down: bool,
    last_cursor_position: Option<(f64, f64)>,
    last_canvas_point: Option<CanvasPoint>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            window: None,
            session: None,
            active_tool: Tool::Brush,
            brush_size: BRUSH_SIZE_BOUNDS.default,
            opacity_percent: OPACITY_BOUNDS.default,
            brush_color: DEFAULT_COLOR,
            swatch_index: 0,
            is_pointer_down: false,
            last_cursor_position: None,
            last_canvas_point: None,
        }
    }
}

impl PaintApp {
    fn window_id(&self) -> Option<WindowId> {
        self.window.as_ref().map(|window| window.id())
    }

    /// Scales a cursor position from window space to buffer space. The
    /// canvas keeps its fixed dimensions however the window is resized.
    fn canvas_point(&self, cursor: (f64, f64)) -> Option<CanvasPoint> {
        let window = self.window.as_ref()?;
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return None;
        }
        let scale_x = f64::from(CANVAS_WIDTH) / f64::from(size.width);
        let scale_y = f64::from(CANVAS_HEIGHT) / f64::from(size.height);
        Some(CanvasPoint::new(
            (cursor.0 * scale_x) as f32,
            (cursor.1 * scale_y) as f32,
        ))
    }

    fn stroke_params(&self) -> StrokeParams {
        StrokeParams {
            radius: self.brush_size,
            paint: match self.active_tool {
                Tool::Eraser => Paint::Erase,
                _ => Paint::Color(self.brush_color),
            },
            opacity_percent: self.opacity_percent as u8,
        }
    }

    fn begin_tool_at(&mut self, point: CanvasPoint) {
        let params = self.stroke_params();
        let color = self.brush_color;
        let radius = self.brush_size;
        let tool = self.active_tool;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match tool {
            Tool::Fill => session.fill(point, color),
            Tool::Blur => session.blur(point, radius),
            // A press with no motion still stamps a single disc.
            Tool::Brush | Tool::Eraser => session.paint_stroke(point, point, &params),
        }
    }

    fn continue_tool_to(&mut self, point: CanvasPoint) {
        let params = self.stroke_params();
        let radius = self.brush_size;
        let tool = self.active_tool;
        let prev = self.last_canvas_point.unwrap_or(point);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match tool {
            Tool::Fill => {}
            Tool::Blur => session.blur(point, radius),
            Tool::Brush | Tool::Eraser => session.paint_stroke(prev, point, &params),
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Digit1 => self.select_tool(Tool::Brush),
            KeyCode::Digit2 => self.select_tool(Tool::Eraser),
            KeyCode::Digit3 => self.select_tool(Tool::Blur),
            KeyCode::Digit4 => self.select_tool(Tool::Fill),
            KeyCode::BracketRight => {
                self.brush_size = BRUSH_SIZE_BOUNDS.clamp(self.brush_size + BRUSH_SIZE_STEP);
                println!("[shell] brush size: {}px", self.brush_size);
            }
            KeyCode::BracketLeft => {
                self.brush_size =
                    BRUSH_SIZE_BOUNDS.clamp(self.brush_size.saturating_sub(BRUSH_SIZE_STEP));
                println!("[shell] brush size: {}px", self.brush_size);
            }
            KeyCode::Equal => {
                self.opacity_percent = OPACITY_BOUNDS.clamp(self.opacity_percent + OPACITY_STEP);
                println!("[shell] opacity: {}%", self.opacity_percent);
            }
            KeyCode::Minus => {
                self.opacity_percent =
                    OPACITY_BOUNDS.clamp(self.opacity_percent.saturating_sub(OPACITY_STEP));
                println!("[shell] opacity: {}%", self.opacity_percent);
            }
            KeyCode::KeyX => {
                self.swatch_index = (self.swatch_index + 1) % COLOR_SWATCHES.len();
                self.brush_color = COLOR_SWATCHES[self.swatch_index];
                println!(
                    "[shell] color: #{:02X}{:02X}{:02X}",
                    self.brush_color.r, self.brush_color.g, self.brush_color.b
                );
            }
            KeyCode::KeyC => {
                if let Some(session) = self.session.as_mut() {
                    session.clear_to_white();
                }
            }
            KeyCode::KeyS => self.export_to_file(),
            _ => {}
        }
    }

    fn select_tool(&mut self, tool: Tool) {
        self.active_tool = tool;
        println!("[shell] tool: {}", tool.label());
    }

    fn export_to_file(&self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        match session.export_image() {
            Ok(encoded) => match std::fs::write(EXPORT_PATH, &encoded) {
                Ok(()) => println!("[shell] exported canvas to {EXPORT_PATH}"),
                Err(error) => eprintln!("[shell] write {EXPORT_PATH} failed: {error}"),
            },
            Err(error) => eprintln!("[shell] export failed: {error}"),
        }
    }
}

impl ApplicationHandler for PaintApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        if self.window.is_some() {
            return;
        }

        let window = Arc::new(
            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title("ochre")
                        .with_inner_size(PhysicalSize::new(CANVAS_WIDTH, CANVAS_HEIGHT)),
                )
                .expect("create window"),
        );

        let session = pollster::block_on(CanvasSession::new(
            window.clone(),
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
        ))
        .expect("initialize canvas session");
        window.request_redraw();

        self.window = Some(window);
        self.session = Some(session);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window_id() != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.handle_key(code);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button != MouseButton::Left {
                    return;
                }
                if state == ElementState::Pressed {
                    if let Some(cursor) = self.last_cursor_position {
                        if let Some(point) = self.canvas_point(cursor) {
                            self.begin_tool_at(point);
                            self.last_canvas_point = Some(point);
                        }
                    }
                    self.is_pointer_down = true;
                } else {
                    self.is_pointer_down = false;
                    self.last_canvas_point = None;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.last_cursor_position = Some((position.x, position.y));
                if self.is_pointer_down {
                    if let Some(point) = self.canvas_point((position.x, position.y)) {
                        self.continue_tool_to(point);
                        self.last_canvas_point = Some(point);
                    }
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(session) = self.session.as_mut() {
                    session.resize_surface(new_size.width, new_size.height);
                }
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                match session.sync_display() {
                    Ok(()) => {}
                    Err(PresentError::Surface(
                        wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost,
                    )) => {
                        if let Some(window) = self.window.as_ref() {
                            let size = window.inner_size();
                            session.resize_surface(size.width, size.height);
                            window.request_redraw();
                        }
                    }
                    Err(PresentError::Surface(wgpu::SurfaceError::Timeout)) => {
                        if let Some(window) = self.window.as_ref() {
                            window.request_redraw();
                        }
                    }
                    Err(PresentError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                        event_loop.exit();
                    }
                    Err(error) => {
                        eprintln!("[display] frame skipped: {error}");
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() {
    let event_loop = EventLoop::new().expect("create event loop");
    let mut app = PaintApp::default();
    event_loop.run_app(&mut app).expect("run app");
}
