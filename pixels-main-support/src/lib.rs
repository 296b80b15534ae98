#![deny(clippy::all)]
#![forbid(unsafe_code)]

use automaton_grid::World;
use error_iter::ErrorIter as _;
use log::{debug, error, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const TIME_STEP_MILLIS: u64 = 400;
const BACKGROUND_COLOR: Color = Color::BLACK;

/// Opens a window showing `world` and drives it until the window closes.
///
/// The world is advanced once when the window appears. After that, `Space` toggles
/// continuous play, `S` or `Right` advances one step while paused, and `Escape` or `Q`
/// quits. The step counter is shown in the title bar.
pub fn animate<W: World>(
    title: &'static str,
    cell_pixel_width: u32,
    world: W,
) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut AppEventHandler::new(title, cell_pixel_width, world))
}

struct App<W: World> {
    world: W,
    title: &'static str,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    playing: bool,
    next_update: Instant,
}

impl<W: World> App<W> {
    fn new(world: W, title: &'static str, window: Arc<Window>, pixels: Pixels<'static>) -> Self {
        Self {
            world,
            title,
            window,
            pixels,
            playing: false,
            next_update: Instant::now(),
        }
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        title: &str,
        size: LogicalSize<u32>,
    ) -> Result<Window, OsError> {
        let window_attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(
        window: &Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(width, height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()
    }

    fn on_create(&mut self) {
        self.world.advance();
        self.update_title();
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_toggle_play(&mut self) {
        self.playing = !self.playing;
        if self.playing {
            self.next_update = Instant::now() + Self::time_step();
        }
        info!("{}", if self.playing { "Playing" } else { "Paused" });
        self.update_title();
    }

    fn on_single_step(&mut self) {
        if self.playing {
            return;
        }
        self.step();
    }

    fn on_time_step(&mut self) {
        if !self.playing {
            return;
        }
        self.step();

        while self.next_update < Instant::now() {
            self.next_update += Self::time_step();
        }
    }

    fn step(&mut self) {
        self.world.advance();
        debug!("Advanced to step {}", self.world.step_count());
        self.update_title();
        self.window.request_redraw();
    }

    fn update_title(&self) {
        let state = if self.playing { "playing" } else { "paused" };
        self.window.set_title(&format!(
            "{} - step {} ({state})",
            self.title,
            self.world.step_count()
        ));
    }

    fn on_redraw(&mut self) -> Result<(), pixels::Error> {
        let screen = self.pixels.frame_mut();
        debug_assert_eq!(screen.len(), 4 * self.world.num_cells());

        for (cell, pixel) in self.world.cells_iter().zip(screen.chunks_exact_mut(4)) {
            pixel.copy_from_slice(&self.world.color_rgba(cell));
        }
        self.pixels.render()
    }

    fn time_step() -> Duration {
        Duration::from_millis(TIME_STEP_MILLIS)
    }
}

struct AppEventHandler<W: World> {
    title: &'static str,
    cell_pixel_width: u32,
    world: Option<W>,
    app: Option<App<W>>,
}

impl<W: World> AppEventHandler<W> {
    fn new(title: &'static str, cell_pixel_width: u32, world: W) -> Self {
        Self {
            title,
            cell_pixel_width,
            world: Some(world),
            app: None,
        }
    }

    fn create_app(&mut self, event_loop: &ActiveEventLoop) {
        let Some(world) = self.world.take() else {
            return;
        };
        let size = LogicalSize::new(
            world.width() * self.cell_pixel_width,
            world.height() * self.cell_pixel_width,
        );
        let window = match App::<W>::build_window(event_loop, self.title, size) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log_error("create_window", err);
                event_loop.exit();
                return;
            }
        };
        let pixels = match App::<W>::build_pixels(&window, world.width(), world.height()) {
            Ok(pixels) => pixels,
            Err(err) => {
                log_error("pixels.build", err);
                event_loop.exit();
                return;
            }
        };
        info!(
            "Showing {}x{} grid in a {}x{} window",
            world.width(),
            world.height(),
            size.width,
            size.height
        );
        let mut app = App::new(world, self.title, window, pixels);
        app.on_create();
        self.app = Some(app);
    }
}

impl<W: World> ApplicationHandler for AppEventHandler<W> {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause
            && let Some(app) = self.app.as_mut()
        {
            app.on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            self.create_app(event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape | KeyCode::KeyQ => {
                    event_loop.exit();
                }
                KeyCode::Space => app.on_toggle_play(),
                KeyCode::KeyS | KeyCode::ArrowRight => app.on_single_step(),
                _ => (),
            },
            WindowEvent::Resized(size) => {
                if let Err(err) = app.pixels.resize_surface(size.width, size.height) {
                    log_error("pixels.resize_surface", err);
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.on_redraw() {
                    log_error("pixels.render", err);
                    event_loop.exit();
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let control_flow = match self.app.as_ref() {
            Some(app) if app.playing => ControlFlow::WaitUntil(app.next_update),
            _ => ControlFlow::Wait,
        };
        event_loop.set_control_flow(control_flow);
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
