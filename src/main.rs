//! Portfolio Backdrop
//!
//! Hosts the themed particle backdrop in a window. The window plays the part
//! of the page: its client area is the drawing surface, cursor and resize
//! events feed the simulation and number keys navigate between pages.

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use particle_renderer::Renderer;
use particle_shapes::{palette, Tessellator};
use particle_simulation::{AnimationLoop, LayoutBox, LoopHandle, Simulation, Theme};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

#[derive(Parser, Debug)]
#[command(name = "portfolio-backdrop", version, about = "Pointer-reactive particle backdrops")]
struct Args {
    /// Page theme shown at startup
    #[arg(long, value_enum, default_value_t = Theme::Home)]
    theme: Theme,

    /// Seed for a reproducible particle population
    #[arg(long)]
    seed: Option<u64>,
}

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: Renderer,
    canvas: Tessellator,
}

impl GpuState {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("creating window surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no compatible GPU adapter")?;

        log::info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("requesting GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no texture formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            // Paced by the display refresh
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = Renderer::new(&device, config.format);
        log::info!("Renderer initialized ({:?})", config.format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
            canvas: Tessellator::new(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Draw one frame. Returns whether the animation wants another one.
    fn render(
        &mut self,
        animation: &mut AnimationLoop,
        logical_size: Vec2,
    ) -> Result<bool, wgpu::SurfaceError> {
        let running = animation.frame(&mut self.canvas);
        if !running {
            // Paused, but the window still needs its contents
            animation.simulation().render(&mut self.canvas);
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Backdrop Encoder"),
            });

        self.renderer.render(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            logical_size.to_array(),
            Some(palette::SLATE_950),
            self.canvas.mesh(),
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(running)
    }
}

struct App {
    seed: Option<u64>,
    theme: Theme,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    animation: AnimationLoop,
    handle: LoopHandle,
    layout: Option<LayoutBox>,
}

impl App {
    fn new(args: Args) -> Self {
        let simulation = new_simulation(args.theme, args.seed);
        Self {
            seed: args.seed,
            theme: args.theme,
            window: None,
            gpu_state: None,
            animation: AnimationLoop::new(simulation),
            handle: LoopHandle::default(),
            layout: None,
        }
    }

    /// In-page navigation: tear down the current backdrop and start another.
    fn navigate(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        log::info!("Navigating {} -> {}", self.theme, theme);

        self.handle.stop();
        let mut simulation = new_simulation(theme, self.seed);
        simulation.resize(self.layout);
        self.animation = AnimationLoop::new(simulation);
        self.handle = self.animation.start();
        self.theme = theme;

        if let Some(window) = &self.window {
            window.set_title(&window_title(theme));
        }
    }

    fn toggle_pause(&mut self) {
        if self.handle.is_running() {
            log::info!("{}: animation stopped", self.theme);
            self.handle.stop();
        } else {
            self.handle = self.animation.start();
        }
    }

    fn surface_layout(window: &Window) -> LayoutBox {
        let size = window
            .inner_size()
            .to_logical::<f32>(window.scale_factor());
        LayoutBox::from_size(size.width, size.height)
    }
}

fn new_simulation(theme: Theme, seed: Option<u64>) -> Simulation {
    match seed {
        Some(seed) => Simulation::with_seed(theme.params(), seed),
        None => Simulation::new(theme.params()),
    }
}

fn window_title(theme: Theme) -> String {
    format!("Portfolio Backdrop - {theme}")
}

fn theme_for_key(code: KeyCode) -> Option<Theme> {
    let number = match code {
        KeyCode::Digit1 | KeyCode::Numpad1 => 1,
        KeyCode::Digit2 | KeyCode::Numpad2 => 2,
        KeyCode::Digit3 | KeyCode::Numpad3 => 3,
        KeyCode::Digit4 | KeyCode::Numpad4 => 4,
        KeyCode::Digit5 | KeyCode::Numpad5 => 5,
        KeyCode::Digit6 | KeyCode::Numpad6 => 6,
        _ => return None,
    };
    Theme::from_number(number)
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(window_title(self.theme))
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 800));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone())) {
            Ok(gpu_state) => self.gpu_state = Some(gpu_state),
            Err(e) => {
                log::error!("GPU setup failed: {e:#}");
                event_loop.exit();
                return;
            }
        }

        self.layout = Some(Self::surface_layout(&window));
        self.animation.simulation_mut().resize(self.layout);
        self.handle = self.animation.start();

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.handle.stop();
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
            } => {
                if code == KeyCode::Space {
                    self.toggle_pause();
                } else if let Some(theme) = theme_for_key(code) {
                    self.navigate(theme);
                } else {
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if let Some(window) = &self.window {
                    self.layout = Some(Self::surface_layout(window));
                    self.animation.simulation_mut().resize(self.layout);
                    window.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let logical = position.to_logical::<f32>(window.scale_factor());
                    self.animation
                        .simulation_mut()
                        .track_pointer(Vec2::new(logical.x, logical.y));
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) else {
                    return;
                };
                let logical = window
                    .inner_size()
                    .to_logical::<f32>(window.scale_factor());
                let logical_size = Vec2::new(logical.width, logical.height);

                match gpu_state.render(&mut self.animation, logical_size) {
                    // Next tick follows the display refresh
                    Ok(true) => window.request_redraw(),
                    Ok(false) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu_state.resize(window.inner_size());
                        window.request_redraw();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Surface out of memory");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Render error: {e:?}"),
                }
            }

            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logger (RUST_LOG=debug for per-resize details)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting portfolio backdrop ({})", args.theme);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(args);
    event_loop.run_app(&mut app)?;
    Ok(())
}
