mod input_map;

use anyhow::{Context, Result};
use glam::Vec2;
use houseview_common::Viewport;
use houseview_input::PointerTracker;
use houseview_render::{
    DebugTextRenderer, Frame, FrameScheduler, OrbitControls, PerspectiveCamera, RenderLoop,
    Renderer,
};
use houseview_render_wgpu::{GpuContext, WgpuRenderer};
use houseview_scene::{HouseConfig, build_scene};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

const WINDOW_TITLE: &str = "houseview";
const WINDOW_SIZE: PhysicalSize<u32> = PhysicalSize::new(1280, 720);

/// Schedules the next frame by asking the window for a redraw.
struct WindowScheduler(Arc<Window>);

impl FrameScheduler for WindowScheduler {
    fn request_frame(&self) {
        self.0.request_redraw();
    }
}

/// Scene, camera and GPU state for the open window.
struct Viewer {
    gpu: GpuContext,
    renderer: WgpuRenderer,
    camera: PerspectiveCamera,
    controls: OrbitControls,
}

impl Frame for Viewer {
    fn update_controls(&mut self) {
        self.controls.update(&mut self.camera);
    }

    fn draw(&mut self) {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer
            .render(&self.gpu.device, &self.gpu.queue, &view, &self.camera);
        output.present();
    }
}

struct Running {
    viewer: Viewer,
    render_loop: RenderLoop<WindowScheduler>,
}

struct App {
    config: HouseConfig,
    pointer: PointerTracker,
    running: Option<Running>,
    /// Startup failure, reported once the event loop returns.
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: HouseConfig) -> Self {
        Self {
            config,
            pointer: PointerTracker::new(),
            running: None,
            error: None,
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Running> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let viewport = Viewport::new(size.width, size.height);
        let gpu = GpuContext::new(Arc::clone(&window), viewport)
            .context("failed to initialize GPU")?;

        let scene = build_scene(&self.config);
        let camera = PerspectiveCamera::new(viewport);
        let controls = OrbitControls::new(&camera);
        let renderer = WgpuRenderer::new(
            &gpu.device,
            gpu.config.format,
            gpu.sample_count,
            viewport,
            &scene,
        );

        tracing::debug!("\n{}", DebugTextRenderer::new().render(&scene, &camera));

        let render_loop = RenderLoop::new(WindowScheduler(window));
        render_loop.start();

        Ok(Running {
            viewer: Viewer {
                gpu,
                renderer,
                camera,
                controls,
            },
            render_loop,
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(running) => self.running = Some(running),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(Running {
            viewer,
            render_loop,
        }) = &mut self.running
        else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                // The camera keeps the aspect ratio it started with.
                let viewport = Viewport::new(new_size.width, new_size.height);
                viewer.gpu.resize(viewport);
                viewer
                    .renderer
                    .resize(&viewer.gpu.device, viewer.gpu.viewport());
            }
            WindowEvent::Occluded(occluded) => {
                if occluded {
                    render_loop.pause();
                } else {
                    render_loop.resume();
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.pointer
                    .set_modifiers(input_map::modifiers(modifiers.state()));
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = input_map::pointer_button(button) else {
                    return;
                };
                match state {
                    ElementState::Pressed => self.pointer.button_pressed(button),
                    ElementState::Released => self.pointer.button_released(button),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                if let Some(action) = self.pointer.moved(position) {
                    viewer
                        .controls
                        .apply(action, &viewer.camera, viewer.gpu.viewport());
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.left();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(action) = self.pointer.scrolled(input_map::scroll_steps(delta)) {
                    viewer
                        .controls
                        .apply(action, &viewer.camera, viewer.gpu.viewport());
                }
            }
            WindowEvent::RedrawRequested => {
                render_loop.frame(viewer);
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = HouseConfig::default();
    config.validate().context("invalid house configuration")?;

    tracing::info!("houseview-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.error {
        tracing::error!("{e:#}");
        return Err(e);
    }
    Ok(())
}
