use std::sync::Arc;

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::cli::Cli;
use crate::core::clock::Clock;
use crate::render::gpu::{GpuRenderer, UiFrame};
use crate::scene::lifecycle::{Phase, SceneLifecycle};
use crate::shell::{LoadingGate, Shell};
use crate::theme::Theme;

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 800;
const FPS_LOG_INTERVAL: f32 = 1.0;

/// Whether the per-frame loop keeps running for a view whose scene is in
/// `phase`. Frames flow for the whole life of the mount, including a mount
/// whose background renderer never came up; only teardown stops them. The
/// scene gates its own tick separately on being `Active`.
fn frame_loop_running(phase: Phase) -> bool {
    phase != Phase::Disposed
}

/// Everything owned by one mounted view: the scene lifecycle, the shell
/// with its loading gate, the frame clock, and the egui plumbing. Dropped
/// as a unit; the scene is disposed explicitly before that so no tick can
/// be scheduled past teardown.
struct View {
    scene: SceneLifecycle<GpuRenderer>,
    shell: Shell,
    gate: LoadingGate,
    clock: Clock,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    frame_count: u32,
    fps_accumulator: f32,
}

impl View {
    fn mount(window: &Arc<Window>, theme: Theme, seed: Option<u64>) -> Self {
        let size = window.inner_size();

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // A failed renderer leaves the manager uninitialized; the shell
        // still runs, the background is simply absent.
        let renderer = match pollster::block_on(GpuRenderer::new(window.clone(), theme)) {
            Ok(renderer) => Some(renderer),
            Err(err) => {
                error!("background renderer unavailable: {err:#}");
                None
            }
        };

        let mut scene = SceneLifecycle::new();
        scene.initialize(renderer, size.width, size.height, theme, &mut rng);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        Self {
            scene,
            shell: Shell::new(theme),
            gate: LoadingGate::new(),
            clock: Clock::new(),
            egui_ctx,
            egui_state,
            frame_count: 0,
            fps_accumulator: 0.0,
        }
    }

    /// One frame: advance the gate, run the shell, hand the prepared UI to
    /// the render target, then tick the scene. Scheduling of the next frame
    /// is decided in `about_to_wait` alone.
    fn redraw(&mut self, window: &Window) {
        if !frame_loop_running(self.scene.phase()) {
            return;
        }

        let delta = self.clock.tick();
        self.gate.tick(delta);
        self.log_fps(delta);

        let raw_input = self.egui_state.take_egui_input(window);
        let ready = self.gate.is_ready();
        let shell = &mut self.shell;
        let full_output = self.egui_ctx.run(raw_input, |ctx| shell.ui(ctx, ready));

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        if let Some(gpu) = self.scene.target_mut() {
            gpu.queue_ui(UiFrame {
                primitives,
                textures_delta: full_output.textures_delta,
                pixels_per_point: window.scale_factor() as f32,
            });
        }

        // No-op unless the scene is active; a mount without a renderer
        // still gets its gate and shell advanced above.
        self.scene.tick(delta);
    }

    fn log_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_accumulator += delta;

        if self.fps_accumulator >= FPS_LOG_INTERVAL {
            info!(
                "{:.1} fps",
                self.frame_count as f32 / self.fps_accumulator
            );
            self.frame_count = 0;
            self.fps_accumulator = 0.0;
        }
    }

    fn unmount(&mut self) {
        self.scene.dispose();
    }
}

/// winit application: creates the window on resume, routes lifecycle
/// events into the mounted view, and keeps redraws flowing while a view
/// is mounted.
pub struct App {
    theme: Theme,
    seed: Option<u64>,
    window: Option<Arc<Window>>,
    view: Option<View>,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        Self {
            theme: cli.theme,
            seed: cli.seed,
            window: None,
            view: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.theme.window_title())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        self.view = Some(View::mount(&window, self.theme, self.seed));
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // The shell gets first look at pointer and keyboard input
        if let Some(view) = &mut self.view {
            if view.egui_state.on_window_event(&window, &event).consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                if let Some(view) = &mut self.view {
                    view.unmount();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(view) = &mut self.view {
                    view.scene.handle_resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(view) = &mut self.view {
                    view.redraw(&window);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Each frame schedules the next; unmounting is what stops the loop.
        if let (Some(window), Some(view)) = (&self.window, &self.view) {
            if frame_loop_running(view.scene.phase()) {
                window.request_redraw();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(view) = &mut self.view {
            view.unmount();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_loop_survives_a_missing_renderer() {
        // A mount whose surface never came up leaves the scene
        // uninitialized; the shell and loading gate still need frames.
        assert!(frame_loop_running(Phase::Uninitialized));
        assert!(frame_loop_running(Phase::Active));
    }

    #[test]
    fn frame_loop_stops_at_unmount() {
        assert!(!frame_loop_running(Phase::Disposed));
    }
}
