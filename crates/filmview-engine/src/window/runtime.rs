use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::core::{App as CoreApp, AppControl, ViewCtx, WindowCtx};
use crate::device::GpuInit;
use crate::input::platform::translate_window_event;
use crate::input::{InputEvent, InputState, KeyState};
use crate::render::{HighlightStyle, RenderCoordinator};

/// How the viewer window is presented.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum WindowMode {
    #[default]
    Windowed,
    /// Borderless full screen on the current monitor.
    Fullscreen,
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub mode: WindowMode,
    pub style: HighlightStyle,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "filmview".to_string(),
            initial_size: LogicalSize::new(1440.0, 900.0),
            mode: WindowMode::Windowed,
            style: HighlightStyle::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the window closes or the app exits.
    ///
    /// Configure-time failures (no device, broken pipeline) stop the loop and
    /// are returned here.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,

    window: Window,

    #[borrows(window)]
    #[covariant]
    coordinator: RenderCoordinator<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);
        if self.config.mode == WindowMode::Fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let style = self.config.style;

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            window,
            coordinator_builder: |w| RenderCoordinator::configure(w, gpu_init, style),
        }
        .try_build()?;

        Ok(entry)
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        let entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(e) => {
                log::error!("failed to configure viewer: {e:#}");
                self.fatal = Some(e);
                self.request_exit();
                event_loop.exit();
                return;
            }
        };

        let app = &mut self.app;
        let mut control = AppControl::Continue;
        let entry = self.entry.insert(entry);
        entry.with_mut(|fields| {
            let mut ctx = ViewCtx {
                window: WindowCtx {
                    id: fields.window.id(),
                    window: fields.window,
                },
                coordinator: fields.coordinator,
                input: fields.input_state,
            };
            control = app.on_start(&mut ctx);
        });

        if control == AppControl::Exit {
            self.request_exit();
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Frames are only produced on request; sleep until the next event.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, entry) = (&mut self.app, &mut self.entry);

        let Some(entry) = entry.as_mut() else {
            return;
        };

        let mut control = AppControl::Continue;

        entry.with_mut(|fields| {
            let Some(ev) = translate_window_event(fields.input_state, &event) else {
                return;
            };

            let fresh = fields.input_state.apply_event(&ev);
            let held_duplicate = !fresh
                && matches!(ev, InputEvent::Key { state: KeyState::Pressed, .. });
            if held_duplicate {
                return;
            }

            let mut ctx = ViewCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                coordinator: fields.coordinator,
                input: fields.input_state,
            };
            control = app.on_input(&mut ctx, &ev);
        });

        match &event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.request_exit();
            }

            WindowEvent::Resized(new_size) => {
                entry.with_coordinator_mut(|c| c.resize(*new_size));
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_coordinator_mut(|c| c.resize(new_size));
            }

            WindowEvent::RedrawRequested => {
                let outcome = entry.with_coordinator_mut(|c| c.render_frame());
                if app.on_frame(outcome) == AppControl::Exit {
                    control = AppControl::Exit;
                }
            }

            _ => {}
        }

        if control == AppControl::Exit {
            self.request_exit();
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
