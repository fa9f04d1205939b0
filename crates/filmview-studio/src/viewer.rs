//! The input controller: applies bound actions to the viewport and keeps
//! the window title in sync with the state.

use filmview_engine::coords::{DrawableSize, Rect};
use filmview_engine::core::{App, AppControl, ViewCtx};
use filmview_engine::error::{FrameOutcome, FrameSkip};
use filmview_engine::framing::{highlight_rect_px, Channel, FrameSink, ViewportController, ViewportState};
use filmview_engine::input::{InputEvent, KeyState};

use crate::bindings::{action_for, Action};

pub struct Viewer {
    controller: ViewportController,
    title: String,
}

impl Viewer {
    pub fn new(title: impl Into<String>, initial: ViewportState) -> Self {
        Self {
            controller: ViewportController::new(initial),
            title: title.into(),
        }
    }

    fn apply(&mut self, action: Action, ctx: &mut ViewCtx<'_, '_>) -> AppControl {
        let drawable = ctx.drawable_size();
        let sink: &mut dyn FrameSink = &mut *ctx.coordinator;
        let c = &mut self.controller;

        match action {
            Action::Nudge { dx, dy } => {
                c.nudge_position(dx, dy, sink);
                log_if_parked(c.state(), drawable);
            }
            Action::Scale(delta) => c.adjust_scale(delta, sink),
            Action::ToggleFullScreen => c.toggle_full_screen(sink),
            Action::SelectFormat(format) => c.set_format(format, sink),
            Action::CycleFormat => c.cycle_format(sink),
            Action::Weight { channel, delta } => c.adjust_channel_weight(channel, delta, sink),
            Action::ResetWeights => c.reset_channel_weights(sink),
            Action::Recenter => c.recenter(drawable, sink),
            Action::Exit => return AppControl::Exit,
        }

        ctx.window.set_title(&title_for(&self.title, c.state()));
        AppControl::Continue
    }
}

impl App for Viewer {
    fn on_start(&mut self, ctx: &mut ViewCtx<'_, '_>) -> AppControl {
        ctx.window.set_title(&title_for(&self.title, self.controller.state()));
        self.controller.publish(&mut *ctx.coordinator);
        AppControl::Continue
    }

    fn on_input(&mut self, ctx: &mut ViewCtx<'_, '_>, event: &InputEvent) -> AppControl {
        let InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers,
            ..
        } = event
        else {
            return AppControl::Continue;
        };

        match action_for(*key, *modifiers) {
            Some(action) => self.apply(action, ctx),
            None => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, outcome: FrameOutcome) -> AppControl {
        match outcome {
            FrameOutcome::Fatal => {
                log::error!("surface is unrecoverable, closing viewer");
                AppControl::Exit
            }
            FrameOutcome::Skipped(FrameSkip::InvalidSurface { .. }) => {
                log::debug!("window minimized or zero-sized; frame dropped");
                AppControl::Continue
            }
            _ => AppControl::Continue,
        }
    }
}

fn log_if_parked(state: &ViewportState, drawable: DrawableSize) {
    let Some(rect) = highlight_rect_px(state, drawable) else { return };
    if rect.intersect(Rect::from_drawable(drawable)).is_none() {
        log::debug!(
            "highlight parked off-screen at ({:.0}, {:.0})",
            state.center_position().x,
            state.center_position().y
        );
    }
}

/// Window title mirroring the current framing, e.g.
/// `filmview · 135 · scale 3.00 · R 1.00 G 1.00 B 1.00`.
pub fn title_for(prefix: &str, state: &ViewportState) -> String {
    let w = state.channel_weights();
    let mut title = format!(
        "{prefix} · {} · scale {:.2} · R {:.2} G {:.2} B {:.2}",
        state.film_format(),
        state.scale_factor(),
        w.get(Channel::Red),
        w.get(Channel::Green),
        w.get(Channel::Blue),
    );
    if state.is_full_screen() {
        title.push_str(" · full screen");
    }
    title
}
