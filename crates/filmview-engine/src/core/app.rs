use crate::error::FrameOutcome;
use crate::input::InputEvent;

use super::ctx::ViewCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the input layer.
///
/// The runtime never redraws on its own; apps drive frames through the
/// coordinator reachable from `ViewCtx`.
pub trait App {
    /// Called once, right after the render coordinator is configured.
    fn on_start(&mut self, ctx: &mut ViewCtx<'_, '_>) -> AppControl;

    /// Called for every translated input event.
    fn on_input(&mut self, ctx: &mut ViewCtx<'_, '_>, event: &InputEvent) -> AppControl;

    /// Called after every frame attempt.
    fn on_frame(&mut self, outcome: FrameOutcome) -> AppControl {
        match outcome {
            FrameOutcome::Fatal => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }
}
