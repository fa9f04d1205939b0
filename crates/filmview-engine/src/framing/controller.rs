use crate::coords::{DrawableSize, Vec2};

use super::format::FilmFormat;
use super::state::{Channel, ViewportState};

/// Receiver of state snapshots and redraw requests.
///
/// `RenderCoordinator` is the production implementation.
pub trait FrameSink {
    /// Replaces the cached state used by the next frame.
    fn set_state(&mut self, state: ViewportState);

    /// Asks for one redraw with the latest state.
    fn request_redraw(&mut self);
}

/// Owns the authoritative `ViewportState` and funnels every mutation through
/// a `FrameSink`.
///
/// Each mutator pushes the new snapshot and issues exactly one redraw
/// request, also when a clamp leaves the value unchanged.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    state: ViewportState,
}

impl ViewportController {
    pub fn new(state: ViewportState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Pushes the current state without mutating it (initial frame).
    pub fn publish(&self, sink: &mut dyn FrameSink) {
        sink.set_state(self.state);
        sink.request_redraw();
    }

    pub fn nudge_position(&mut self, dx: f32, dy: f32, sink: &mut dyn FrameSink) {
        self.apply(sink, |s| s.nudge_position(Vec2::new(dx, dy)));
    }

    pub fn recenter(&mut self, drawable: DrawableSize, sink: &mut dyn FrameSink) {
        self.apply(sink, |s| s.recenter(drawable));
    }

    pub fn adjust_scale(&mut self, delta: f32, sink: &mut dyn FrameSink) {
        self.apply(sink, |s| s.adjust_scale(delta));
    }

    pub fn set_scale(&mut self, value: f32, sink: &mut dyn FrameSink) {
        self.apply(sink, |s| s.set_scale(value));
    }

    pub fn set_format(&mut self, format: FilmFormat, sink: &mut dyn FrameSink) {
        self.apply(sink, |s| s.set_format(format));
    }

    pub fn cycle_format(&mut self, sink: &mut dyn FrameSink) {
        self.apply(sink, |s| s.set_format(s.film_format().next()));
    }

    pub fn set_full_screen(&mut self, on: bool, sink: &mut dyn FrameSink) {
        self.apply(sink, |s| s.set_full_screen(on));
    }

    pub fn toggle_full_screen(&mut self, sink: &mut dyn FrameSink) {
        self.apply(sink, |s| s.set_full_screen(!s.is_full_screen()));
    }

    pub fn set_channel_weight(&mut self, channel: Channel, value: f32, sink: &mut dyn FrameSink) {
        self.apply(sink, |s| s.set_channel_weight(channel, value));
    }

    pub fn adjust_channel_weight(&mut self, channel: Channel, delta: f32, sink: &mut dyn FrameSink) {
        self.apply(sink, |s| {
            let current = s.channel_weights().get(channel);
            s.set_channel_weight(channel, current + delta);
        });
    }

    pub fn reset_channel_weights(&mut self, sink: &mut dyn FrameSink) {
        self.apply(sink, ViewportState::reset_channel_weights);
    }

    fn apply(&mut self, sink: &mut dyn FrameSink, mutate: impl FnOnce(&mut ViewportState)) {
        mutate(&mut self.state);
        log::trace!("viewport state -> {:?}", self.state);
        sink.set_state(self.state);
        sink.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        last: Option<ViewportState>,
        redraws: usize,
    }

    impl FrameSink for RecordingSink {
        fn set_state(&mut self, state: ViewportState) {
            self.last = Some(state);
        }

        fn request_redraw(&mut self) {
            self.redraws += 1;
        }
    }

    #[test]
    fn every_mutation_requests_exactly_one_redraw() {
        let mut c = ViewportController::default();
        let mut sink = RecordingSink::default();

        c.nudge_position(20.0, 0.0, &mut sink);
        c.adjust_scale(0.1, &mut sink);
        c.set_scale(4.0, &mut sink);
        c.set_format(FilmFormat::Format120, &mut sink);
        c.cycle_format(&mut sink);
        c.set_full_screen(true, &mut sink);
        c.toggle_full_screen(&mut sink);
        c.set_channel_weight(Channel::Red, 1.5, &mut sink);
        c.adjust_channel_weight(Channel::Blue, -0.1, &mut sink);
        c.reset_channel_weights(&mut sink);
        c.recenter(DrawableSize::new(1000.0, 800.0), &mut sink);

        assert_eq!(sink.redraws, 11);
        assert_eq!(sink.last, Some(*c.state()));
    }

    #[test]
    fn clamped_no_op_still_redraws() {
        let mut c = ViewportController::default();
        let mut sink = RecordingSink::default();
        c.set_scale(15.0, &mut sink);
        c.adjust_scale(0.1, &mut sink);
        assert_eq!(c.state().scale_factor(), 15.0);
        assert_eq!(sink.redraws, 2);
    }

    #[test]
    fn sink_sees_post_mutation_state() {
        let mut c = ViewportController::default();
        let mut sink = RecordingSink::default();
        c.nudge_position(0.0, 20.0, &mut sink);
        let pushed = sink.last.unwrap();
        assert_eq!(pushed.center_position(), Vec2::new(1550.0, 470.0));
    }

    #[test]
    fn adjust_channel_weight_respects_clamp() {
        let mut c = ViewportController::default();
        let mut sink = RecordingSink::default();
        for _ in 0..30 {
            c.adjust_channel_weight(Channel::Green, 0.1, &mut sink);
        }
        assert_eq!(c.state().channel_weights().get(Channel::Green), 2.0);
    }

    #[test]
    fn publish_pushes_without_mutating() {
        let c = ViewportController::default();
        let mut sink = RecordingSink::default();
        c.publish(&mut sink);
        assert_eq!(sink.last, Some(ViewportState::default()));
        assert_eq!(sink.redraws, 1);
    }
}
