use std::ops::RangeInclusive;

use crate::coords::{DrawableSize, Vec2};

use super::format::FilmFormat;

/// Allowed `scale_factor` range, shared by every input path.
pub const SCALE_RANGE: RangeInclusive<f32> = 0.5..=15.0;

/// Allowed range for each channel weight.
pub const WEIGHT_RANGE: RangeInclusive<f32> = 0.0..=2.0;

const DEFAULT_CENTER: Vec2 = Vec2::new(1550.0, 450.0);
const DEFAULT_SCALE: f32 = 3.0;

/// Color channel addressed by a weight.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Per-channel multipliers applied in the fragment stage.
///
/// Invariant: every weight lies in `WEIGHT_RANGE`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChannelWeights([f32; 3]);

impl ChannelWeights {
    pub const NEUTRAL: ChannelWeights = ChannelWeights([1.0; 3]);

    #[inline]
    pub fn get(self, channel: Channel) -> f32 {
        self.0[channel.index()]
    }

    /// RGB plus the reserved fourth lane, laid out for the uniform buffer.
    #[inline]
    pub fn to_lanes(self) -> [f32; 4] {
        [self.0[0], self.0[1], self.0[2], 1.0]
    }

    fn set(&mut self, channel: Channel, value: f32) {
        self.0[channel.index()] = value.clamp(*WEIGHT_RANGE.start(), *WEIGHT_RANGE.end());
    }
}

impl Default for ChannelWeights {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Everything the renderer needs to draw one frame.
///
/// Fields are private; the setters are the only write path and they keep the
/// clamp invariants. Non-finite inputs are ignored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    center_position: Vec2,
    scale_factor: f32,
    film_format: FilmFormat,
    is_full_screen: bool,
    channel_weights: ChannelWeights,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            center_position: DEFAULT_CENTER,
            scale_factor: DEFAULT_SCALE,
            film_format: FilmFormat::default(),
            is_full_screen: false,
            channel_weights: ChannelWeights::NEUTRAL,
        }
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn center_position(&self) -> Vec2 {
        self.center_position
    }

    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    #[inline]
    pub fn film_format(&self) -> FilmFormat {
        self.film_format
    }

    #[inline]
    pub fn is_full_screen(&self) -> bool {
        self.is_full_screen
    }

    #[inline]
    pub fn channel_weights(&self) -> ChannelWeights {
        self.channel_weights
    }

    // ── mutation ──────────────────────────────────────────────────────────

    /// Moves the center by `delta`. No bounds are applied, the highlight may
    /// be parked outside the drawable.
    pub fn nudge_position(&mut self, delta: Vec2) {
        if delta.is_finite() {
            self.center_position += delta;
        }
    }

    pub fn recenter(&mut self, drawable: DrawableSize) {
        if drawable.is_valid() {
            self.center_position = drawable.center();
        }
    }

    pub fn adjust_scale(&mut self, delta: f32) {
        self.set_scale(self.scale_factor + delta);
    }

    pub fn set_scale(&mut self, value: f32) {
        if value.is_finite() {
            self.scale_factor = value.clamp(*SCALE_RANGE.start(), *SCALE_RANGE.end());
        }
    }

    pub fn set_format(&mut self, format: FilmFormat) {
        self.film_format = format;
    }

    pub fn set_full_screen(&mut self, on: bool) {
        self.is_full_screen = on;
    }

    pub fn set_channel_weight(&mut self, channel: Channel, value: f32) {
        if value.is_finite() {
            self.channel_weights.set(channel, value);
        }
    }

    pub fn reset_channel_weights(&mut self) {
        self.channel_weights = ChannelWeights::NEUTRAL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn defaults_match_session_start() {
        let s = ViewportState::new();
        assert_eq!(s.center_position(), Vec2::new(1550.0, 450.0));
        assert_eq!(s.scale_factor(), 3.0);
        assert_eq!(s.film_format(), FilmFormat::Format135);
        assert!(!s.is_full_screen());
        assert_eq!(s.channel_weights(), ChannelWeights::NEUTRAL);
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn adjust_scale_past_upper_bound_lands_on_bound() {
        let mut s = ViewportState::new();
        s.set_scale(14.95);
        s.adjust_scale(0.1);
        assert_eq!(s.scale_factor(), 15.0);

        // Repeating at the bound is a no-op.
        s.adjust_scale(0.1);
        assert_eq!(s.scale_factor(), 15.0);
    }

    #[test]
    fn adjust_scale_past_lower_bound_lands_on_bound() {
        let mut s = ViewportState::new();
        s.set_scale(0.55);
        s.adjust_scale(-0.1);
        assert_eq!(s.scale_factor(), 0.5);
        s.adjust_scale(-0.1);
        assert_eq!(s.scale_factor(), 0.5);
    }

    #[test]
    fn non_finite_scale_is_ignored() {
        let mut s = ViewportState::new();
        s.set_scale(f32::NAN);
        s.adjust_scale(f32::INFINITY);
        assert_eq!(s.scale_factor(), 3.0);
    }

    // ── channel weights ───────────────────────────────────────────────────

    #[test]
    fn channel_weight_is_clamped() {
        let mut s = ViewportState::new();
        s.set_channel_weight(Channel::Red, 5.0);
        s.set_channel_weight(Channel::Blue, -1.0);
        assert_eq!(s.channel_weights().get(Channel::Red), 2.0);
        assert_eq!(s.channel_weights().get(Channel::Green), 1.0);
        assert_eq!(s.channel_weights().get(Channel::Blue), 0.0);
    }

    #[test]
    fn weight_lanes_keep_reserved_fourth_lane() {
        let mut s = ViewportState::new();
        s.set_channel_weight(Channel::Green, 0.25);
        assert_eq!(s.channel_weights().to_lanes(), [1.0, 0.25, 1.0, 1.0]);
    }

    #[test]
    fn reset_restores_neutral_weights() {
        let mut s = ViewportState::new();
        for c in Channel::ALL {
            s.set_channel_weight(c, 0.0);
        }
        s.reset_channel_weights();
        assert_eq!(s.channel_weights(), ChannelWeights::NEUTRAL);
    }

    // ── position ──────────────────────────────────────────────────────────

    #[test]
    fn nudge_is_unbounded() {
        let mut s = ViewportState::new();
        for _ in 0..200 {
            s.nudge_position(Vec2::new(20.0, -20.0));
        }
        assert_eq!(s.center_position(), Vec2::new(5550.0, -3550.0));
    }

    #[test]
    fn recenter_ignores_invalid_drawable() {
        let mut s = ViewportState::new();
        s.recenter(DrawableSize::new(0.0, 800.0));
        assert_eq!(s.center_position(), Vec2::new(1550.0, 450.0));
        s.recenter(DrawableSize::new(1000.0, 800.0));
        assert_eq!(s.center_position(), Vec2::new(500.0, 400.0));
    }
}
