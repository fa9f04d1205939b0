//! Keyboard bindings: key + modifiers -> viewport action.

use filmview_engine::framing::{Channel, FilmFormat};
use filmview_engine::input::{Key, Modifiers};

/// Center step for arrow keys, in drawable pixels.
pub const NUDGE_STEP: f32 = 20.0;
pub const SCALE_STEP: f32 = 0.1;
pub const WEIGHT_STEP: f32 = 0.1;

/// One discrete viewer command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Nudge { dx: f32, dy: f32 },
    Scale(f32),
    ToggleFullScreen,
    SelectFormat(FilmFormat),
    CycleFormat,
    Weight { channel: Channel, delta: f32 },
    ResetWeights,
    Recenter,
    Exit,
}

/// Maps a key press to an action. Unbound combinations yield `None`.
pub fn action_for(key: Key, modifiers: Modifiers) -> Option<Action> {
    let action = match key {
        // Pixel space is bottom-left origin, so up is +y.
        Key::ArrowLeft => Action::Nudge { dx: -NUDGE_STEP, dy: 0.0 },
        Key::ArrowRight => Action::Nudge { dx: NUDGE_STEP, dy: 0.0 },
        Key::ArrowDown => Action::Nudge { dx: 0.0, dy: -NUDGE_STEP },
        Key::ArrowUp => Action::Nudge { dx: 0.0, dy: NUDGE_STEP },

        Key::Equal if modifiers.command() => Action::Scale(SCALE_STEP),
        Key::Minus if modifiers.command() => Action::Scale(-SCALE_STEP),
        Key::NumpadAdd => Action::Scale(SCALE_STEP),
        Key::NumpadSubtract => Action::Scale(-SCALE_STEP),

        Key::F => Action::ToggleFullScreen,
        Key::Digit1 => Action::SelectFormat(FilmFormat::Format135),
        Key::Digit2 => Action::SelectFormat(FilmFormat::Format120),
        Key::Tab => Action::CycleFormat,

        Key::R => weight(Channel::Red, modifiers),
        Key::G => weight(Channel::Green, modifiers),
        Key::B => weight(Channel::Blue, modifiers),
        Key::Digit0 => Action::ResetWeights,

        Key::C => Action::Recenter,
        Key::Escape => Action::Exit,

        _ => return None,
    };
    Some(action)
}

fn weight(channel: Channel, modifiers: Modifiers) -> Action {
    let delta = if modifiers.shift { -WEIGHT_STEP } else { WEIGHT_STEP };
    Action::Weight { channel, delta }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CMD: Modifiers = Modifiers { shift: false, ctrl: false, alt: false, meta: true };
    const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false, alt: false, meta: false };

    #[test]
    fn arrows_nudge_by_twenty_with_up_positive() {
        assert_eq!(
            action_for(Key::ArrowUp, Modifiers::NONE),
            Some(Action::Nudge { dx: 0.0, dy: 20.0 })
        );
        assert_eq!(
            action_for(Key::ArrowLeft, Modifiers::NONE),
            Some(Action::Nudge { dx: -20.0, dy: 0.0 })
        );
    }

    #[test]
    fn scale_needs_command_modifier_on_main_row() {
        assert_eq!(action_for(Key::Equal, Modifiers::NONE), None);
        assert_eq!(action_for(Key::Equal, CMD), Some(Action::Scale(0.1)));
        assert_eq!(action_for(Key::Minus, CMD), Some(Action::Scale(-0.1)));
        assert_eq!(action_for(Key::NumpadAdd, Modifiers::NONE), Some(Action::Scale(0.1)));
    }

    #[test]
    fn shift_lowers_channel_weight() {
        assert_eq!(
            action_for(Key::R, Modifiers::NONE),
            Some(Action::Weight { channel: Channel::Red, delta: 0.1 })
        );
        assert_eq!(
            action_for(Key::B, SHIFT),
            Some(Action::Weight { channel: Channel::Blue, delta: -0.1 })
        );
    }

    #[test]
    fn digits_select_formats() {
        assert_eq!(
            action_for(Key::Digit2, Modifiers::NONE),
            Some(Action::SelectFormat(FilmFormat::Format120))
        );
        assert_eq!(action_for(Key::Digit0, Modifiers::NONE), Some(Action::ResetWeights));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(action_for(Key::Unknown(0x20), Modifiers::NONE), None);
        assert_eq!(action_for(Key::Unknown(42), CMD), None);
    }
}
