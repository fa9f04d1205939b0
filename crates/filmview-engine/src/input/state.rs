use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current keyboard state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an input event to the current state.
    ///
    /// Returns `true` for a key press that was not already held, or a
    /// key-repeat of a held key.
    pub fn apply_event(&mut self, ev: &InputEvent) -> bool {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
                false
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
                false
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                repeat,
            } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => self.keys_down.insert(*key) || *repeat,
                    KeyState::Released => {
                        self.keys_down.remove(key);
                        false
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::NONE,
            repeat,
        }
    }

    #[test]
    fn press_then_release_tracks_held_keys() {
        let mut s = InputState::default();
        assert!(s.apply_event(&press(Key::ArrowUp, false)));
        assert!(s.keys_down.contains(&Key::ArrowUp));

        let release = InputEvent::Key {
            key: Key::ArrowUp,
            state: KeyState::Released,
            modifiers: Modifiers::NONE,
            repeat: false,
        };
        assert!(!s.apply_event(&release));
        assert!(s.keys_down.is_empty());
    }

    #[test]
    fn key_repeat_counts_as_fresh_press() {
        let mut s = InputState::default();
        s.apply_event(&press(Key::ArrowLeft, false));
        assert!(s.apply_event(&press(Key::ArrowLeft, true)));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut s = InputState::default();
        s.apply_event(&press(Key::F, false));
        s.apply_event(&InputEvent::Focused(false));
        assert!(s.keys_down.is_empty());
        assert!(!s.focused);
    }
}
