//! Keyboard state sampled once per frame

use std::collections::HashSet;

/// Directional keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
}

/// Set of currently held keys
///
/// Key events arrive between frames; the simulation only ever sees the set
/// as it stands when the frame runs.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Drop all held keys (restart, focus loss)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut input = InputState::new();
        assert!(!input.is_pressed(Key::Left));

        input.press(Key::Left);
        assert!(input.is_pressed(Key::Left));

        input.press(Key::Right);
        assert!(input.is_pressed(Key::Left) && input.is_pressed(Key::Right));

        input.release(Key::Left);
        assert!(!input.is_pressed(Key::Left));
        assert!(input.is_pressed(Key::Right));

        input.clear();
        assert!(!input.is_pressed(Key::Right));
    }

    #[test]
    fn test_repeat_press_is_idempotent() {
        let mut input = InputState::new();
        input.press(Key::Right);
        input.press(Key::Right);
        input.release(Key::Right);
        assert!(!input.is_pressed(Key::Right));
    }
}
