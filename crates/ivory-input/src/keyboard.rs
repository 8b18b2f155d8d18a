/// Keyboard access for the piano.
///
/// A window or terminal layer answers "is this key code down right now";
/// slot mapping and edge detection happen above it.
use std::collections::HashSet;

/// Source of held/released state for raw key codes.
pub trait KeyboardBackend {
    /// Whether the key with this code is down at the moment of the call.
    fn is_key_pressed(&self, keycode: i32) -> bool;
}

/// Virtual keyboard backend for tests and scripted input.
#[derive(Debug, Clone, Default)]
pub struct VirtualKeyboardBackend {
    pressed: HashSet<i32>,
}

impl VirtualKeyboardBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, keycode: i32) {
        self.pressed.insert(keycode);
    }

    pub fn release(&mut self, keycode: i32) {
        self.pressed.remove(&keycode);
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
    }
}

impl KeyboardBackend for VirtualKeyboardBackend {
    fn is_key_pressed(&self, keycode: i32) -> bool {
        self.pressed.contains(&keycode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut kb = VirtualKeyboardBackend::new();
        assert!(!kb.is_key_pressed(65));

        kb.press(65);
        assert!(kb.is_key_pressed(65));
        assert!(!kb.is_key_pressed(66));

        kb.release(65);
        assert!(!kb.is_key_pressed(65));
    }

    #[test]
    fn release_all_clears() {
        let mut kb = VirtualKeyboardBackend::new();
        kb.press(1);
        kb.press(2);
        kb.release_all();
        assert!(!kb.is_key_pressed(1));
        assert!(!kb.is_key_pressed(2));
    }
}
