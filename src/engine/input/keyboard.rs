// Keyboard state keyed by host-native names

use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Default physical key to host name table.
/// A/W/S/D are taken over for the shoulder labels.
pub fn default_key_map() -> Vec<(KeyCode, &'static str)> {
    vec![
        (KeyCode::KeyA, "L1"),
        (KeyCode::KeyW, "L2"),
        (KeyCode::KeyS, "R1"),
        (KeyCode::KeyD, "R2"),
        (KeyCode::KeyQ, "pageup"),
        (KeyCode::PageUp, "pageup"),
        (KeyCode::PageDown, "pagedown"),
        (KeyCode::ShiftLeft, "shift"),
        (KeyCode::ShiftRight, "shift"),
        (KeyCode::ControlLeft, "control"),
        (KeyCode::ControlRight, "control"),
        (KeyCode::Escape, "escape"),
    ]
}

/// Tracks which host names are held and which went down this frame
#[derive(Debug)]
pub struct KeyboardState {
    /// Physical key to host name
    key_map: HashMap<KeyCode, &'static str>,

    /// Mapped keys currently held
    pressed_keys: HashSet<KeyCode>,

    /// Names that went down this frame
    just_pressed: HashSet<&'static str>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::with_key_map(default_key_map())
    }

    pub fn with_key_map(entries: Vec<(KeyCode, &'static str)>) -> Self {
        Self {
            key_map: entries.into_iter().collect(),
            pressed_keys: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply a physical key transition
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed if !repeat => self.press(key_code),
            ElementState::Pressed => {}
            ElementState::Released => self.release(key_code),
        }
    }

    fn press(&mut self, key_code: KeyCode) {
        let Some(&name) = self.key_map.get(&key_code) else {
            return;
        };
        if self.pressed_keys.contains(&key_code) {
            return;
        }
        // Another key for the same name is already down
        let name_held = self.is_down(name);
        self.pressed_keys.insert(key_code);
        if !name_held {
            self.just_pressed.insert(name);
        }
    }

    fn release(&mut self, key_code: KeyCode) {
        self.pressed_keys.remove(&key_code);
    }

    /// Whether any key mapped to `name` is held
    pub fn is_down(&self, name: &str) -> bool {
        self.pressed_keys
            .iter()
            .any(|key| self.key_map.get(key).is_some_and(|n| *n == name))
    }

    /// Whether `name` went down this frame
    pub fn is_triggered(&self, name: &str) -> bool {
        self.just_pressed.contains(name)
    }

    /// Clear per-frame state. Call after the frame's input was consumed.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Release everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.pressed_keys.clear();
        self.just_pressed.clear();
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(keyboard: &mut KeyboardState, key: KeyCode) {
        keyboard.process_key(key, ElementState::Pressed, false);
    }

    fn release(keyboard: &mut KeyboardState, key: KeyCode) {
        keyboard.process_key(key, ElementState::Released, false);
    }

    #[test]
    fn test_wasd_map_to_shoulder_labels() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyA);
        press(&mut keyboard, KeyCode::KeyW);
        press(&mut keyboard, KeyCode::KeyS);
        press(&mut keyboard, KeyCode::KeyD);

        for name in ["L1", "L2", "R1", "R2"] {
            assert!(keyboard.is_triggered(name), "{name} should be triggered");
            assert!(keyboard.is_down(name));
        }
    }

    #[test]
    fn test_trigger_cleared_on_end_frame() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyA);
        keyboard.end_frame();

        assert!(!keyboard.is_triggered("L1"));
        assert!(keyboard.is_down("L1"));
    }

    #[test]
    fn test_key_repeat_does_not_retrigger() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyD);
        keyboard.end_frame();

        keyboard.process_key(KeyCode::KeyD, ElementState::Pressed, true);
        assert!(!keyboard.is_triggered("R2"));

        // Repeated press event without the repeat flag also counts as held
        press(&mut keyboard, KeyCode::KeyD);
        assert!(!keyboard.is_triggered("R2"));
    }

    #[test]
    fn test_press_after_release_retriggers() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyS);
        keyboard.end_frame();
        release(&mut keyboard, KeyCode::KeyS);
        assert!(!keyboard.is_down("R1"));

        press(&mut keyboard, KeyCode::KeyS);
        assert!(keyboard.is_triggered("R1"));
    }

    #[test]
    fn test_second_key_for_held_name_does_not_retrigger() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::ShiftLeft);
        keyboard.end_frame();

        press(&mut keyboard, KeyCode::ShiftRight);
        assert!(!keyboard.is_triggered("shift"));

        release(&mut keyboard, KeyCode::ShiftLeft);
        assert!(keyboard.is_down("shift"));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyZ);
        assert!(keyboard.pressed_keys.is_empty());
        assert!(keyboard.just_pressed.is_empty());
    }

    #[test]
    fn test_page_keys() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::PageUp);
        press(&mut keyboard, KeyCode::PageDown);
        assert!(keyboard.is_triggered("pageup"));
        assert!(keyboard.is_triggered("pagedown"));
    }

    #[test]
    fn test_reset() {
        let mut keyboard = KeyboardState::new();
        press(&mut keyboard, KeyCode::KeyA);
        keyboard.reset();

        assert!(!keyboard.is_down("L1"));
        assert!(!keyboard.is_triggered("L1"));
    }
}
