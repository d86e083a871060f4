// Keyboard and gamepad combined into the mapper's input view

use super::gamepad::{GamepadState, STANDARD_BUTTON_COUNT};
use super::keyboard::KeyboardState;
use super::mapper::InputSampler;

/// Everything the host knows about input for the current frame
#[derive(Debug, Default)]
pub struct HostInput {
    pub keyboard: KeyboardState,
    pub gamepad: GamepadState,
}

impl HostInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh gamepad readings for the frame about to be sampled
    pub fn refresh_gamepad(&mut self, buttons: Option<[bool; STANDARD_BUTTON_COUNT]>) {
        self.gamepad.apply(buttons);
    }

    /// Clear per-frame triggers once the frame was sampled
    pub fn end_frame(&mut self) {
        self.keyboard.end_frame();
    }
}

impl InputSampler for HostInput {
    fn is_raw_pressed(&self, index: usize) -> bool {
        self.gamepad.is_button_pressed(index)
    }

    fn is_triggered(&self, name: &str) -> bool {
        self.keyboard.is_triggered(name) || self.gamepad.is_triggered(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::{ActionId, LEFT_TRIGGER_INDEX};
    use crate::engine::input::config::MapperConfig;
    use crate::engine::input::mapper::EdgeTriggerMapper;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    fn buttons(pressed: &[usize]) -> Option<[bool; STANDARD_BUTTON_COUNT]> {
        let mut out = [false; STANDARD_BUTTON_COUNT];
        for &index in pressed {
            out[index] = true;
        }
        Some(out)
    }

    fn ids(raw: &[u32]) -> Vec<ActionId> {
        raw.iter().filter_map(|&r| ActionId::from_raw(r)).collect()
    }

    fn frame(mapper: &mut EdgeTriggerMapper<HostInput, Vec<ActionId>>) -> Vec<ActionId> {
        mapper.sample();
        mapper.input_mut().end_frame();
        std::mem::take(mapper.scheduler_mut())
    }

    #[test]
    fn test_keyboard_and_gamepad_both_trigger() {
        let mut input = HostInput::new();
        input
            .keyboard
            .process_key(KeyCode::PageUp, ElementState::Pressed, false);
        input.refresh_gamepad(buttons(&[5]));

        assert!(input.is_triggered("pageup"));
        assert!(input.is_triggered("pagedown"));
        assert!(!input.is_triggered("L1"));
    }

    #[test]
    fn test_raw_state_comes_from_gamepad() {
        let mut input = HostInput::new();
        input.refresh_gamepad(buttons(&[LEFT_TRIGGER_INDEX]));
        assert!(input.is_raw_pressed(LEFT_TRIGGER_INDEX));

        input.refresh_gamepad(None);
        assert!(!input.is_raw_pressed(LEFT_TRIGGER_INDEX));
    }

    #[test]
    fn test_held_left_trigger_reserves_once() {
        let mut mapper =
            EdgeTriggerMapper::configure(&MapperConfig::default(), HostInput::new(), Vec::new());

        let mut reserved = Vec::new();
        for _ in 0..30 {
            mapper
                .input_mut()
                .refresh_gamepad(buttons(&[LEFT_TRIGGER_INDEX]));
            reserved.extend(frame(&mut mapper));
        }
        assert_eq!(reserved, ids(&[2]));
    }

    #[test]
    fn test_bumper_and_key_alias_reserve_bound_events() {
        let mut mapper =
            EdgeTriggerMapper::configure(&MapperConfig::default(), HostInput::new(), Vec::new());

        // RB on the gamepad
        mapper.input_mut().refresh_gamepad(buttons(&[5]));
        assert_eq!(frame(&mut mapper), ids(&[3]));

        // A on the keyboard, RB still held
        mapper
            .input_mut()
            .keyboard
            .process_key(KeyCode::KeyA, ElementState::Pressed, false);
        mapper.input_mut().refresh_gamepad(buttons(&[5]));
        assert_eq!(frame(&mut mapper), ids(&[1]));
    }

    #[test]
    fn test_w_key_fires_l2_without_gamepad() {
        let mut mapper =
            EdgeTriggerMapper::configure(&MapperConfig::default(), HostInput::new(), Vec::new());

        mapper.input_mut().refresh_gamepad(None);
        mapper
            .input_mut()
            .keyboard
            .process_key(KeyCode::KeyW, ElementState::Pressed, false);
        assert_eq!(frame(&mut mapper), ids(&[2]));

        // Key still held
        mapper.input_mut().refresh_gamepad(None);
        assert!(frame(&mut mapper).is_empty());
    }
}
