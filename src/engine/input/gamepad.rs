// Gamepad input via gilrs, exposed in standard-layout button indices

use gilrs::{Button, EventType, Gilrs};
use log::{info, warn};

/// Number of buttons in the standard layout
pub const STANDARD_BUTTON_COUNT: usize = 17;

/// gilrs button for each standard-layout index
const STANDARD_LAYOUT: [Button; STANDARD_BUTTON_COUNT] = [
    Button::South,         // 0  A
    Button::East,          // 1  B
    Button::West,          // 2  X
    Button::North,         // 3  Y
    Button::LeftTrigger,   // 4  LB
    Button::RightTrigger,  // 5  RB
    Button::LeftTrigger2,  // 6  LT
    Button::RightTrigger2, // 7  RT
    Button::Select,        // 8
    Button::Start,         // 9
    Button::LeftThumb,     // 10
    Button::RightThumb,    // 11
    Button::DPadUp,        // 12
    Button::DPadDown,      // 13
    Button::DPadLeft,      // 14
    Button::DPadRight,     // 15
    Button::Mode,          // 16
];

/// Host-native names for gamepad buttons.
/// LT/RT have none and are only visible through their raw state.
pub fn default_button_map() -> Vec<(usize, &'static str)> {
    vec![
        (0, "ok"),
        (1, "cancel"),
        (2, "shift"),
        (3, "menu"),
        (4, "pageup"),
        (5, "pagedown"),
        (12, "up"),
        (13, "down"),
        (14, "left"),
        (15, "right"),
    ]
}

/// Button state of the first gamepad, refreshed once per frame
#[derive(Debug)]
pub struct GamepadState {
    button_map: Vec<(usize, &'static str)>,
    pressed: [bool; STANDARD_BUTTON_COUNT],
    just_pressed: [bool; STANDARD_BUTTON_COUNT],
    connected: bool,
}

impl GamepadState {
    pub fn new() -> Self {
        Self {
            button_map: default_button_map(),
            pressed: [false; STANDARD_BUTTON_COUNT],
            just_pressed: [false; STANDARD_BUTTON_COUNT],
            connected: false,
        }
    }

    /// Apply this frame's readings; `None` when no gamepad is connected
    pub fn apply(&mut self, buttons: Option<[bool; STANDARD_BUTTON_COUNT]>) {
        self.connected = buttons.is_some();
        let buttons = buttons.unwrap_or([false; STANDARD_BUTTON_COUNT]);
        for (index, &now) in buttons.iter().enumerate() {
            self.just_pressed[index] = now && !self.pressed[index];
        }
        self.pressed = buttons;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Raw state of a standard-layout button; out of range reads as released
    pub fn is_button_pressed(&self, index: usize) -> bool {
        self.pressed.get(index).copied().unwrap_or(false)
    }

    /// Whether a button mapped to `name` went down this frame
    pub fn is_triggered(&self, name: &str) -> bool {
        self.button_map
            .iter()
            .any(|(index, n)| *n == name && self.just_pressed[*index])
    }
}

impl Default for GamepadState {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the first connected gamepad through gilrs
pub struct GamepadReader {
    /// `None` when gamepad support could not be initialized
    gilrs: Option<Gilrs>,
}

impl GamepadReader {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => {
                for (_id, gamepad) in gilrs.gamepads() {
                    info!("Gamepad found: {}", gamepad.name());
                }
                Some(gilrs)
            }
            Err(e) => {
                warn!("Gamepad support unavailable: {}", e);
                None
            }
        };
        Self { gilrs }
    }

    /// Reader that never reports a gamepad
    pub fn disabled() -> Self {
        Self { gilrs: None }
    }

    /// Drain pending gamepad events and read the first connected gamepad
    pub fn poll(&mut self) -> Option<[bool; STANDARD_BUTTON_COUNT]> {
        let gilrs = self.gilrs.as_mut()?;

        while let Some(event) = gilrs.next_event() {
            match event.event {
                EventType::Connected => {
                    info!("Gamepad connected: {}", gilrs.gamepad(event.id).name());
                }
                EventType::Disconnected => {
                    info!("Gamepad disconnected: {}", event.id);
                }
                _ => {}
            }
        }

        let (_id, gamepad) = gilrs.gamepads().next()?;
        Some(STANDARD_LAYOUT.map(|button| gamepad.is_pressed(button)))
    }
}

impl Default for GamepadReader {
    fn default() -> Self {
        Self::new()
    }
}
