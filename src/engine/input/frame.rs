// Plain per-frame input readings

use super::mapper::InputSampler;
use std::collections::{HashMap, HashSet};

/// Input readings for one frame, held in plain maps.
///
/// Raw states persist until changed; native triggers describe a single frame
/// and are dropped by [`FrameInputs::clear_triggers`].
#[derive(Debug, Clone, Default)]
pub struct FrameInputs {
    /// Instantaneous state of physical controls by index
    raw: HashMap<usize, bool>,

    /// Host-native names triggered this frame
    triggered: HashSet<String>,
}

impl FrameInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw state of a physical control
    pub fn set_raw(&mut self, index: usize, pressed: bool) {
        self.raw.insert(index, pressed);
    }

    /// Report a native trigger for this frame
    pub fn trigger(&mut self, name: impl Into<String>) {
        self.triggered.insert(name.into());
    }

    /// Forget this frame's native triggers
    pub fn clear_triggers(&mut self) {
        self.triggered.clear();
    }

    /// Release every raw control, as if the controller was unplugged
    pub fn release_all(&mut self) {
        self.raw.clear();
    }
}

impl InputSampler for FrameInputs {
    fn is_raw_pressed(&self, index: usize) -> bool {
        self.raw.get(&index).copied().unwrap_or(false)
    }

    fn is_triggered(&self, name: &str) -> bool {
        self.triggered.contains(name)
    }
}
