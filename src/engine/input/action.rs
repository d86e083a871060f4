// Input labels, sources and their bindings to common events

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Standard-layout index of the left analog trigger (LT)
pub const LEFT_TRIGGER_INDEX: usize = 6;

/// Standard-layout index of the right analog trigger (RT)
pub const RIGHT_TRIGGER_INDEX: usize = 7;

/// Logical input labels the shoulder buttons are remapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputLabel {
    L1,
    L2,
    R1,
    R2,
}

impl InputLabel {
    /// All labels, in binding order
    pub const ALL: [InputLabel; 4] = [Self::L1, Self::L2, Self::R1, Self::R2];

    /// Host-native name of this label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::R1 => "R1",
            Self::R2 => "R2",
        }
    }

    /// Common event used when no valid one is configured
    pub fn default_action(&self) -> ActionId {
        let raw = match self {
            Self::L1 => 1,
            Self::L2 => 2,
            Self::R1 => 3,
            Self::R2 => 4,
        };
        ActionId::from_raw(raw).unwrap_or(ActionId::FIRST)
    }
}

impl fmt::Display for InputLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L1" => Ok(Self::L1),
            "L2" => Ok(Self::L2),
            "R1" => Ok(Self::R1),
            "R2" => Ok(Self::R2),
            other => Err(format!("unknown input label: {other}")),
        }
    }
}

/// Identifier of a common event the host can run. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(NonZeroU32);

impl ActionId {
    pub const FIRST: ActionId = ActionId(NonZeroU32::MIN);

    /// Returns `None` for zero
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a source reports presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// The host already reports "triggered this frame"
    Digital,
    /// Only an instantaneous pressed state of a physical control is available
    Analog { raw_index: usize },
}

/// A labelled input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputSource {
    pub label: InputLabel,
    pub kind: SourceKind,
}

impl InputSource {
    /// Create a digital input source
    pub fn digital(label: InputLabel) -> Self {
        Self {
            label,
            kind: SourceKind::Digital,
        }
    }

    /// Create an analog input source read from a raw control index
    pub fn analog(label: InputLabel, raw_index: usize) -> Self {
        Self {
            label,
            kind: SourceKind::Analog { raw_index },
        }
    }

    pub fn is_analog(&self) -> bool {
        matches!(self.kind, SourceKind::Analog { .. })
    }
}

/// Binds an input source to the common event it reserves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerBinding {
    pub source: InputSource,
    pub action: ActionId,
    /// Other host-native names that trigger this binding
    pub aliases: Vec<&'static str>,
}

impl TriggerBinding {
    pub fn new(source: InputSource, action: ActionId) -> Self {
        Self {
            source,
            action,
            aliases: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: &'static str) -> Self {
        self.aliases.push(alias);
        self
    }

    pub fn label(&self) -> InputLabel {
        self.source.label
    }
}

/// Shoulder bindings with analog triggers edge-detected from raw indices 6/7
pub fn shoulder_bindings(actions: [ActionId; 4]) -> Vec<TriggerBinding> {
    let [l1, l2, r1, r2] = actions;
    vec![
        TriggerBinding::new(InputSource::digital(InputLabel::L1), l1).with_alias("pageup"),
        TriggerBinding::new(
            InputSource::analog(InputLabel::L2, LEFT_TRIGGER_INDEX),
            l2,
        ),
        TriggerBinding::new(InputSource::digital(InputLabel::R1), r1).with_alias("pagedown"),
        TriggerBinding::new(
            InputSource::analog(InputLabel::R2, RIGHT_TRIGGER_INDEX),
            r2,
        ),
    ]
}

/// Shoulder bindings without trigger edge detection.
/// L2/R2 fall back to the host's `shift`/`control` names.
pub fn digital_shoulder_bindings(actions: [ActionId; 4]) -> Vec<TriggerBinding> {
    let [l1, l2, r1, r2] = actions;
    vec![
        TriggerBinding::new(InputSource::digital(InputLabel::L1), l1).with_alias("pageup"),
        TriggerBinding::new(InputSource::digital(InputLabel::L2), l2).with_alias("shift"),
        TriggerBinding::new(InputSource::digital(InputLabel::R1), r1).with_alias("pagedown"),
        TriggerBinding::new(InputSource::digital(InputLabel::R2), r2).with_alias("control"),
    ]
}
