// Binding configuration from host plugin parameters

use super::action::{
    digital_shoulder_bindings, shoulder_bindings, ActionId, InputLabel, TriggerBinding,
};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Parameter name for the edge detection switch
pub const EDGE_DETECTION_PARAM: &str = "Edge Detection";

/// Errors raised while reading a parameter file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse parameter file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parameter name holding the common event for a label
pub fn action_param_name(label: InputLabel) -> String {
    format!("{} Common Event", label.as_str())
}

/// A single parameter value as written in TOML
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ParamValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl ParamValue {
    fn into_text(self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Boolean(v) => v.to_string(),
            Self::Text(v) => v,
        }
    }
}

/// Raw named parameters, as the host hands them to plugins.
/// Every value is a string; interpretation happens in [`MapperConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginParameters {
    values: HashMap<String, String>,
}

impl PluginParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse parameters from a flat TOML table
    ///
    /// ```toml
    /// "L1 Common Event" = 5
    /// "R2 Common Event" = "8"
    /// "Edge Detection" = true
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let table: HashMap<String, ParamValue> = toml::from_str(source)?;
        Ok(Self {
            values: table
                .into_iter()
                .map(|(name, value)| (name, value.into_text()))
                .collect(),
        })
    }

    /// Load parameters from a TOML file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

/// Resolved configuration for the mapper, fixed after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// Common events in [`InputLabel::ALL`] order
    actions: [ActionId; 4],

    /// Whether analog triggers are edge-detected from their raw state
    edge_detection: bool,
}

impl MapperConfig {
    /// Resolve parameters, substituting defaults for anything missing or invalid
    pub fn from_parameters(params: &PluginParameters) -> Self {
        let actions = InputLabel::ALL.map(|label| {
            resolve_action(label, params.get(&action_param_name(label)))
        });
        let edge_detection =
            resolve_flag(EDGE_DETECTION_PARAM, params.get(EDGE_DETECTION_PARAM), true);

        Self {
            actions,
            edge_detection,
        }
    }

    /// Common event bound to a label
    pub fn action(&self, label: InputLabel) -> ActionId {
        let index = InputLabel::ALL
            .iter()
            .position(|l| *l == label)
            .unwrap_or_default();
        self.actions[index]
    }

    pub fn edge_detection(&self) -> bool {
        self.edge_detection
    }

    /// Disable or enable analog edge detection
    pub fn with_edge_detection(mut self, enabled: bool) -> Self {
        self.edge_detection = enabled;
        self
    }

    /// Build the trigger bindings this configuration describes
    pub fn bindings(&self) -> Vec<TriggerBinding> {
        if self.edge_detection {
            shoulder_bindings(self.actions)
        } else {
            digital_shoulder_bindings(self.actions)
        }
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            actions: InputLabel::ALL.map(|label| label.default_action()),
            edge_detection: true,
        }
    }
}

/// Interpret a common event parameter.
/// Empty, zero, negative, fractional or non-numeric values use the label default.
fn resolve_action(label: InputLabel, raw: Option<&str>) -> ActionId {
    let default = label.default_action();
    let text = match raw.map(str::trim) {
        None | Some("") => {
            debug!("{} has no common event configured, using {}", label, default);
            return default;
        }
        Some(text) => text,
    };

    let parsed = text
        .parse::<f64>()
        .ok()
        .filter(|v| v.fract() == 0.0 && *v >= 1.0 && *v <= u32::MAX as f64)
        .and_then(|v| ActionId::from_raw(v as u32));

    match parsed {
        Some(id) => id,
        None => {
            if text != "0" {
                warn!(
                    "Invalid common event '{}' for {}, using {}",
                    text, label, default
                );
            }
            default
        }
    }
}

fn resolve_flag(name: &str, raw: Option<&str>, default: bool) -> bool {
    match raw.map(str::trim) {
        None | Some("") => default,
        Some(text) => match text.to_ascii_lowercase().as_str() {
            "true" | "on" | "1" => true,
            "false" | "off" | "0" => false,
            _ => {
                warn!("Invalid value '{}' for {}, using {}", text, name, default);
                default
            }
        },
    }
}
