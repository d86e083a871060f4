// Edge-triggered mapping from shoulder inputs to common events

use super::action::{ActionId, InputLabel, SourceKind, TriggerBinding};
use super::config::MapperConfig;
use log::{debug, info};
use std::collections::HashMap;

/// Input state the host refreshes once per frame
pub trait InputSampler {
    /// Whether the physical control at `index` is held right now.
    /// Missing controllers and unknown indices read as released.
    fn is_raw_pressed(&self, index: usize) -> bool;

    /// Whether the host-native name went down this frame
    fn is_triggered(&self, name: &str) -> bool;
}

/// Queue of actions the host runs at a later point
pub trait ActionScheduler {
    fn reserve(&mut self, action: ActionId);
}

impl ActionScheduler for Vec<ActionId> {
    fn reserve(&mut self, action: ActionId) {
        self.push(action);
    }
}

/// Previous-frame raw state of every analog source
#[derive(Debug, Default)]
pub struct EdgeState {
    previous: HashMap<InputLabel, bool>,
}

impl EdgeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw state recorded on the previous frame
    pub fn was_pressed(&self, label: InputLabel) -> bool {
        self.previous.get(&label).copied().unwrap_or(false)
    }

    /// Record this frame's raw state, returning the previous one
    pub fn replace(&mut self, label: InputLabel, now: bool) -> bool {
        self.previous.insert(label, now).unwrap_or(false)
    }
}

/// Turns per-frame input into at most one reserved action per press.
///
/// Digital sources fire when the host reports them (or an alias) as triggered.
/// Analog sources additionally fire on a rising edge of their raw state, so a
/// trigger held for many frames reserves its action once.
pub struct EdgeTriggerMapper<I, S> {
    /// Host input, read during `sample`
    input: I,

    /// Where fired actions are reserved
    scheduler: S,

    /// One binding per label
    bindings: Vec<TriggerBinding>,

    /// Last raw state of analog sources
    edges: EdgeState,

    /// Number of frames sampled
    frame_count: u64,
}

impl<I: InputSampler, S: ActionScheduler> EdgeTriggerMapper<I, S> {
    /// Create a mapper from a resolved configuration
    pub fn configure(config: &MapperConfig, input: I, scheduler: S) -> Self {
        info!(
            "Shoulder bindings: L1 -> {}, L2 -> {}, R1 -> {}, R2 -> {} (trigger edge detection {})",
            config.action(InputLabel::L1),
            config.action(InputLabel::L2),
            config.action(InputLabel::R1),
            config.action(InputLabel::R2),
            if config.edge_detection() { "on" } else { "off" },
        );
        Self::with_bindings(config.bindings(), input, scheduler)
    }

    /// Create a mapper from explicit bindings.
    /// A later binding for an already bound label replaces the earlier one.
    pub fn with_bindings(bindings: Vec<TriggerBinding>, input: I, scheduler: S) -> Self {
        let mut unique: Vec<TriggerBinding> = Vec::with_capacity(bindings.len());
        for binding in bindings {
            match unique.iter_mut().find(|b| b.label() == binding.label()) {
                Some(existing) => *existing = binding,
                None => unique.push(binding),
            }
        }

        let mut edges = EdgeState::new();
        for binding in unique.iter().filter(|b| b.source.is_analog()) {
            edges.replace(binding.label(), false);
        }

        Self {
            input,
            scheduler,
            bindings: unique,
            edges,
            frame_count: 0,
        }
    }

    /// Evaluate every binding for the current frame.
    /// Call once per frame, after the host refreshed its input.
    /// Returns how many actions were reserved.
    pub fn sample(&mut self) -> usize {
        let Self {
            input,
            scheduler,
            bindings,
            edges,
            frame_count,
        } = self;

        *frame_count += 1;
        let mut fired = 0;

        for binding in bindings.iter() {
            let label = binding.label();
            let native = input.is_triggered(label.as_str())
                || binding.aliases.iter().any(|alias| input.is_triggered(alias));

            let fire = match binding.source.kind {
                SourceKind::Digital => native,
                SourceKind::Analog { raw_index } => {
                    let now = input.is_raw_pressed(raw_index);
                    // Stored even when the native path fires
                    let previous = edges.replace(label, now);
                    native || (now && !previous)
                }
            };

            if fire {
                debug!(
                    "Frame {}: {} fired, reserving common event {}",
                    frame_count, label, binding.action
                );
                scheduler.reserve(binding.action);
                fired += 1;
            }
        }

        fired
    }

    pub fn bindings(&self) -> &[TriggerBinding] {
        &self.bindings
    }

    pub fn edge_state(&self) -> &EdgeState {
        &self.edges
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Host input, for refreshing between frames
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
