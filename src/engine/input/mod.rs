// Input handling system
//
// Maps keyboard keys and gamepad shoulder buttons to the labels L1, L2, R1 and R2,
// and reserves a common event once per press of each label.
//
// ## Architecture
//
// - `action`: Labels, input sources and their bindings to common events
// - `config`: Plugin parameters and the resolved mapper configuration
// - `mapper`: The edge-triggered mapper and the traits it talks to the host through
// - `frame`: Map-backed input readings for a single frame
// - `keyboard`: Physical keys to host names
// - `gamepad`: First gamepad through gilrs, in standard-layout indices
// - `host`: Keyboard and gamepad combined into one sampler
//
// ## Usage Example
//
// ```rust
// use engine::input::{EdgeTriggerMapper, HostInput, MapperConfig};
// use game::CommonEventQueue;
//
// let config = MapperConfig::from_parameters(&params);
// let mut mapper = EdgeTriggerMapper::configure(&config, HostInput::new(), CommonEventQueue::new());
//
// // Once per frame, after the host refreshed its input
// mapper.input_mut().refresh_gamepad(gamepad.poll());
// mapper.sample();
// mapper.input_mut().end_frame();
//
// mapper.scheduler_mut().run_pending(|event| run_common_event(event));
// ```

pub mod action;
pub mod config;
pub mod frame;
pub mod gamepad;
pub mod host;
pub mod keyboard;
pub mod mapper;

// Re-export commonly used types
pub use action::{ActionId, InputLabel, InputSource, SourceKind, TriggerBinding};
pub use config::{ConfigError, MapperConfig, PluginParameters};
pub use frame::FrameInputs;
pub use gamepad::{GamepadReader, GamepadState};
pub use host::HostInput;
pub use keyboard::KeyboardState;
pub use mapper::{ActionScheduler, EdgeState, EdgeTriggerMapper, InputSampler};
