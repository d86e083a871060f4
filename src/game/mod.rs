// Game-side consumers of mapped input

pub mod common_events;

pub use common_events::CommonEventQueue;
