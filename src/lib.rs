//! Stopwatch core used by the menu bar app. Keep this crate free of macOS
//! FFI so the state machine and codec can run as normal integration tests.

pub mod events;
pub mod model;

// Re-export model types for convenience
pub use model::stopwatch::Stopwatch;
pub use model::timecode::{format_hms, parse_hms, TimeParseError};

// Re-export event types for convenience
pub use events::{AppEvent, EventBus, EventPublisher};
