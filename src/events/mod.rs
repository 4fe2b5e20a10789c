//! Application events and the bus that carries them.
//!
//! Menu actions publish [`AppEvent`]s; the main-thread dispatcher drains
//! and applies them. Everything here is pure Rust and fully testable.

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
