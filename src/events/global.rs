//! Global access to the application event bus.
//!
//! The bus is initialized once at startup with [`init_event_bus`]; after
//! that any module can [`publish`] and the main thread calls
//! [`drain_events`] from its timer callback.
//!
//! The sender half is `Send + Sync` and lives in a `OnceLock`; the receiver
//! is wrapped in a `Mutex` only to satisfy `Sync` — it is touched from the
//! main thread alone, so contention is effectively zero.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();
static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_event_bus() {
    let (sender, receiver) = mpsc::channel();

    SENDER
        .set(sender)
        .expect("Event bus already initialized (sender)");
    RECEIVER
        .set(Mutex::new(receiver))
        .expect("Event bus already initialized (receiver)");
}

/// Get a publisher handle for the global bus.
///
/// # Panics
///
/// Panics if [`init_event_bus`] has not been called.
pub fn publisher() -> EventPublisher {
    let sender = SENDER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");
    EventPublisher::from_sender(sender.clone())
}

/// Publish a single event to the global bus.
///
/// # Panics
///
/// Panics if [`init_event_bus`] has not been called.
pub fn publish(event: AppEvent) {
    let sender = SENDER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");

    // Ignore send errors: receiver dropped means the app is shutting down.
    let _ = sender.send(event);
}

/// Drain all events published since the last drain.
///
/// # Panics
///
/// Panics if [`init_event_bus`] has not been called.
pub fn drain_events() -> Vec<AppEvent> {
    let receiver = RECEIVER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");
    let receiver = receiver.lock().expect("Event bus receiver mutex poisoned");

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
