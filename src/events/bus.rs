//! Event bus built on an mpsc channel.
//!
//! Producers publish from anywhere via [`EventPublisher`]; the main thread
//! drains in batches via [`EventBus::drain`].

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Multi-producer, single-consumer event queue.
///
/// Publishers are cheap clones of the sending half; the receiving half is
/// polled from the main thread between run-loop callbacks.
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a cloneable publisher handle for this bus.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Take the next pending event, if any, without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // Disconnected means every publisher was dropped; treat as empty.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events, in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable, thread-safe handle for publishing events.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Wrap an existing sender (used by the global access module).
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    /// Queue an event for the next drain cycle.
    ///
    /// Send errors are ignored: a dropped receiver means the app is
    /// shutting down.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}
