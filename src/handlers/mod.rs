//! Event handling: drains the bus and applies events to the stopwatch.

pub mod dispatcher;

pub use dispatcher::dispatch_pending;
