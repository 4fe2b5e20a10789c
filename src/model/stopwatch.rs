//! Stopwatch state machine (pure Rust, no FFI).
//!
//! Two states, stopped and running, encoded by whether `started_at` is
//! present. Time banked from previous runs lives in `accumulated`; while
//! running, elapsed time is `accumulated` plus the time since `started_at`.

use std::time::{Duration, Instant};

use super::timecode::{format_hms, parse_hms, TimeParseError};

/// Stopwatch state: banked duration plus an optional running reference point.
///
/// `started_at` is `Some` exactly while the stopwatch is running, so the
/// "running iff reference point exists" invariant holds by construction.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    /// Duration banked while not running.
    accumulated: Duration,
    /// Reference point for the current run, present iff running.
    started_at: Option<Instant>,
}

impl Stopwatch {
    /// Create a stopped stopwatch at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the stopwatch currently running?
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Toggle between running and stopped.
    ///
    /// Stopping folds the current run into `accumulated`; starting records
    /// a new reference point. Never fails.
    pub fn start_stop(&mut self) {
        match self.started_at.take() {
            Some(started) => {
                self.accumulated += started.elapsed();
            }
            None => {
                self.started_at = Some(Instant::now());
            }
        }
    }

    /// Zero the banked duration.
    ///
    /// A running stopwatch stays running: its reference point moves to now,
    /// so elapsed time continues from zero without stopping.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        if self.started_at.is_some() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Overwrite the banked duration with the given second count.
    ///
    /// A running stopwatch keeps running from the new base value.
    pub fn set_time(&mut self, seconds: u64) {
        self.accumulated = Duration::from_secs(seconds);
        if self.started_at.is_some() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Parse `HH:MM:SS` and overwrite the banked duration.
    ///
    /// State is left unchanged when parsing fails.
    pub fn set_time_from_str(&mut self, text: &str) -> Result<(), TimeParseError> {
        let seconds = parse_hms(text)?;
        self.set_time(seconds);
        Ok(())
    }

    /// Total elapsed time. Pure read, no side effects.
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }

    /// Elapsed time rendered as `HH:MM:SS` (whole seconds).
    pub fn display_time(&self) -> String {
        format_hms(self.elapsed().as_secs() as i64)
    }
}
