//! Application events published by the menu bar UI.
//!
//! Each variant corresponds to one menu action. The periodic display tick
//! is deliberately not an event: ticks only re-render the title and never
//! mutate stopwatch state.

/// High-level actions flowing from the menu to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Toggle between running and stopped ("Start / Stop").
    ToggleStartStop,

    /// Zero the elapsed time, keeping a running stopwatch running ("Reset").
    ResetElapsed,

    /// Ask the user for a new elapsed time ("Set Start Time…").
    SetTimeRequested,

    /// Terminate the application ("Quit").
    Quit,
}

impl AppEvent {
    /// Returns true if handling this event opens a modal dialog.
    ///
    /// Modal events must be handled last-resort on the main thread; the
    /// dispatcher uses this to know a drain cycle may block on user input.
    pub fn opens_dialog(&self) -> bool {
        matches!(self, AppEvent::SetTimeRequested)
    }

    /// Human-readable description for logging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ToggleStartStop => "Toggle start/stop",
            AppEvent::ResetElapsed => "Reset elapsed time",
            AppEvent::SetTimeRequested => "Prompt for a new time",
            AppEvent::Quit => "Quit the application",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_set_time_opens_a_dialog() {
        assert!(AppEvent::SetTimeRequested.opens_dialog());
        assert!(!AppEvent::ToggleStartStop.opens_dialog());
        assert!(!AppEvent::ResetElapsed.opens_dialog());
        assert!(!AppEvent::Quit.opens_dialog());
    }

    #[test]
    fn all_events_have_descriptions() {
        let events = [
            AppEvent::ToggleStartStop,
            AppEvent::ResetElapsed,
            AppEvent::SetTimeRequested,
            AppEvent::Quit,
        ];
        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
