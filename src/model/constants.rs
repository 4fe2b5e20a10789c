//! Configuration constants and UI strings.
//!
//! This module contains the fixed strings and intervals used by the menu
//! bar shell: menu titles, key equivalents and the refresh cadence.

// === Display ===

/// Title shown in the status bar before any time has elapsed.
pub const INITIAL_TITLE: &str = "00:00:00";

/// Seconds between display refreshes.
pub const TICK_INTERVAL: f64 = 1.0;

// === Menu Titles ===

/// Title of the start/stop menu item.
pub const MENU_START_STOP: &str = "Start / Stop";

/// Title of the reset menu item.
pub const MENU_RESET: &str = "Reset";

/// Title of the manual time entry menu item.
pub const MENU_SET_TIME: &str = "Set Start Time…";

/// Title of the quit menu item.
pub const MENU_QUIT: &str = "Quit";

// === Key Equivalents ===

/// Key equivalent for start/stop.
pub const KEY_START_STOP: &str = "s";

/// Key equivalent for reset.
pub const KEY_RESET: &str = "r";

/// Key equivalent for manual time entry.
pub const KEY_SET_TIME: &str = "t";

/// Key equivalent for quit.
pub const KEY_QUIT: &str = "q";

// === Set-Time Prompt ===

/// Headline of the set-time prompt.
pub const PROMPT_TITLE: &str = "Set start time";

/// Explanatory text of the set-time prompt.
pub const PROMPT_BODY: &str = "Enter a time in HH:MM:SS (e.g. 00:45:00).";

/// Placeholder shown in the prompt's text field.
pub const PROMPT_PLACEHOLDER: &str = "HH:MM:SS";

/// Message shown when the entered time does not parse.
pub const INVALID_TIME_MESSAGE: &str = "Invalid time. Please use HH:MM:SS (e.g. 01:02:03).";
