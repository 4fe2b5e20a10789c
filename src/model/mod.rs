//! Pure model layer: stopwatch state machine, time codec and constants.
//!
//! Nothing in this module touches AppKit, so it compiles and tests on any
//! platform.

pub mod constants;
pub mod stopwatch;
pub mod timecode;

pub use constants::*;
pub use stopwatch::Stopwatch;
pub use timecode::{format_hms, parse_hms, TimeParseError};
