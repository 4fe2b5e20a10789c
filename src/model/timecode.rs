//! Time codec: seconds to `HH:MM:SS` and back.
//!
//! The display format is unbounded in the hours field (a stopwatch left
//! running past a day shows `25:00:00`, not `01:00:00`), and both minutes
//! and seconds are zero-padded to two digits.

use thiserror::Error;

/// Error raised when a time string does not match `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// Input was not exactly three colon-separated non-negative integers
    /// with minutes and seconds in `00..=59`.
    #[error("invalid time format: expected HH:MM:SS with minutes and seconds in 00-59")]
    InvalidFormat,
}

/// Format a second count as `HH:MM:SS`, clamping negative input to zero.
pub fn format_hms(total_seconds: i64) -> String {
    let s = total_seconds.max(0);
    let hours = s / 3600;
    let minutes = (s % 3600) / 60;
    let seconds = s % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parse `HH:MM:SS` into a total second count.
///
/// Accepts exactly three components separated by `:`. Hours may be any
/// non-negative integer; minutes and seconds must be in `00..=59`.
pub fn parse_hms(text: &str) -> Result<u64, TimeParseError> {
    let mut parts = text.split(':');
    let (h, m, s) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), Some(s), None) => (h, m, s),
        _ => return Err(TimeParseError::InvalidFormat),
    };

    let h: u64 = h.parse().map_err(|_| TimeParseError::InvalidFormat)?;
    let m: u64 = m.parse().map_err(|_| TimeParseError::InvalidFormat)?;
    let s: u64 = s.parse().map_err(|_| TimeParseError::InvalidFormat)?;

    if m > 59 || s > 59 {
        return Err(TimeParseError::InvalidFormat);
    }

    h.checked_mul(3600)
        .and_then(|hs| hs.checked_add(m * 60))
        .and_then(|t| t.checked_add(s))
        .ok_or(TimeParseError::InvalidFormat)
}
