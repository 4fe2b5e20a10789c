//! Tests for the stopwatch state machine.
//!
//! Timing assertions use generous upper bounds so they stay reliable on a
//! loaded CI machine; the interesting part is the lower bound and the
//! running/stopped transitions, not sub-millisecond accuracy.

use std::thread::sleep;
use std::time::Duration;

use stopbar::Stopwatch;

/// Long enough to be measurable, short enough to keep the suite fast.
const WAIT: Duration = Duration::from_millis(50);

/// Upper bound for "approximately zero" elapsed time.
const SLACK: Duration = Duration::from_millis(25);

// === Initial State ===

#[test]
fn starts_stopped_at_zero() {
    let sw = Stopwatch::new();
    assert!(!sw.is_running());
    assert_eq!(sw.elapsed(), Duration::ZERO);
}

#[test]
fn initial_display_is_all_zeros() {
    let sw = Stopwatch::new();
    assert_eq!(sw.display_time(), "00:00:00");
}

#[test]
fn elapsed_stays_zero_while_stopped() {
    let sw = Stopwatch::new();
    sleep(WAIT);
    assert_eq!(sw.elapsed(), Duration::ZERO);
}

// === Start / Stop ===

#[test]
fn start_stop_toggles_running() {
    let mut sw = Stopwatch::new();
    sw.start_stop();
    assert!(sw.is_running());
    sw.start_stop();
    assert!(!sw.is_running());
}

#[test]
fn elapsed_accrues_while_running() {
    let mut sw = Stopwatch::new();
    sw.start_stop();
    sleep(WAIT);
    let elapsed = sw.elapsed();
    assert!(elapsed >= WAIT, "elapsed {elapsed:?} below wait {WAIT:?}");
    assert!(elapsed < WAIT * 10, "elapsed {elapsed:?} implausibly large");
}

#[test]
fn stopping_banks_the_elapsed_time() {
    let mut sw = Stopwatch::new();
    sw.start_stop();
    sleep(WAIT);
    sw.start_stop();

    let banked = sw.elapsed();
    assert!(banked >= WAIT);

    // Frozen once stopped
    sleep(WAIT);
    assert_eq!(sw.elapsed(), banked);
}

#[test]
fn immediate_start_stop_leaves_accumulated_unchanged() {
    let mut sw = Stopwatch::new();
    sw.start_stop();
    sw.start_stop();
    assert!(!sw.is_running());
    assert!(sw.elapsed() < SLACK);
}

#[test]
fn restarting_resumes_from_banked_time() {
    let mut sw = Stopwatch::new();
    sw.set_time(100);
    sw.start_stop();
    sleep(WAIT);
    assert!(sw.elapsed() >= Duration::from_secs(100) + WAIT);
}

// === Reset ===

#[test]
fn reset_while_stopped_zeroes_elapsed() {
    let mut sw = Stopwatch::new();
    sw.set_time(42);
    sw.reset();
    assert!(!sw.is_running());
    assert_eq!(sw.elapsed(), Duration::ZERO);
}

#[test]
fn reset_while_running_keeps_running_from_zero() {
    let mut sw = Stopwatch::new();
    sw.set_time(42);
    sw.start_stop();
    sleep(WAIT);

    sw.reset();
    assert!(sw.is_running());
    assert!(sw.elapsed() < SLACK);

    // Subsequent waiting keeps increasing elapsed
    sleep(WAIT);
    assert!(sw.elapsed() >= WAIT);
}

// === Set Time ===

#[test]
fn set_time_overwrites_banked_duration() {
    let mut sw = Stopwatch::new();
    sw.set_time(3661);
    assert_eq!(sw.elapsed(), Duration::from_secs(3661));
    assert_eq!(sw.display_time(), "01:01:01");
}

#[test]
fn set_time_while_running_rebases_to_now() {
    let mut sw = Stopwatch::new();
    sw.start_stop();
    sleep(WAIT);

    sw.set_time(10);
    assert!(sw.is_running());

    let elapsed = sw.elapsed();
    assert!(elapsed >= Duration::from_secs(10));
    assert!(elapsed < Duration::from_secs(10) + SLACK);
}

#[test]
fn set_time_from_str_accepts_well_formed_input() {
    let mut sw = Stopwatch::new();
    sw.set_time_from_str("00:45:00").unwrap();
    assert_eq!(sw.elapsed(), Duration::from_secs(2700));
}

#[test]
fn set_time_from_str_leaves_state_unchanged_on_failure() {
    let mut sw = Stopwatch::new();
    sw.set_time(60);

    assert!(sw.set_time_from_str("12:60:00").is_err());
    assert!(sw.set_time_from_str("not a time").is_err());

    assert!(!sw.is_running());
    assert_eq!(sw.elapsed(), Duration::from_secs(60));
}
