//! Event dispatcher.
//!
//! Translates [`AppEvent`]s drained from the global bus into mutations of
//! the controller-owned stopwatch, then re-renders the status item title.
//! Menu actions call this right after publishing, so the display reflects
//! each action immediately instead of waiting for the next tick.

use objc2::{msg_send, DefinedClass};
use tracing::{debug, warn};

use stopbar::events::{drain_events, AppEvent};
use stopbar::model::constants::INVALID_TIME_MESSAGE;

use crate::app::Controller;
use crate::ffi::{get_class, Id, NIL};
use crate::ui::alerts::{run_set_time_prompt, show_error};

/// Drain all pending events, apply them, and re-render the title.
///
/// # Safety
/// Must be called from the main thread; the controller's stopwatch must not
/// be borrowed by the caller.
pub unsafe fn dispatch_pending(controller: &Controller) {
    for event in drain_events() {
        debug!(event = event.description(), "dispatching");
        dispatch_one(controller, event);
    }
    controller.render();
}

unsafe fn dispatch_one(controller: &Controller, event: AppEvent) {
    match event {
        AppEvent::ToggleStartStop => {
            controller.ivars().stopwatch.borrow_mut().start_stop();
        }

        AppEvent::ResetElapsed => {
            controller.ivars().stopwatch.borrow_mut().reset();
        }

        AppEvent::SetTimeRequested => prompt_and_set_time(controller),

        AppEvent::Quit => {
            let app: Id = msg_send![get_class(c"NSApplication"), sharedApplication];
            let _: () = msg_send![app, terminate: NIL];
        }
    }
}

/// Ask the user for a new elapsed time and apply it.
///
/// The stopwatch is left untouched when the user cancels or the input does
/// not parse; parse failures additionally surface an error alert.
unsafe fn prompt_and_set_time(controller: &Controller) {
    // Drop the borrow before entering the modal loop: display ticks keep
    // firing while the prompt is up and need to read the stopwatch.
    let current = controller.ivars().stopwatch.borrow().display_time();

    let Some(text) = run_set_time_prompt(&current) else {
        return;
    };

    let trimmed = text.trim();
    let result = controller
        .ivars()
        .stopwatch
        .borrow_mut()
        .set_time_from_str(trimmed);

    if let Err(err) = result {
        warn!(input = trimmed, %err, "rejected time input");
        show_error(INVALID_TIME_MESSAGE);
    }
}
