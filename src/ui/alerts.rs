//! Modal dialogs: the set-time prompt and the invalid-input alert.

use objc2::msg_send;
use objc2_foundation::{NSPoint, NSRect, NSSize};

use stopbar::model::constants::{PROMPT_BODY, PROMPT_PLACEHOLDER, PROMPT_TITLE};

use crate::ffi::{get_class, nsstring, nsstring_to_string, Id};

// NSAlertFirstButtonReturn = 1000
const FIRST_BUTTON_RETURN: isize = 1000;

// NSAlertStyleWarning = 0, NSAlertStyleInformational = 1
const ALERT_STYLE_WARNING: u64 = 0;
const ALERT_STYLE_INFORMATIONAL: u64 = 1;

/// Run the modal set-time prompt, prefilled with the current elapsed time.
///
/// Returns the entered text, or `None` if the user cancelled.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn run_set_time_prompt(current: &str) -> Option<String> {
    let alert: Id = msg_send![get_class(c"NSAlert"), new];
    let _: () = msg_send![alert, setMessageText: &*nsstring(PROMPT_TITLE)];
    let _: () = msg_send![alert, setInformativeText: &*nsstring(PROMPT_BODY)];
    let _: () = msg_send![alert, setAlertStyle: ALERT_STYLE_INFORMATIONAL];

    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(220.0, 24.0));
    let input: Id = msg_send![get_class(c"NSTextField"), alloc];
    let input: Id = msg_send![input, initWithFrame: frame];
    let _: () = msg_send![input, setPlaceholderString: &*nsstring(PROMPT_PLACEHOLDER)];
    let _: () = msg_send![input, setStringValue: &*nsstring(current)];
    let _: () = msg_send![alert, setAccessoryView: input];

    let _: Id = msg_send![alert, addButtonWithTitle: &*nsstring("OK")];
    let _: Id = msg_send![alert, addButtonWithTitle: &*nsstring("Cancel")];

    let response: isize = msg_send![alert, runModal];
    if response != FIRST_BUTTON_RETURN {
        return None;
    }

    let value: Id = msg_send![input, stringValue];
    Some(nsstring_to_string(value))
}

/// Show a modal warning alert with the given message.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn show_error(message: &str) {
    let alert: Id = msg_send![get_class(c"NSAlert"), new];
    let _: () = msg_send![alert, setMessageText: &*nsstring("Error")];
    let _: () = msg_send![alert, setInformativeText: &*nsstring(message)];
    let _: () = msg_send![alert, setAlertStyle: ALERT_STYLE_WARNING];
    let _: Id = msg_send![alert, addButtonWithTitle: &*nsstring("OK")];
    let _: isize = msg_send![alert, runModal];
}
