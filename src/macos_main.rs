//! macOS-specific entry point.
//!
//! Builds the status item and the one-second display timer, then hands
//! control to the AppKit run loop. All stopwatch logic lives in the library
//! crate; this module only wires it to the menu bar.

use objc2::rc::autoreleasepool;
use objc2::{msg_send, sel, MainThreadMarker};
use objc2_app_kit::{NSApplication, NSApplicationActivationPolicy};
use tracing::info;

use stopbar::model::constants::TICK_INTERVAL;

use crate::app::Controller;
use crate::ffi::{get_class, nsstring, Id, NIL};
use crate::ui::status_bar::install_status_bar;

/// Main entry point for macOS.
pub fn run() {
    let mtm = MainThreadMarker::new().expect("must run on the main thread");

    autoreleasepool(|_| {
        let app = NSApplication::sharedApplication(mtm);
        // Menu bar app: no Dock icon, no main window
        app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);

        let controller = Controller::new(mtm);

        unsafe {
            install_status_bar(&controller);
            let _ = create_tick_timer(&controller);
        }

        info!("status item installed, entering run loop");
        app.run();
    });
}

/// Create the repeating display timer.
///
/// Scheduled for CommonModes so the title keeps updating while the dropdown
/// menu is open or a modal prompt is tracking.
///
/// # Safety
/// Must be called from the main thread. The returned timer is retained by
/// the run loop.
unsafe fn create_tick_timer(controller: &Controller) -> Id {
    let timer: Id = msg_send![
        get_class(c"NSTimer"),
        timerWithTimeInterval: TICK_INTERVAL,
        target: controller,
        selector: sel!(tick:),
        userInfo: NIL,
        repeats: true
    ];

    let run_loop: Id = msg_send![get_class(c"NSRunLoop"), mainRunLoop];
    let common_modes = nsstring("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: &*common_modes];

    timer
}
