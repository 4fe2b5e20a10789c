//! The menu bar controller.
//!
//! One instance owns the stopwatch and the retained status item for the
//! whole process. Menu actions publish an event to the bus and dispatch
//! immediately so the title updates without waiting for the next tick; the
//! one-second tick only re-renders.

use std::cell::RefCell;

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, NSObject};
use objc2::{define_class, msg_send, DefinedClass, MainThreadMarker, MainThreadOnly};

use stopbar::events::{publish, AppEvent};
use stopbar::Stopwatch;

use crate::ffi::Id;
use crate::handlers::dispatch_pending;
use crate::ui::status_bar::update_status_title;

/// State held in the controller's ivars.
pub struct ControllerIvars {
    /// The stopwatch core, mutated only on the main thread.
    pub stopwatch: RefCell<Stopwatch>,
    /// Strong reference to the status item, set by `install_status_bar`.
    pub status_item: RefCell<Option<Retained<AnyObject>>>,
}

define_class!(
    #[unsafe(super(NSObject))]
    #[thread_kind = MainThreadOnly]
    #[name = "StopbarController"]
    #[ivars = ControllerIvars]
    pub struct Controller;

    impl Controller {
        /// "Start / Stop" menu action.
        #[unsafe(method(onToggle:))]
        fn on_toggle(&self, _sender: Id) {
            publish(AppEvent::ToggleStartStop);
            unsafe { dispatch_pending(self) };
        }

        /// "Reset" menu action.
        #[unsafe(method(onReset:))]
        fn on_reset(&self, _sender: Id) {
            publish(AppEvent::ResetElapsed);
            unsafe { dispatch_pending(self) };
        }

        /// "Set Start Time…" menu action.
        #[unsafe(method(onSetTime:))]
        fn on_set_time(&self, _sender: Id) {
            publish(AppEvent::SetTimeRequested);
            unsafe { dispatch_pending(self) };
        }

        /// "Quit" menu action.
        #[unsafe(method(onQuit:))]
        fn on_quit(&self, _sender: Id) {
            publish(AppEvent::Quit);
            unsafe { dispatch_pending(self) };
        }

        /// One-second display tick. Render only; never mutates the stopwatch.
        #[unsafe(method(tick:))]
        fn tick(&self, _timer: Id) {
            self.render();
        }
    }
);

impl Controller {
    /// Create the controller with a fresh, stopped stopwatch.
    pub fn new(mtm: MainThreadMarker) -> Retained<Self> {
        let this = Self::alloc(mtm).set_ivars(ControllerIvars {
            stopwatch: RefCell::new(Stopwatch::new()),
            status_item: RefCell::new(None),
        });
        unsafe { msg_send![super(this), init] }
    }

    /// Store the retained status item so it stays alive for the process.
    pub fn set_status_item(&self, item: Retained<AnyObject>) {
        *self.ivars().status_item.borrow_mut() = Some(item);
    }

    /// Push the current elapsed time into the status item title.
    pub fn render(&self) {
        let title = self.ivars().stopwatch.borrow().display_time();
        if let Some(item) = self.ivars().status_item.borrow().as_ref() {
            unsafe { update_status_title(item, &title) };
        }
    }
}
