//! Status bar (menu bar) item with dropdown menu.
//!
//! Creates the stopwatch readout in the macOS menu bar with options:
//! - Start / Stop
//! - Reset
//! - Set Start Time…
//! - Quit

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, Sel};
use objc2::{msg_send, sel};

use stopbar::model::constants::{
    INITIAL_TITLE, KEY_QUIT, KEY_RESET, KEY_SET_TIME, KEY_START_STOP, MENU_QUIT, MENU_RESET,
    MENU_SET_TIME, MENU_START_STOP,
};

use crate::app::Controller;
use crate::ffi::{get_class, nsstring, Id, NIL};

/// Install the status bar item with its dropdown menu.
///
/// The item is retained and handed to the controller so it stays alive for
/// the lifetime of the process.
///
/// # Safety
/// Must be called from the main thread, after the app is initialized.
pub unsafe fn install_status_bar(controller: &Controller) {
    let status_bar: Id = msg_send![get_class(c"NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: Id = msg_send![status_bar, statusItemWithLength: -1.0f64];

    let button: Id = msg_send![status_item, button];
    if button != NIL {
        let _: () = msg_send![button, setTitle: &*nsstring(INITIAL_TITLE)];
    }

    let menu = create_menu(controller);
    let _: () = msg_send![status_item, setMenu: menu];

    if let Some(retained) = Retained::retain(status_item) {
        controller.set_status_item(retained);
    }
}

/// Write a new title into the status item's button.
///
/// # Safety
/// `status_item` must be a valid NSStatusItem; main thread only.
pub unsafe fn update_status_title(status_item: &AnyObject, title: &str) {
    let button: Id = msg_send![status_item, button];
    if button != NIL {
        let _: () = msg_send![button, setTitle: &*nsstring(title)];
    }
}

/// Create the dropdown menu, with every item targeting the controller.
unsafe fn create_menu(controller: &Controller) -> Id {
    let menu: Id = msg_send![get_class(c"NSMenu"), new];

    add_item(menu, controller, MENU_START_STOP, sel!(onToggle:), KEY_START_STOP);
    add_item(menu, controller, MENU_RESET, sel!(onReset:), KEY_RESET);
    add_separator(menu);
    add_item(menu, controller, MENU_SET_TIME, sel!(onSetTime:), KEY_SET_TIME);
    add_separator(menu);
    add_item(menu, controller, MENU_QUIT, sel!(onQuit:), KEY_QUIT);

    menu
}

unsafe fn add_item(menu: Id, controller: &Controller, title: &str, action: Sel, key: &str) {
    let item: Id = msg_send![get_class(c"NSMenuItem"), alloc];
    let item: Id = msg_send![
        item,
        initWithTitle: &*nsstring(title),
        action: action,
        keyEquivalent: &*nsstring(key)
    ];
    let _: () = msg_send![item, setTarget: controller];
    let _: () = msg_send![menu, addItem: item];
}

unsafe fn add_separator(menu: Id) {
    let separator: Id = msg_send![get_class(c"NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];
}
