//! Cocoa utility functions.
//!
//! Helpers for the raw `msg_send!` plumbing in the UI layer: class lookup,
//! NSString conversion and the untyped object pointer alias.

use std::ffi::CStr;

use objc2::rc::Retained;
use objc2::runtime::{AnyClass, AnyObject};
use objc2_foundation::NSString;

/// Untyped Objective-C object pointer.
pub type Id = *mut AnyObject;

/// Null object pointer.
pub const NIL: Id = std::ptr::null_mut();

/// Look up an Objective-C class by name.
///
/// # Panics
///
/// Panics if the class is not registered with the runtime. The classes we
/// look up all ship with AppKit, so a miss means the binary is not linked
/// against it.
pub fn get_class(name: &CStr) -> &'static AnyClass {
    AnyClass::get(name)
        .unwrap_or_else(|| panic!("Objective-C class {:?} not found", name))
}

/// Create an NSString from `&str`.
///
/// Returns a retained NSString that manages its own memory.
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Copy the contents of an NSString pointer into a Rust `String`.
///
/// Returns an empty string for nil.
///
/// # Safety
/// `ptr` must be nil or a valid NSString instance.
pub unsafe fn nsstring_to_string(ptr: Id) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let ns: &NSString = &*(ptr as *const NSString);
    ns.to_string()
}
