//! Thin Cocoa interop layer for the menu bar shell.

pub mod bridge;

pub use bridge::{get_class, nsstring, nsstring_to_string, Id, NIL};
