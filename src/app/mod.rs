//! Application controller: the Objective-C object targeted by menu items
//! and the display timer.

pub mod controller;

pub use controller::Controller;
