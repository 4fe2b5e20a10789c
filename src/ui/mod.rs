//! AppKit surface: status bar item, dropdown menu and modal dialogs.

pub mod alerts;
pub mod status_bar;
