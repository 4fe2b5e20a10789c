#![allow(unexpected_cfgs)] // Silence cfg warnings from objc2 macros

#[cfg(target_os = "macos")]
mod app;
#[cfg(target_os = "macos")]
mod ffi;
#[cfg(target_os = "macos")]
mod handlers;
#[cfg(target_os = "macos")]
mod macos_main;
#[cfg(target_os = "macos")]
mod ui;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stopbar=info")),
        )
        .init();

    stopbar::events::init_event_bus();

    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    {
        tracing::error!("stopbar requires macOS (AppKit status bar)");
        std::process::exit(1);
    }
}
