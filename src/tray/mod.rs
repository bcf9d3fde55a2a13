//! System tray application.
//!
//! The tray icon and its context menu are the program's only UI surface.
//! The context menu holds a single Exit entry; choosing it is the one
//! transition out of the event loop.

#![allow(dead_code)]

/// Tray icon tooltip.
pub const TOOLTIP: &str = "Multiclient";

/// Label of the only context menu entry.
pub const EXIT_LABEL: &str = "Exit";

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::run_tray;

#[cfg(not(windows))]
pub fn run_tray() -> Result<(), crate::error::TrayError> {
    Err(crate::error::TrayError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_strings_are_fixed() {
        assert_eq!(TOOLTIP, "Multiclient");
        assert_eq!(EXIT_LABEL, "Exit");
    }

    #[cfg(not(windows))]
    #[test]
    fn tray_reports_unavailable_off_windows() {
        use crate::error::TrayError;

        assert!(matches!(run_tray(), Err(TrayError::Unavailable)));
    }
}
