//! Error types for multiclient.

#![allow(dead_code)]

use thiserror::Error;

/// Failures while acquiring the single-instance primitive.
#[derive(Error, Debug)]
pub enum SingletonError {
    /// Another live process already owns the named primitive.
    #[error("another instance is already running")]
    AlreadyRunning,

    /// The acquisition call failed for a reason other than "already exists".
    /// There is no fallback path; the caller treats this as fatal.
    #[error("instance mutex acquisition failed: {0}")]
    Os(String),
}

/// Failures in the tray application.
#[derive(Error, Debug)]
pub enum TrayError {
    /// The desktop session has no system tray (or no display at all).
    #[error("system tray is not available")]
    Unavailable,

    /// The GUI event loop failed after startup.
    #[error("event loop error: {0}")]
    EventLoop(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_error_display() {
        assert_eq!(
            SingletonError::AlreadyRunning.to_string(),
            "another instance is already running"
        );
        assert_eq!(
            SingletonError::Os("access denied".into()).to_string(),
            "instance mutex acquisition failed: access denied"
        );
    }

    #[test]
    fn tray_error_display() {
        assert_eq!(TrayError::Unavailable.to_string(), "system tray is not available");
        assert_eq!(
            TrayError::EventLoop("recreation attempted".into()).to_string(),
            "event loop error: recreation attempted"
        );
    }
}
