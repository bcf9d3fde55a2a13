//! Startup notification.
//!
//! A single transient toast shown once when the tray icon comes up.

use tracing::debug;

/// Notification title.
pub const NOTIFY_TITLE: &str = "Multiclient";

/// Notification body.
pub const NOTIFY_BODY: &str = "Started";

/// Show the one-time startup notification.
///
/// Failures are logged and ignored; the tray icon stays up either way.
pub fn notify_started() {
    #[cfg(windows)]
    {
        use tracing::warn;
        use winrt_notification::{Duration, Toast};

        debug!("showing startup notification");

        // The dismissal timer belongs to the toolkit, not to us.
        let result = Toast::new(Toast::POWERSHELL_APP_ID)
            .title(NOTIFY_TITLE)
            .text1(NOTIFY_BODY)
            .duration(Duration::Short)
            .show();

        if let Err(e) = result {
            warn!(error = %e, "failed to show startup notification");
        }
    }

    #[cfg(not(windows))]
    {
        debug!(
            title = NOTIFY_TITLE,
            body = NOTIFY_BODY,
            "startup notification (not supported on this platform)"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_strings_are_fixed() {
        assert_eq!(NOTIFY_TITLE, "Multiclient");
        assert_eq!(NOTIFY_BODY, "Started");
    }

    #[cfg(not(windows))]
    #[test]
    fn notify_is_a_no_op_off_windows() {
        notify_started();
    }
}
