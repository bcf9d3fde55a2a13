//! Crash reporting and panic handling.
//!
//! The utility has no window to surface an error in, so a panic leaves a
//! timestamped crash file in the log directory and nothing else.

use std::backtrace::Backtrace;
use std::fs;
use std::panic::PanicHookInfo;

use crate::paths;

/// Install the panic hook for crash reporting.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        handle_panic(panic_info);
    }));
}

fn handle_panic(panic_info: &PanicHookInfo) {
    let backtrace = Backtrace::force_capture();

    // Get panic message
    let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    };

    // Get location
    let location = panic_info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
        .unwrap_or_else(|| "unknown location".to_string());

    let report = build_crash_report(&message, &location, &backtrace.to_string());

    match write_crash_report(&report) {
        Some(path) => eprintln!("multiclient crashed; report written to {}", path),
        None => eprintln!("multiclient crashed:\n{}", report),
    }
}

fn build_crash_report(message: &str, location: &str, backtrace: &str) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    format!(
        r#"Multiclient Crash Report
========================

Version: {version}
Timestamp: {timestamp}

Panic Message:
{message}

Location:
{location}

Backtrace:
{backtrace}
"#
    )
}

fn write_crash_report(report: &str) -> Option<String> {
    let log_dir = paths::log_dir().ok()?;
    write_crash_report_to(&log_dir, report)
}

fn write_crash_report_to(dir: &std::path::Path, report: &str) -> Option<String> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("crash_{}.txt", timestamp);
    let path = dir.join(&filename);

    fs::write(&path, report).ok()?;
    Some(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crash_report_carries_message_and_location() {
        let report = build_crash_report(
            "index out of bounds",
            "src/tray/windows.rs:42:7",
            "<no backtrace>",
        );

        assert!(report.contains("index out of bounds"));
        assert!(report.contains("src/tray/windows.rs:42:7"));
        assert!(report.contains(env!("CARGO_PKG_VERSION")));
        assert!(report.contains("<no backtrace>"));
    }

    #[test]
    fn crash_report_lands_in_the_given_directory() {
        let dir = tempfile::tempdir().unwrap();

        let written = write_crash_report_to(dir.path(), "report body").unwrap();

        assert!(written.contains("crash_"));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().flatten().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read_to_string(entries[0].path()).unwrap(), "report body");
    }
}
