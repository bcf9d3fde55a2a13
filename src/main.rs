//! Multiclient
//!
//! A single-instance system tray utility: acquires a named OS-wide mutex so
//! only one copy runs at a time, shows a tray icon with an Exit menu entry,
//! and posts a one-time startup notification. There is no other UI surface.

#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use tracing::{error, info};

mod crash;
mod error;
mod notifications;
mod paths;
mod singleton;
mod tray;

use error::{SingletonError, TrayError};

/// Name of the system-wide exclusion primitive used for instance detection.
const SINGLETON_NAME: &str = "multiclient_singletonMutex";

fn main() {
    // Install crash handler first thing
    crash::install_panic_hook();

    // Logging is best effort; the utility proceeds silently when the log
    // directory is not writable.
    let _log_guard = init_file_logging().ok();

    // The guard is held for the whole process lifetime. The OS releases the
    // underlying primitive when the process exits, normally or not.
    let _singleton = match singleton::acquire(SINGLETON_NAME) {
        Ok(guard) => guard,
        Err(SingletonError::AlreadyRunning) => {
            info!(mutex = SINGLETON_NAME, "another instance is already running, exiting");
            std::process::exit(0);
        }
        Err(e) => {
            error!(error = %e, "failed to acquire instance mutex");
            std::process::exit(1);
        }
    };

    info!(version = env!("CARGO_PKG_VERSION"), "multiclient starting");

    match tray::run_tray() {
        Ok(()) => info!("shutdown complete"),
        Err(TrayError::Unavailable) => {
            info!("system tray is not available, exiting");
            std::process::exit(0);
        }
        Err(e) => {
            error!(error = %e, "tray event loop failed");
            std::process::exit(1);
        }
    }
}

fn init_file_logging() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = paths::log_dir()?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix("multiclient")
        .filename_suffix("log")
        .max_log_files(10)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .json()
                .with_writer(non_blocking),
        )
        .init();

    Ok(guard)
}
