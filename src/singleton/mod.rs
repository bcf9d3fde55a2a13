//! Single-instance guard.
//!
//! Mutual exclusion across independently launched processes on one host,
//! with automatic release when the owning process exits (cleanly or not).
//! The OS enforces the invariant; nothing here retries or re-acquires.

#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
mod unix;

#[cfg(windows)]
pub use windows::{acquire, SingletonGuard};

#[cfg(not(windows))]
pub use unix::{acquire, SingletonGuard};
