//! Windows single-instance guard backed by a named mutex.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;

use tracing::debug;
use windows_sys::Win32::Foundation::{GetLastError, ERROR_ALREADY_EXISTS, HANDLE};
use windows_sys::Win32::System::Threading::CreateMutexW;

use crate::error::SingletonError;

/// Ownership token for the named mutex.
///
/// The handle is deliberately never closed; the OS releases the mutex when
/// the process exits, which is the release mechanism the guard relies on.
pub struct SingletonGuard {
    _handle: HANDLE,
}

/// Try to become the single owner of `name`.
///
/// Uses initial-ownership semantics: when no other process holds the name,
/// this call both creates the mutex and acquires it. A pre-existing owner is
/// detected through `ERROR_ALREADY_EXISTS`.
pub fn acquire(name: &str) -> Result<SingletonGuard, SingletonError> {
    let wide: Vec<u16> = OsStr::new(name).encode_wide().chain(Some(0)).collect();

    let handle = unsafe { CreateMutexW(std::ptr::null(), 1, wide.as_ptr()) };
    let last_error = unsafe { GetLastError() };

    // The call can hand back a valid handle and still report an existing
    // owner, so the error code is checked first.
    if last_error == ERROR_ALREADY_EXISTS {
        return Err(SingletonError::AlreadyRunning);
    }

    if handle == 0 {
        return Err(SingletonError::Os(
            std::io::Error::from_raw_os_error(last_error as i32).to_string(),
        ));
    }

    debug!(mutex = name, "instance mutex acquired");
    Ok(SingletonGuard { _handle: handle })
}
