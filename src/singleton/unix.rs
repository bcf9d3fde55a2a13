//! Single-instance guard for non-Windows platforms.
//!
//! Backed by the `single-instance` crate, which binds a process-scoped
//! primitive (an abstract unix socket on Linux) under the given name. The
//! kernel tears the binding down with the process, so a crashed owner never
//! leaves a stale lock behind.

use single_instance::SingleInstance;
use tracing::debug;

use crate::error::SingletonError;

/// Ownership token; dropping it (or exiting) releases the name.
pub struct SingletonGuard {
    _instance: SingleInstance,
}

/// Try to become the single owner of `name`.
pub fn acquire(name: &str) -> Result<SingletonGuard, SingletonError> {
    let instance = SingleInstance::new(name).map_err(|e| SingletonError::Os(e.to_string()))?;

    if !instance.is_single() {
        return Err(SingletonError::AlreadyRunning);
    }

    debug!(lock = name, "instance lock acquired");
    Ok(SingletonGuard {
        _instance: instance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_name(tag: &str) -> String {
        format!("multiclient_test_{}_{}", std::process::id(), tag)
    }

    #[test]
    fn fresh_name_acquires() {
        let guard = acquire(&unique_name("fresh"));
        assert!(guard.is_ok());
    }

    #[test]
    fn second_acquire_is_rejected_while_held() {
        let name = unique_name("dup");
        let _guard = acquire(&name).unwrap();

        match acquire(&name) {
            Err(SingletonError::AlreadyRunning) => {}
            other => panic!("expected AlreadyRunning, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn released_name_can_be_reacquired() {
        let name = unique_name("release");

        let guard = acquire(&name).unwrap();
        drop(guard);

        let reacquired = acquire(&name);
        assert!(reacquired.is_ok());
    }
}
