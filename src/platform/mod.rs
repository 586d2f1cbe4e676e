//! Platform abstraction for privilege checks and elevation relaunch.

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

/// Failure to relaunch the program with elevated rights.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The user or platform refused the elevation request.
    #[error("elevation request declined")]
    Declined,
    /// The elevated process could not be spawned at all.
    #[error("spawn elevated process: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Trait for privilege queries and elevation relaunch.
pub trait PrivilegeGate: Send + Sync {
    /// Whether this process may write protected system files.
    fn is_elevated(&self) -> bool;
    /// Relaunch the program with an elevation request, passing `args` through.
    fn relaunch_elevated(&self, args: &[String]) -> Result<(), LaunchError>;
}

/// Get platform PrivilegeGate implementation.
/// If HOSTCTL_ASSUME_ELEVATED is set (e.g. in tests), uses FixedGate with
/// that answer instead of probing the OS.
pub fn default_gate() -> Box<dyn PrivilegeGate> {
    if let Ok(v) = std::env::var("HOSTCTL_ASSUME_ELEVATED") {
        return Box::new(FixedGate::new(v == "1" || v.eq_ignore_ascii_case("true")));
    }
    #[cfg(unix)]
    return Box::new(unix::UnixPrivilegeGate);

    #[cfg(windows)]
    return Box::new(windows::WindowsPrivilegeGate);
}

/// PrivilegeGate with a fixed elevation answer (for tests).
/// Relaunch requests are counted but never spawn anything.
pub struct FixedGate {
    elevated: bool,
    deny_relaunch: bool,
    relaunch_requests: AtomicUsize,
}

impl FixedGate {
    pub fn new(elevated: bool) -> Self {
        Self {
            elevated,
            deny_relaunch: false,
            relaunch_requests: AtomicUsize::new(0),
        }
    }

    /// Unelevated gate whose relaunch requests always fail.
    pub fn denying() -> Self {
        Self {
            elevated: false,
            deny_relaunch: true,
            relaunch_requests: AtomicUsize::new(0),
        }
    }

    /// Number of relaunch requests issued through this gate.
    pub fn relaunch_requests(&self) -> usize {
        self.relaunch_requests.load(Ordering::SeqCst)
    }
}

impl PrivilegeGate for FixedGate {
    fn is_elevated(&self) -> bool {
        self.elevated
    }

    fn relaunch_elevated(&self, _args: &[String]) -> Result<(), LaunchError> {
        self.relaunch_requests.fetch_add(1, Ordering::SeqCst);
        if self.deny_relaunch {
            return Err(LaunchError::Declined);
        }
        Ok(())
    }
}
