//! Unix (macOS, Linux) platform implementations.

use std::process::Command;

use super::{LaunchError, PrivilegeGate};

pub struct UnixPrivilegeGate;

impl PrivilegeGate for UnixPrivilegeGate {
    fn is_elevated(&self) -> bool {
        // Only root can write /etc/hosts.
        unsafe { libc::geteuid() == 0 }
    }

    fn relaunch_elevated(&self, args: &[String]) -> Result<(), LaunchError> {
        let exe = std::env::current_exe()?;
        let status = Command::new("sudo").arg(exe).args(args).status()?;
        if !status.success() {
            return Err(LaunchError::Declined);
        }
        Ok(())
    }
}
