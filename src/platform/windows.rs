//! Windows platform implementations.

use std::process::Command;

use super::{LaunchError, PrivilegeGate};

pub struct WindowsPrivilegeGate;

impl PrivilegeGate for WindowsPrivilegeGate {
    fn is_elevated(&self) -> bool {
        // net session succeeds only under an elevated token.
        Command::new("net")
            .args(["session"])
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn relaunch_elevated(&self, args: &[String]) -> Result<(), LaunchError> {
        let exe = std::env::current_exe()?;
        // Start-Process -Verb RunAs shows the UAC consent prompt.
        let mut script = format!(
            "Start-Process -FilePath '{}' -Verb RunAs -Wait",
            ps_quote(&exe.to_string_lossy())
        );
        if !args.is_empty() {
            let list: Vec<String> = args
                .iter()
                .map(|a| format!("'{}'", ps_quote(a)))
                .collect();
            script.push_str(" -ArgumentList ");
            script.push_str(&list.join(","));
        }
        let status = Command::new("powershell")
            .args(["-NoProfile", "-Command", &script])
            .status()?;
        if !status.success() {
            return Err(LaunchError::Declined);
        }
        Ok(())
    }
}

/// Escape for a single-quoted PowerShell literal.
fn ps_quote(s: &str) -> String {
    s.replace('\'', "''")
}
