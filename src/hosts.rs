//! Hosts file line access.
//!
//! Supports HOSTCTL_HOSTS_FILE env var override for testing.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Path to the system hosts file.
/// If HOSTCTL_HOSTS_FILE is set (e.g. in tests), uses that path instead.
pub fn hosts_path() -> PathBuf {
    if let Ok(path) = std::env::var("HOSTCTL_HOSTS_FILE") {
        return PathBuf::from(path);
    }
    #[cfg(unix)]
    return PathBuf::from("/etc/hosts");

    #[cfg(windows)]
    return PathBuf::from(r"C:\Windows\System32\drivers\etc\hosts");
}

/// Open the hosts file and iterate its lines in order, exact text preserved.
/// Each call opens the file again, so the sequence always reflects current
/// disk state from the start.
pub fn read_lines(path: &Path) -> Result<impl Iterator<Item = io::Result<String>>> {
    let file = File::open(path)
        .with_context(|| format!("open hosts file: {}", path.display()))?;
    Ok(BufReader::new(file).lines())
}

/// True for comment lines (leading '#') and blank lines.
/// The '#' check is left-anchored; an indented '#' is a content line.
pub fn is_comment_or_blank(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}

/// True if a content line's whitespace-separated tokens include `name`,
/// compared case-insensitively. Comment and blank lines never match.
pub fn entry_matches_name(line: &str, name: &str) -> bool {
    if is_comment_or_blank(line) {
        return false;
    }
    line.split_whitespace()
        .any(|token| token.eq_ignore_ascii_case(name))
}
