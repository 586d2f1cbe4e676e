//! Shared test helpers.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temp directory for a scratch hosts file.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostctl_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| Path::new(".").into()))
        .expect("temp dir")
}

/// Write `lines` joined with '\n' (no trailing newline) to a hosts file
/// under `dir` and return its path.
pub fn write_hosts(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("hosts");
    std::fs::write(&path, lines.join("\n")).expect("write hosts");
    path
}
