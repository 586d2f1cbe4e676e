//! Position-wise line diff and conditional write-back.

use anyhow::{Context, Result};
use std::io;
use std::path::Path;

use crate::hosts;
use crate::platform::PrivilegeGate;

/// Line separator used when writing the hosts file.
#[cfg(windows)]
pub const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEP: &str = "\n";

/// One difference between the on-disk and in-memory line sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(String),
    Removed(String),
}

/// Walk both sequences position by position and report every mismatch.
///
/// Comparison is case-insensitive and never realigns: while the old side
/// has lines that don't match the new cursor they are reported as removed,
/// and once the old side runs out every remaining new line is reported as
/// added. A mid-sequence insertion therefore reports each subsequent line
/// as a removal plus an addition. Returns whether anything was reported.
pub fn diff_lines<'a, O, N, F>(mut old: O, mut new: N, mut report: F) -> io::Result<bool>
where
    O: Iterator<Item = io::Result<String>>,
    N: Iterator<Item = &'a str>,
    F: FnMut(Change),
{
    let mut has_diffs = false;
    let mut old_cur = old.next().transpose()?;
    let mut new_cur = new.next();

    loop {
        match (old_cur.take(), new_cur) {
            (Some(o), Some(n)) if o.eq_ignore_ascii_case(n) => {
                old_cur = old.next().transpose()?;
                new_cur = new.next();
            }
            (Some(o), n) => {
                has_diffs = true;
                report(Change::Removed(o));
                old_cur = old.next().transpose()?;
                new_cur = n;
            }
            (None, Some(n)) => {
                has_diffs = true;
                report(Change::Added(n.to_string()));
                new_cur = new.next();
            }
            (None, None) => break,
        }
    }

    Ok(has_diffs)
}

/// Compare `new_lines` against a fresh read of the file at `path` and,
/// when something changed, write the new contents back.
///
/// Writing requires elevation. Without it the gate is asked to relaunch
/// the program elevated with `original_args` passed through, and this
/// process returns without writing; a declined relaunch is not an error.
pub fn commit(
    path: &Path,
    new_lines: &[String],
    gate: &dyn PrivilegeGate,
    original_args: &[String],
) -> Result<()> {
    let old = hosts::read_lines(path)?;
    let has_diffs = diff_lines(old, new_lines.iter().map(String::as_str), |change| {
        match change {
            Change::Removed(line) => println!("Removing {line}."),
            Change::Added(line) => println!("Adding {line}."),
        }
    })?;

    if !has_diffs {
        println!("No changes detected.");
        return Ok(());
    }

    if gate.is_elevated() {
        std::fs::write(path, new_lines.join(LINE_SEP))
            .with_context(|| format!("write hosts file: {}", path.display()))?;
    } else {
        // The elevated child re-reads and re-applies the arguments itself;
        // a refused relaunch leaves the file untouched.
        let _ = gate.relaunch_elevated(original_args);
    }

    Ok(())
}
