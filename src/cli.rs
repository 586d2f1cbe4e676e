//! Command interpretation and dispatch.
//!
//! Arguments are scanned left to right. The mutating verbs `remove`, `add`
//! and `block` consume every remaining argument, so a later token that
//! happens to spell a verb is treated as data; this greedy grammar is
//! long-standing behaviour and is kept as is.

use anyhow::Result;
use std::io;
use std::path::Path;

use crate::diff;
use crate::hosts;
use crate::platform::{self, PrivilegeGate};

/// Parse process arguments and run against the system hosts file.
pub fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = hosts::hosts_path();
    let gate = platform::default_gate();
    run_with(&args, &path, gate.as_ref())
}

/// Interpret `args` against the hosts file at `path`.
///
/// The file is read once up front; mutating verbs edit the in-memory copy
/// and hand it to [`diff::commit`], which re-reads disk before writing.
pub fn run_with(args: &[String], path: &Path, gate: &dyn PrivilegeGate) -> Result<()> {
    let mut current = hosts::read_lines(path)?.collect::<io::Result<Vec<String>>>()?;

    if args.is_empty() {
        print_entries(&current);
        return Ok(());
    }

    let mut i = 0;
    while i < args.len() {
        let verb = &args[i];
        let rest = &args[i + 1..];

        if verb.eq_ignore_ascii_case("list") {
            print_entries(&current);
        } else if verb.eq_ignore_ascii_case("remove") && !rest.is_empty() {
            for name in rest {
                current.retain(|line| !hosts::entry_matches_name(line, name));
            }
            i += rest.len();
            diff::commit(path, &current, gate, args)?;
        } else if verb.eq_ignore_ascii_case("add") && !rest.is_empty() {
            // Pairs only; a trailing unpaired argument is ignored.
            for pair in rest.chunks_exact(2) {
                current.push(format!("{} {}", pair[0], pair[1]));
            }
            i += rest.len();
            diff::commit(path, &current, gate, args)?;
        } else if verb.eq_ignore_ascii_case("block") && !rest.is_empty() {
            for name in rest {
                current.push(format!("127.0.0.1 {name}"));
            }
            i += rest.len();
            diff::commit(path, &current, gate, args)?;
        } else {
            print_usage();
        }

        i += 1;
    }

    Ok(())
}

/// Print every non-comment line, or a notice when there are none.
fn print_entries(lines: &[String]) {
    let mut anything = false;
    for line in lines.iter().filter(|l| !hosts::is_comment_or_blank(l)) {
        println!("{line}");
        anything = true;
    }
    if !anything {
        println!("Hosts file is empty.");
    }
}

fn print_usage() {
    let prog = program_name();
    println!("Usage:");
    println!();
    println!("{prog} list - list entries in hosts file");
    println!("{prog} remove [name] - removes name from hosts file");
    println!("{prog} add [ip name] - adds ip and name to hosts file");
    println!("{prog} block [name] - adds 127.0.0.1 and name to hosts file");
}

fn program_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg| {
            Path::new(&arg)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(String::from)
        })
        .unwrap_or_else(|| "hostctl".to_string())
}
