//! Conditional write-back through the privilege gate.

mod common;

use hostctl::diff;
use hostctl::platform::FixedGate;
use std::fs;

fn doc(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

#[test]
fn no_difference_means_no_write_and_no_relaunch() {
    let dir = common::temp_dir();
    let path = common::write_hosts(dir.path(), &["# c", "127.0.0.1 a"]);
    let gate = FixedGate::new(false);

    diff::commit(&path, &doc(&["# c", "127.0.0.1 a"]), &gate, &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "# c\n127.0.0.1 a");
    assert_eq!(gate.relaunch_requests(), 0);
}

#[test]
fn case_only_difference_is_left_alone() {
    let dir = common::temp_dir();
    let path = common::write_hosts(dir.path(), &["127.0.0.1 FOO"]);
    let gate = FixedGate::new(true);

    diff::commit(&path, &doc(&["127.0.0.1 foo"]), &gate, &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "127.0.0.1 FOO");
}

#[test]
fn elevated_write_replaces_file() {
    let dir = common::temp_dir();
    let path = common::write_hosts(dir.path(), &["# comment", "", "127.0.0.1 foo"]);
    let new = doc(&["# comment", "", "127.0.0.1 foo", "10.0.0.1 bar"]);
    let gate = FixedGate::new(true);

    diff::commit(&path, &new, &gate, &[]).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        ["# comment", "", "127.0.0.1 foo", "10.0.0.1 bar"].join(diff::LINE_SEP)
    );
    assert_eq!(gate.relaunch_requests(), 0);
}

#[test]
fn unelevated_commit_requests_relaunch_without_writing() {
    let dir = common::temp_dir();
    let path = common::write_hosts(dir.path(), &["127.0.0.1 a"]);
    let gate = FixedGate::new(false);
    let args = vec!["block".to_string(), "ads.test".to_string()];

    diff::commit(&path, &doc(&["127.0.0.1 a", "127.0.0.1 ads.test"]), &gate, &args).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "127.0.0.1 a");
    assert_eq!(gate.relaunch_requests(), 1);
}

#[test]
fn declined_relaunch_is_swallowed() {
    let dir = common::temp_dir();
    let path = common::write_hosts(dir.path(), &["127.0.0.1 a"]);
    let gate = FixedGate::denying();

    let result = diff::commit(&path, &doc(&["127.0.0.1 b"]), &gate, &[]);

    assert!(result.is_ok());
    assert_eq!(fs::read_to_string(&path).unwrap(), "127.0.0.1 a");
    assert_eq!(gate.relaunch_requests(), 1);
}

#[test]
fn commit_against_missing_file_fails() {
    let dir = common::temp_dir();
    let gate = FixedGate::new(true);

    let result = diff::commit(&dir.path().join("absent"), &doc(&["x"]), &gate, &[]);

    assert!(result.is_err());
}

#[test]
fn emptied_document_writes_empty_file() {
    let dir = common::temp_dir();
    let path = common::write_hosts(dir.path(), &["127.0.0.1 a"]);
    let gate = FixedGate::new(true);

    diff::commit(&path, &[], &gate, &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
