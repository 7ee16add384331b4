//! Tests for OutputSet open/close lifecycle.

use std::fs;
use std::io::Write;
use std::sync::Arc;

use crate::config::WriteMode;
use crate::error::{Stage, TeeError};
use crate::io::{InMemorySink, OutputSet, OutputTarget};
use crate::tests::support::UnopenableTarget;

#[test]
fn output_set_opens_targets_in_argument_order() {
    let a = Arc::new(InMemorySink::new("a"));
    let b = Arc::new(InMemorySink::new("b"));
    let targets: Vec<Arc<dyn OutputTarget>> = vec![a.clone() as Arc<dyn OutputTarget>, b.clone()];

    let set = OutputSet::open(&targets, WriteMode::Truncate).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.mode(), WriteMode::Truncate);
    assert_eq!(set.ids().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(a.open_handles(), 1);
    assert_eq!(b.open_handles(), 1);

    set.close();
    assert_eq!(a.open_handles(), 0);
    assert_eq!(b.open_handles(), 0);
}

#[test]
fn output_set_open_failure_closes_already_opened_targets() {
    let a = Arc::new(InMemorySink::new("a"));
    let b = Arc::new(InMemorySink::new("b"));
    let after = Arc::new(InMemorySink::new("after"));
    let targets: Vec<Arc<dyn OutputTarget>> = vec![
        a.clone() as Arc<dyn OutputTarget>,
        b.clone(),
        UnopenableTarget::new("denied"),
        after.clone(),
    ];

    let err = OutputSet::open(&targets, WriteMode::Append).expect_err("third target fails");

    assert_eq!(err.stage(), Stage::Open);
    assert_eq!(err.target(), Some("denied"));
    assert_eq!(a.open_handles(), 0);
    assert_eq!(b.open_handles(), 0);
    // Opening stops at the first failure.
    assert_eq!(after.open_handles(), 0);
}

#[test]
fn output_set_drop_releases_targets() {
    let a = Arc::new(InMemorySink::new("a"));
    let targets: Vec<Arc<dyn OutputTarget>> = vec![a.clone() as Arc<dyn OutputTarget>];

    {
        let _set = OutputSet::open(&targets, WriteMode::Truncate).unwrap();
        assert_eq!(a.open_handles(), 1);
    }
    assert_eq!(a.open_handles(), 0);
}

#[test]
fn output_set_fan_out_puts_primary_first() {
    let a = Arc::new(InMemorySink::with_contents("a", "old"));
    let targets: Vec<Arc<dyn OutputTarget>> = vec![a.clone() as Arc<dyn OutputTarget>];
    let mut primary: Vec<u8> = Vec::new();

    let mut set = OutputSet::open(&targets, WriteMode::Append).unwrap();
    {
        let mut fan_out = set.fan_out(&mut primary);
        assert_eq!(fan_out.ids().collect::<Vec<_>>(), vec!["-", "a"]);
        fan_out.write_all(b" new").unwrap();
    }
    set.close();

    assert_eq!(primary, b" new");
    assert_eq!(a.contents_string(), "old new");
}

#[test]
fn output_set_open_paths_truncates_or_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "he").unwrap();

    let set = OutputSet::open_paths(&[path.clone()], WriteMode::Append).unwrap();
    set.close();
    assert_eq!(fs::read_to_string(&path).unwrap(), "he");

    let set = OutputSet::open_paths(&[path.clone()], WriteMode::Truncate).unwrap();
    set.close();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn output_set_open_paths_reports_directory_target() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");

    let err = OutputSet::open_paths(&[good.clone(), dir.path().to_path_buf()], WriteMode::Truncate)
        .expect_err("directory cannot be opened for writing");

    match err {
        TeeError::Open { target, .. } => assert_eq!(target, dir.path().to_string_lossy()),
        other => panic!("expected open error, got {other:?}"),
    }
    // The earlier file was created by its open but never written.
    assert_eq!(fs::read(&good).unwrap(), Vec::<u8>::new());
}

#[test]
fn output_set_with_no_targets_is_empty() {
    let set = OutputSet::open(&[], WriteMode::Truncate).unwrap();
    assert!(set.is_empty());
    set.close();
}
