//! Tests for TeeArgs parsing.

use std::path::PathBuf;

use clap::error::ErrorKind;
use tracing::Level;

use crate::error::{Stage, TeeError};
use crate::{TeeArgs, WriteMode};

#[test]
fn parse_no_arguments() {
    let args = TeeArgs::try_parse_args(["tee"]).unwrap();
    assert_eq!(args, TeeArgs::default());
    assert_eq!(args.write_mode(), WriteMode::Truncate);
    assert_eq!(args.log_level(), Level::ERROR);
}

#[test]
fn parse_append_and_files_in_order() {
    let args = TeeArgs::try_parse_args(["tee", "-a", "one.txt", "two.txt"]).unwrap();
    assert!(args.append);
    assert_eq!(args.write_mode(), WriteMode::Append);
    assert_eq!(
        args.files,
        vec![PathBuf::from("one.txt"), PathBuf::from("two.txt")]
    );

    let long = TeeArgs::try_parse_args(["tee", "one.txt", "--append"]).unwrap();
    assert!(long.append);
    assert_eq!(long.files, vec![PathBuf::from("one.txt")]);
}

#[test]
fn parse_dash_is_a_file_name() {
    let args = TeeArgs::try_parse_args(["tee", "-"]).unwrap();
    assert_eq!(args.files, vec![PathBuf::from("-")]);
}

#[test]
fn parse_double_dash_ends_options() {
    let args = TeeArgs::try_parse_args(["tee", "--", "-a"]).unwrap();
    assert!(!args.append);
    assert_eq!(args.files, vec![PathBuf::from("-a")]);
}

#[test]
fn parse_verbosity_levels() {
    let cases = [
        (vec!["tee", "-v"], Level::INFO),
        (vec!["tee", "-vv"], Level::DEBUG),
        (vec!["tee", "-vvvv"], Level::TRACE),
    ];
    for (argv, level) in cases {
        assert_eq!(TeeArgs::try_parse_args(argv).unwrap().log_level(), level);
    }
}

#[test]
fn parse_unknown_flag_is_usage_error() {
    let err = TeeArgs::try_parse_args(["tee", "-x"]).expect_err("unknown flag");
    assert_eq!(err.stage(), Stage::Args);
    match err {
        TeeError::Usage(e) => {
            assert_eq!(e.kind(), ErrorKind::UnknownArgument);
            assert!(e.to_string().contains("Usage"));
        }
        other => panic!("expected usage error, got {other:?}"),
    }
}
