// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use rstest::rstest;

fn run(args: &[&str]) -> Cli {
    match Invocation::parse_from(args.iter().copied()) {
        Invocation::Run(cli) => cli,
        other => panic!("expected a runnable invocation, got {:?}", other),
    }
}

#[test]
fn test_no_flags_selects_compare() {
    let cli = run(&["trace-golden"]);
    assert!(!cli.generate);
    assert_eq!(cli.verbose, 0);
}

#[rstest]
#[case::short("-o")]
#[case::long("--generate")]
fn test_generate_flag(#[case] flag: &str) {
    let cli = run(&["trace-golden", flag]);
    assert!(cli.generate);
}

#[test]
fn test_path_overrides() {
    let cli = run(&[
        "trace-golden",
        "--tool",
        "/opt/decoder",
        "--capture",
        "rsap.pcapng",
        "--golden",
        "rsap.expected",
    ]);
    assert_eq!(cli.tool, Some(PathBuf::from("/opt/decoder")));
    assert_eq!(cli.capture, Some(PathBuf::from("rsap.pcapng")));
    assert_eq!(cli.golden, Some(PathBuf::from("rsap.expected")));
}

#[test]
fn test_verbose_counts() {
    let cli = run(&["trace-golden", "-vv"]);
    assert_eq!(cli.verbose, 2);
}

#[rstest]
#[case::short("-h")]
#[case::long("--help")]
fn test_help_exits_zero(#[case] flag: &str) {
    let invocation = Invocation::parse_from(["trace-golden", flag]);
    assert_eq!(invocation.exit_code(), Some(0));
    match invocation {
        Invocation::Help(text) => {
            assert!(text.contains("Usage"), "usage text: {}", text);
            assert!(text.contains("--generate"), "usage text: {}", text);
        }
        other => panic!("expected help, got {:?}", other),
    }
}

#[rstest]
#[case::z("-z", "Invalid option: -z")]
#[case::q("-q", "Invalid option: -q")]
#[case::long("--frobnicate", "Invalid option: --frobnicate")]
fn test_unknown_flag_is_invalid(#[case] flag: &str, #[case] expected: &str) {
    let invocation = Invocation::parse_from(["trace-golden", flag]);
    assert_eq!(invocation.exit_code(), Some(1));
    match invocation {
        Invocation::Invalid(msg) => assert_eq!(msg, expected),
        other => panic!("expected invalid, got {:?}", other),
    }
}

#[test]
fn test_missing_value_is_invalid() {
    let invocation = Invocation::parse_from(["trace-golden", "--tool"]);
    assert_eq!(invocation.exit_code(), Some(1));
    assert!(matches!(invocation, Invocation::Invalid(_)));
}

#[test]
fn test_run_has_no_exit_code() {
    let invocation = Invocation::parse_from(["trace-golden", "-o"]);
    assert_eq!(invocation.exit_code(), None);
}

#[test]
fn test_stray_positional_is_not_reported_as_a_flag() {
    let invocation = Invocation::parse_from(["trace-golden", "foo"]);
    assert_eq!(invocation.exit_code(), Some(1));
    match invocation {
        Invocation::Invalid(msg) => {
            assert!(!msg.contains("Invalid option"), "message: {}", msg);
            assert!(msg.contains("'foo'"), "message: {}", msg);
        }
        other => panic!("expected invalid, got {:?}", other),
    }
}

#[test]
fn test_help_written_to_stdout_only() {
    let invocation = Invocation::parse_from(["trace-golden", "-h"]);
    let mut out = Vec::new();
    let mut err = Vec::new();
    invocation.write_to(&mut out, &mut err).unwrap();

    assert!(String::from_utf8(out).unwrap().contains("Usage"));
    assert!(err.is_empty());
}

#[test]
fn test_invalid_written_to_stderr_only() {
    let invocation = Invocation::parse_from(["trace-golden", "-z"]);
    let mut out = Vec::new();
    let mut err = Vec::new();
    invocation.write_to(&mut out, &mut err).unwrap();

    assert!(out.is_empty());
    assert_eq!(String::from_utf8(err).unwrap(), "Invalid option: -z\n");
}
