//! Tests for digest and completions.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_digest() {
    match parse(&["hxr", "digest", "s.har", "--no-headers"]) {
        CliCommand::Digest { har, no_headers } => {
            assert_eq!(har.to_str(), Some("s.har"));
            assert!(no_headers);
        }
        _ => panic!("expected Digest"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["hxr", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_missing_har() {
    assert!(Cli::try_parse_from(["hxr", "render"]).is_err());
    assert!(Cli::try_parse_from(["hxr", "completions", "tcsh"]).is_err());
}
