//! Tests for render and save subcommands.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_render() {
    match parse(&["hxr", "render", "session.har"]) {
        CliCommand::Render { har, body_only } => {
            assert_eq!(har, Path::new("session.har"));
            assert!(!body_only);
        }
        _ => panic!("expected Render"),
    }
}

#[test]
fn cli_parse_render_body_only() {
    match parse(&["hxr", "render", "--body-only", "session.har"]) {
        CliCommand::Render { body_only, .. } => assert!(body_only),
        _ => panic!("expected Render with --body-only"),
    }
}

#[test]
fn cli_parse_save_defaults() {
    match parse(&["hxr", "save", "/tmp/s.har"]) {
        CliCommand::Save {
            har,
            out,
            no_headers,
            no_index,
        } => {
            assert_eq!(har, Path::new("/tmp/s.har"));
            assert!(out.is_none());
            assert!(!no_headers);
            assert!(!no_index);
        }
        _ => panic!("expected Save"),
    }
}

#[test]
fn cli_parse_save_all_flags() {
    match parse(&[
        "hxr",
        "save",
        "s.har",
        "--out",
        "/data/captures",
        "--no-headers",
        "--no-index",
    ]) {
        CliCommand::Save {
            out,
            no_headers,
            no_index,
            ..
        } => {
            assert_eq!(out.as_deref(), Some(Path::new("/data/captures")));
            assert!(no_headers);
            assert!(no_index);
        }
        _ => panic!("expected Save with flags"),
    }
}

#[test]
fn cli_parse_save_short_out() {
    match parse(&["hxr", "save", "-o", "x", "s.har"]) {
        CliCommand::Save { out, .. } => assert_eq!(out.as_deref(), Some(Path::new("x"))),
        _ => panic!("expected Save with -o"),
    }
}
