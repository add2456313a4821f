//! CLI parse tests.

use super::{Cli, CliCommand, ExportFormat};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn parse_fetch() {
    match parse(&["fut", "fetch", "akismet/akismet.php", "--locale", "ja"]) {
        CliCommand::Fetch {
            plugin_file,
            locale,
            dir,
        } => {
            assert_eq!(plugin_file, "akismet/akismet.php");
            assert_eq!(locale, "ja");
            assert!(dir.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_fetch_with_dir() {
    match parse(&[
        "fut",
        "fetch",
        "foo/foo.php",
        "-l",
        "de_DE",
        "--dir",
        "/var/www/languages",
    ]) {
        CliCommand::Fetch { dir, locale, .. } => {
            assert_eq!(locale, "de_DE");
            assert_eq!(dir, Some(PathBuf::from("/var/www/languages")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn fetch_requires_locale() {
    assert!(Cli::try_parse_from(["fut", "fetch", "foo/foo.php"]).is_err());
}

#[test]
fn parse_url_defaults_to_po() {
    match parse(&["fut", "url", "foo/foo.php", "--locale", "pt_BR"]) {
        CliCommand::Url { format, .. } => assert_eq!(format, ExportFormat::Po),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_url_with_mo_format() {
    match parse(&["fut", "url", "foo/foo.php", "-l", "ja", "--format", "mo"]) {
        CliCommand::Url { format, .. } => assert_eq!(format, ExportFormat::Mo),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_locales() {
    assert!(matches!(parse(&["fut", "locales"]), CliCommand::Locales));
}
