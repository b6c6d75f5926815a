//! CLI parse tests.

use super::{Cli, Mode};
use clap::Parser;
use elixdl_core::config::ElixConfig;
use elixdl_core::resolver::ResolvePolicy;
use std::path::{Path, PathBuf};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_words_wants_usage() {
    let cli = parse(&["elixdl"]);
    assert!(cli.words.is_empty());
    assert!(cli.wants_usage());
}

#[test]
fn cli_parse_help_flags() {
    for flag in ["-h", "--help"] {
        let cli = parse(&["elixdl", flag]);
        assert!(cli.help);
        assert!(cli.wants_usage());
    }
}

#[test]
fn cli_parse_help_after_a_word_is_a_word() {
    let cli = parse(&["elixdl", "chat", "--help"]);
    assert_eq!(cli.words, ["chat", "--help"]);
    assert!(!cli.help);
    assert!(!cli.wants_usage());
}

#[test]
fn cli_parse_unknown_dash_argument_is_a_word() {
    let cli = parse(&["elixdl", "-x"]);
    assert_eq!(cli.words, ["-x"]);
    let cli = parse(&["elixdl", "--verbose", "chat"]);
    assert_eq!(cli.words, ["--verbose", "chat"]);
    let cli = parse(&["elixdl", "chat", "--mode", "permissive"]);
    assert_eq!(cli.words, ["chat", "--mode", "permissive"]);
    assert!(cli.mode.is_none());
}

#[test]
fn usage_does_not_start_logging() {
    for args in [&["elixdl"][..], &["elixdl", "-h"][..], &["elixdl", "--help"][..]] {
        let cli = parse(args);
        cli.run(|| panic!("logging must not start when printing usage"))
            .unwrap();
    }
}

#[test]
fn cli_parse_words_in_order() {
    let cli = parse(&["elixdl", "chat", "avocat", "zzznotaword"]);
    assert_eq!(cli.words, ["chat", "avocat", "zzznotaword"]);
    assert!(!cli.wants_usage());
    assert!(cli.mode.is_none());
    assert!(cli.output_dir.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_mode() {
    let cli = parse(&["elixdl", "--mode", "permissive", "avocat"]);
    assert_eq!(cli.mode, Some(Mode::Permissive));
    assert!(Cli::try_parse_from(["elixdl", "--mode", "lenient", "x"]).is_err());
}

#[test]
fn cli_parse_output_dir_and_config() {
    let cli = parse(&[
        "elixdl",
        "--output-dir",
        "/tmp/signs",
        "--config",
        "/etc/elixdl.toml",
        "chat",
    ]);
    assert_eq!(cli.output_dir.as_deref(), Some(Path::new("/tmp/signs")));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/elixdl.toml")));
}

#[test]
fn overrides_replace_config_values() {
    let cli = parse(&["elixdl", "--mode", "permissive", "--output-dir", "out", "chat"]);
    let mut cfg = ElixConfig::default();
    cli.apply_overrides(&mut cfg);
    assert_eq!(cfg.mode, ResolvePolicy::Permissive);
    assert_eq!(cfg.output_dir, PathBuf::from("out"));
}

#[test]
fn no_overrides_keep_config() {
    let cli = parse(&["elixdl", "chat"]);
    let mut cfg = ElixConfig::default();
    cli.apply_overrides(&mut cfg);
    assert_eq!(cfg.mode, ResolvePolicy::Strict);
    assert_eq!(cfg.output_dir, PathBuf::from("downloads"));
}
