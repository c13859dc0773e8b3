//! Tests for tasks, completions, man.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_tasks() {
    match parse(&["qhu", "tasks"]) {
        CliCommand::Tasks => {}
        _ => panic!("expected Tasks"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["qhu", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_completions_zsh() {
    match parse(&["qhu", "completions", "zsh"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Zsh),
        _ => panic!("expected Completions zsh"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["qhu", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["qhu", "download"]).is_err());
}
