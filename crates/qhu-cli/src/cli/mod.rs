//! CLI for the QHU header updater.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use qhu_core::config;
use std::path::PathBuf;

use commands::{run_check, run_completions, run_man, run_rewrite, run_tasks};

/// Top-level CLI for the QHU header updater.
#[derive(Debug, Parser)]
#[command(name = "qhu")]
#[command(about = "QHU: image-URL updater for Qualtrics survey headers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite the header script's image URLs against the images root.
    Rewrite {
        /// Directory holding the header scripts (default: configured
        /// header_dir, then the current directory).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Header script to read (default: the configured input filename).
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// File to write (default: the configured output filename).
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Do not echo rewritten assignments to stdout.
        #[arg(long)]
        quiet: bool,

        /// Fail on malformed URL lines instead of copying them through.
        #[arg(long)]
        strict: bool,
    },

    /// Check that the header is already canonical; exit 1 if a rewrite
    /// would change it.
    Check {
        /// Directory holding the header scripts.
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// File to check (default: the configured input filename).
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Fail on malformed URL lines instead of tolerating them.
        #[arg(long)]
        strict: bool,
    },

    /// List the task codes and their image subfolders.
    Tasks,

    /// Generate a shell completion script to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate the roff man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Rewrite {
                dir,
                input,
                output,
                quiet,
                strict,
            } => {
                run_rewrite(
                    &cfg,
                    dir.as_deref(),
                    input.as_deref(),
                    output.as_deref(),
                    quiet,
                    strict,
                )?;
            }
            CliCommand::Check { dir, input, strict } => {
                let canonical = run_check(&cfg, dir.as_deref(), input.as_deref(), strict)?;
                if !canonical {
                    std::process::exit(1);
                }
            }
            CliCommand::Tasks => run_tasks(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
