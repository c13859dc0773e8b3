//! `qhu man` – roff man page on stdout.

use anyhow::Result;
use clap::CommandFactory;
use std::io::Write;

use crate::cli::Cli;

pub fn run_man() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut buf: Vec<u8> = Vec::new();
    man.render(&mut buf)?;
    std::io::stdout().write_all(&buf)?;
    Ok(())
}
