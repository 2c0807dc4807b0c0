//! # depgen CLI
//!
//! Binary entry point for the `depgen` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and terminal output.
//! - Dispatching to the selected subcommand and turning its outcome into an
//!   exit code.
//!
//! The generator itself lives in the `depgen` library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.execute()
}
