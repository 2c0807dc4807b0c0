//! # Show Command Implementation
//!
//! `depgen show <FORMAT>` renders a single configuration file and prints it
//! to stdout exactly as `update` would write it.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use depgen::formats::ConfigFormat;

use super::InputArgs;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// File to render: appveyor, dpkg-control, requirements, setup-cfg,
    /// install-script, tox (or its path)
    #[arg(value_name = "FORMAT", value_parser = parse_format)]
    pub format: ConfigFormat,

    #[command(flatten)]
    pub input: InputArgs,
}

fn parse_format(value: &str) -> std::result::Result<ConfigFormat, String> {
    value.parse()
}

/// Execute the show command
pub fn execute(args: ShowArgs) -> Result<ExitCode> {
    let driver = args.input.load_driver()?;
    let file = driver.emitter(args.format).render();

    let mut stdout = io::stdout().lock();
    stdout.write_all(&file.content)?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
