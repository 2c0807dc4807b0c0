//! # Check Command Implementation
//!
//! `depgen check` renders every configuration file in memory and compares it
//! byte for byte with the file on disk. It is meant for CI: it never writes
//! anything and exits with code 1 when any generated file is missing or out
//! of date, so a forgotten `depgen update` fails the build.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use depgen::emitter::RenderedFile;
use depgen::output::{OutputConfig, Status};
use depgen::write;

use super::InputArgs;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only print files that need regenerating
    #[arg(short, long)]
    pub quiet: bool,
}

/// State of one generated file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    UpToDate,
    Stale,
    Missing,
}

fn file_state(root: &std::path::Path, file: &RenderedFile) -> Result<FileState> {
    if !root.join(&file.path).exists() {
        return Ok(FileState::Missing);
    }
    if write::is_up_to_date(root, file)? {
        Ok(FileState::UpToDate)
    } else {
        Ok(FileState::Stale)
    }
}

/// Execute the check command
pub fn execute(args: CheckArgs, output: OutputConfig) -> Result<ExitCode> {
    let driver = args.input.load_driver()?;

    let mut outdated = 0;
    for file in driver.render_all() {
        let state = file_state(driver.root(), &file)?;
        let status = match state {
            FileState::UpToDate => Status::Ok,
            FileState::Stale => Status::Stale,
            FileState::Missing => Status::Missing,
        };
        if state != FileState::UpToDate {
            outdated += 1;
        } else if args.quiet {
            continue;
        }
        println!("{} {}", output.marker(status), file.path.display());
    }

    if outdated == 0 {
        if !args.quiet {
            println!("All generated files are up to date.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    println!();
    println!(
        "{} generated file(s) need regenerating; run 'depgen update'.",
        outdated
    );
    Ok(ExitCode::FAILURE)
}
