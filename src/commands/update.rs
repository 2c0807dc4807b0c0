//! # Update Command Implementation
//!
//! `depgen update` is the generator run: it loads the project definition and
//! the dependency catalog, then rewrites every configuration file in a fixed
//! order. The first failure aborts the run with a non-zero exit code.
//!
//! With `--dry-run` every file is rendered in memory and listed, but nothing
//! is written.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Args;

use depgen::output::{OutputConfig, Status};
use depgen::suggestions;

use super::InputArgs;

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Render every file but do not write anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the update command
pub fn execute(args: UpdateArgs, output: OutputConfig) -> Result<ExitCode> {
    let start_time = Instant::now();
    let driver = args.input.load_driver()?;

    if args.dry_run {
        if !args.quiet {
            println!(
                "{} DRY RUN - no files will be written",
                output.marker(Status::Info)
            );
            for file in driver.render_all() {
                println!(
                    "   {} ({} bytes)",
                    driver.root().join(&file.path).display(),
                    file.size()
                );
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    match driver.run() {
        Ok(written) => {
            if !args.quiet {
                println!(
                    "{} Updated {} files for '{}' in {:.2}s",
                    output.marker(Status::Ok),
                    written.len(),
                    driver.project().name,
                    start_time.elapsed().as_secs_f64()
                );
                for path in &written {
                    println!("   {}", path.display());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if !args.quiet {
                println!("{} Update failed", output.marker(Status::Failed));
            }
            Err(suggestions::with_hints(e))
        }
    }
}
