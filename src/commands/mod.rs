//! # CLI Command Implementations
//!
//! Each subcommand of `depgen` lives in its own file with:
//! - an `Args` struct derived with `clap`, and
//! - an `execute` function that calls into the `depgen` library and returns
//!   the process exit code.
//!
//! Commands that read the project inputs flatten [`InputArgs`] so every one
//! of them accepts the same path flags and environment variables.

pub mod check;
pub mod completions;
pub mod deps;
pub mod show;
pub mod update;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use depgen::driver::{Driver, DriverOptions};
use depgen::suggestions;

/// Locations of the project inputs.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Project root; generated files are written below it
    #[arg(long, value_name = "DIR", env = "DEPGEN_PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Project definition file (defaults to <project dir>/<project dir name>.ini)
    #[arg(long, value_name = "FILE", env = "DEPGEN_PROJECT_FILE")]
    pub project_file: Option<PathBuf>,

    /// Dependency catalog (defaults to <project dir>/dependencies.ini)
    #[arg(long, value_name = "FILE", env = "DEPGEN_DEPENDENCIES")]
    pub dependencies: Option<PathBuf>,
}

impl InputArgs {
    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            project_dir: self.project_dir.clone(),
            project_file: self.project_file.clone(),
            dependencies_file: self.dependencies.clone(),
        }
    }

    /// Load the project definition and the dependency catalog.
    pub fn load_driver(&self) -> Result<Driver> {
        Driver::load(&self.driver_options()).map_err(suggestions::with_hints)
    }
}
