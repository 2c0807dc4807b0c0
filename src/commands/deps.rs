//! # Deps Command Implementation
//!
//! `depgen deps` lists every catalog entry next to its four renderings, which
//! makes it easy to see how one dependency is spelled in each generated file.
//! `--json` prints the same data as a JSON array.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use depgen::dependencies::{render, strip_version_constraint, Dependency, Ecosystem};

use super::InputArgs;

/// Arguments for the deps command
#[derive(Args, Debug)]
pub struct DepsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// One dependency as every ecosystem spells it.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DependencyRow {
    pub name: String,
    pub binary_distribution: String,
    pub dpkg: String,
    pub dpkg_unversioned: String,
    pub pip: String,
    pub rpm: String,
    pub optional: bool,
}

impl DependencyRow {
    fn from_dependency(dependency: &Dependency) -> Self {
        let dpkg = render(dependency, Ecosystem::Dpkg);
        Self {
            name: dependency.name.clone(),
            binary_distribution: render(dependency, Ecosystem::BinaryDistribution),
            dpkg_unversioned: strip_version_constraint(&dpkg),
            dpkg,
            pip: render(dependency, Ecosystem::Pip),
            rpm: render(dependency, Ecosystem::Rpm),
            optional: dependency.is_optional,
        }
    }
}

/// Execute the deps command
pub fn execute(args: DepsArgs) -> Result<ExitCode> {
    let driver = args.input.load_driver()?;
    let rows: Vec<DependencyRow> = driver
        .catalog()
        .dependencies()
        .map(DependencyRow::from_dependency)
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    if rows.is_empty() {
        println!("No dependencies declared.");
        return Ok(ExitCode::SUCCESS);
    }

    for row in &rows {
        let optional = if row.optional { " (optional)" } else { "" };
        println!("{}{}", row.name, optional);
        println!("   binary: {}", row.binary_distribution);
        println!("   dpkg:   {}", row.dpkg);
        println!("   pip:    {}", row.pip);
        println!("   rpm:    {}", row.rpm);
    }
    println!();
    println!("{} dependencies", rows.len());
    Ok(ExitCode::SUCCESS)
}
