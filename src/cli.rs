//! CLI argument parsing and command dispatch

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use depgen::output::OutputConfig;

use crate::commands;

/// depgen - Regenerate CI, packaging and requirements files from dependencies.ini
#[derive(Parser, Debug)]
#[command(name = "depgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate every configuration file from the project definition and dependencies.ini
    Update(commands::update::UpdateArgs),

    /// Verify that the generated files on disk are up to date
    Check(commands::check::CheckArgs),

    /// Print one generated file to stdout
    Show(commands::show::ShowArgs),

    /// List every dependency as each packaging ecosystem spells it
    Deps(commands::deps::DepsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Update(args) => commands::update::execute(args, output),
            Commands::Check(args) => commands::check::execute(args, output),
            Commands::Show(args) => commands::show::execute(args),
            Commands::Deps(args) => commands::deps::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under a test harness.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["depgen", "check", "--color", "never", "--log-level", "debug"])
            .unwrap();
        assert_eq!(cli.color, "never");
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["depgen"]).is_err());
    }
}
