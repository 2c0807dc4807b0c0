//! # Terminal Output
//!
//! Status markers for the `depgen` CLI. Decorated markers (emoji) are only
//! used when colour output is enabled; otherwise a bracketed ASCII tag is
//! printed so logs and CI transcripts stay readable.
//!
//! Colour support follows the usual conventions:
//! - `--color=always|never|auto`
//! - `NO_COLOR` (any value) disables colour
//! - `CLICOLOR=0` disables colour, `CLICOLOR_FORCE=1` forces it
//! - `TERM=dumb` disables colour
//! - otherwise, colour is on when stdout is a capable terminal

use std::env;

/// Output configuration for the CLI.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Whether colours and emoji should be used.
    pub use_color: bool,
}

/// A status marker printed in front of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A file was written or is up to date.
    Ok,
    /// A file would change.
    Stale,
    /// A file is missing on disk.
    Missing,
    /// The run failed.
    Failed,
    /// Informational message.
    Info,
}

impl Status {
    fn decorated(self) -> &'static str {
        match self {
            Status::Ok => "✅",
            Status::Stale => "🔄",
            Status::Missing => "➕",
            Status::Failed => "❌",
            Status::Info => "🔎",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Stale => "[STALE]",
            Status::Missing => "[MISSING]",
            Status::Failed => "[FAILED]",
            Status::Info => "[INFO]",
        }
    }
}

impl OutputConfig {
    /// Build the configuration from the `--color` flag value and the
    /// environment. Unknown flag values behave like `auto`.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_ascii_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| !v.is_empty() && v != "0") {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// The marker for `status` under this configuration.
    pub fn marker(&self, status: Status) -> &'static str {
        if self.use_color {
            status.decorated()
        } else {
            status.plain()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
