//! # Project Definition
//!
//! The project definition is the identity record every generated file is
//! stamped with: the project name, its maintainer, homepage and the short
//! and long descriptions used by the Debian control file.
//!
//! It is read from an INI file with a single `[project]` section:
//!
//! ```ini
//! [project]
//! name: sample
//! maintainer: A <a@x.com>
//! homepage_url: http://x
//! description_short: s
//! description_long: l1\nl2
//! ```
//!
//! Both `:` and `=` separate keys from values. A `\n` escape inside
//! `description_long` becomes a line break, and so does each indented
//! continuation line:
//!
//! ```ini
//! description_long: dfWinReg provides
//!                   read-only access to Windows Registry objects.
//! ```
//!
//! Keys the generator does not use (`status`, `name_description`, ...) are
//! ignored.

use std::fs;
use std::path::Path;

use ini::{Ini, ParseOption, Properties};
use serde::Serialize;

use crate::error::{Error, Result};

/// Name of the INI section that holds the project definition.
pub const PROJECT_SECTION: &str = "project";

/// Immutable project identity, loaded once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDefinition {
    pub name: String,
    pub maintainer: String,
    pub homepage_url: String,
    pub description_short: String,
    /// Multi-line description; lines are separated by `\n`.
    pub description_long: String,
}

impl ProjectDefinition {
    /// Iterate over the lines of the long description.
    pub fn description_lines(&self) -> impl Iterator<Item = &str> {
        self.description_long.split('\n')
    }
}

/// Reads a [`ProjectDefinition`] from its INI representation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectDefinitionReader;

impl ProjectDefinitionReader {
    pub fn new() -> Self {
        Self
    }

    /// Read and validate the project definition stored at `path`.
    pub fn read(&self, path: &Path) -> Result<ProjectDefinition> {
        let content = fs::read_to_string(path).map_err(|e| Error::ProjectDefinition {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.parse(&content, &path.display().to_string())
    }

    /// Read the project definition from an in-memory INI string.
    pub fn read_str(&self, content: &str) -> Result<ProjectDefinition> {
        self.parse(content, "<string>")
    }

    fn parse(&self, content: &str, origin: &str) -> Result<ProjectDefinition> {
        let error = |message: String| Error::ProjectDefinition {
            path: origin.to_string(),
            message,
        };

        let options = ParseOption {
            enabled_indented_mutiline_value: true,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(content, options).map_err(|e| error(e.to_string()))?;
        let section = ini
            .section(Some(PROJECT_SECTION))
            .ok_or_else(|| error(format!("missing [{}] section", PROJECT_SECTION)))?;

        let field = |key: &str| required(section, key).map_err(&error);

        Ok(ProjectDefinition {
            name: field("name")?,
            maintainer: field("maintainer")?,
            homepage_url: field("homepage_url")?,
            description_short: field("description_short")?,
            description_long: normalize_description(&field("description_long")?),
        })
    }
}

fn required(section: &Properties, key: &str) -> std::result::Result<String, String> {
    match section.get(key).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        Some(_) => Err(format!("key '{}' must not be empty", key)),
        None => Err(format!("missing key '{}'", key)),
    }
}

/// Trim each description line and drop trailing blank lines.
fn normalize_description(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().map(str::trim).collect();
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |index| index + 1);
    lines[..end].join("\n")
}
