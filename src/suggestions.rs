//! # Error Suggestions
//!
//! Turns library errors into CLI errors that say what went wrong AND how to
//! fix it, by appending `hint:` lines.
//!
//! ```rust,ignore
//! let driver = Driver::load(&options).map_err(suggestions::with_hints)?;
//! ```

use crate::error::Error;

/// Convert a library error into an `anyhow::Error` with hints attached.
pub fn with_hints(error: Error) -> anyhow::Error {
    let hints: &[&str] = match &error {
        Error::ProjectDefinition { .. } => &[
            "hint: The project definition is read from <project dir>/<project dir name>.ini",
            "hint: Use --project-file to point at a different file",
            "hint: Set DEPGEN_PROJECT_FILE environment variable",
        ],
        Error::Catalog { dependency, .. } if dependency.is_empty() => &[
            "hint: The dependency catalog is read from <project dir>/dependencies.ini",
            "hint: Use --dependencies to point at a different file",
        ],
        Error::Catalog { .. } => &[
            "hint: Allowed keys: dpkg_name, is_optional, l2tbinaries_name, maximum_version, \
             minimum_version, pypi_name, rpm_name, version_property",
            "hint: Versions must not contain spaces, commas or parentheses",
        ],
        Error::Write { .. } => &[
            "hint: Generated files are written to config/dpkg/ and config/travis/; \
             make sure both directories exist",
            "hint: Run 'depgen update --dry-run' to list every destination",
        ],
        Error::Io(_) => &[],
    };

    if hints.is_empty() {
        anyhow::Error::new(error)
    } else {
        anyhow::anyhow!("{}\n\n{}", error, hints.join("\n"))
    }
}
