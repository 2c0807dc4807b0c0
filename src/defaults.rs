//! Default input locations.
//!
//! The project definition lives next to the generated files and is named
//! after the project directory: `/src/dfwinreg` reads `dfwinreg.ini`. The
//! dependency catalog is `dependencies.ini` in the same directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of the dependency catalog inside the project root.
pub const DEPENDENCIES_FILE: &str = "dependencies.ini";

/// Resolve `project_dir` to an absolute path so it has a directory name.
pub fn project_root(project_dir: &Path) -> Result<PathBuf> {
    fs::canonicalize(project_dir).map_err(|e| Error::ProjectDefinition {
        path: project_dir.display().to_string(),
        message: format!("cannot resolve project directory: {}", e),
    })
}

/// `<root>/<root name>.ini`; `root` must already be absolute.
pub fn project_definition_path(root: &Path) -> Result<PathBuf> {
    let name = root
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::ProjectDefinition {
            path: root.display().to_string(),
            message: "project directory has no usable name".to_string(),
        })?;
    Ok(root.join(format!("{}.ini", name)))
}

/// `<root>/dependencies.ini`.
pub fn dependencies_path(root: &Path) -> PathBuf {
    root.join(DEPENDENCIES_FILE)
}
