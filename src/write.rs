//! Writing rendered files to disk
//!
//! Each file is written with one `fs::write` call that receives the
//! complete buffer; the destination is truncated and replaced, never merged.
//! Parent directories are not created: generated files live in directories
//! the project already tracks, so a missing one is reported as an error.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::emitter::RenderedFile;
use crate::error::{Error, Result};

/// Write `file` below `root` and apply its permissions.
pub fn write_file(root: &Path, file: &RenderedFile) -> Result<PathBuf> {
    let full_path = root.join(&file.path);

    fs::write(&full_path, &file.content).map_err(|e| Error::Write {
        path: full_path.display().to_string(),
        message: e.to_string(),
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(file.permissions);
        fs::set_permissions(&full_path, perms).map_err(|e| Error::Write {
            path: full_path.display().to_string(),
            message: format!("failed to set permissions: {}", e),
        })?;
    }

    info!("Wrote {} ({} bytes)", full_path.display(), file.size());
    Ok(full_path)
}

/// Whether the file on disk already holds exactly `file`'s content.
///
/// A missing destination counts as out of date.
pub fn is_up_to_date(root: &Path, file: &RenderedFile) -> Result<bool> {
    let full_path = root.join(&file.path);
    match fs::read(&full_path) {
        Ok(existing) => Ok(existing == file.content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
