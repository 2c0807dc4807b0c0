//! # Configuration Emitter
//!
//! A [`ConfigEmitter`] binds one [`ConfigFormat`] to the project definition
//! and dependency catalog of a run. Rendering is a pure function of those
//! two inputs; writing hands the complete buffer to a single write call, so
//! a failure can never leave a half-rendered file behind.

use std::path::{Path, PathBuf};

use log::debug;

use crate::dependencies::DependencyCatalog;
use crate::error::Result;
use crate::formats::ConfigFormat;
use crate::project::ProjectDefinition;
use crate::write;

/// A fully rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Destination relative to the project root.
    pub path: PathBuf,
    /// UTF-8 file content.
    pub content: Vec<u8>,
    /// Unix permission bits applied after writing.
    pub permissions: u32,
}

impl RenderedFile {
    /// Join `lines` with `\n` into a file's content.
    pub fn from_lines<P: Into<PathBuf>>(path: P, lines: &[String], permissions: u32) -> Self {
        Self {
            path: path.into(),
            content: lines.join("\n").into_bytes(),
            permissions,
        }
    }

    /// Content as text. Rendered files are always valid UTF-8.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Renders and writes one generated file.
#[derive(Debug, Clone, Copy)]
pub struct ConfigEmitter<'a> {
    format: ConfigFormat,
    project: &'a ProjectDefinition,
    catalog: &'a DependencyCatalog,
}

impl<'a> ConfigEmitter<'a> {
    pub fn new(
        format: ConfigFormat,
        project: &'a ProjectDefinition,
        catalog: &'a DependencyCatalog,
    ) -> Self {
        Self {
            format,
            project,
            catalog,
        }
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// Render the file in memory.
    pub fn render(&self) -> RenderedFile {
        let lines = self.format.render_lines(self.project, self.catalog);
        let file = RenderedFile::from_lines(self.format.path(), &lines, self.format.permissions());
        debug!(
            "Rendered {} ({} lines, {} bytes)",
            self.format.path(),
            lines.len(),
            file.size()
        );
        file
    }

    /// Render the file and overwrite its destination under `root`.
    ///
    /// Returns the full path that was written.
    pub fn write(&self, root: &Path) -> Result<PathBuf> {
        let file = self.render();
        write::write_file(root, &file)
    }
}
