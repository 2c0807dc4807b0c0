//! Driver for a complete generator run
//!
//! The driver loads the project definition and the dependency catalog once,
//! then hands both, by reference, to one emitter per format in the fixed
//! order of [`ConfigFormat::ALL`]. Any failure stops the run immediately;
//! files written before the failure are left in place and the next run
//! regenerates everything from scratch.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::defaults;
use crate::dependencies::DependencyCatalog;
use crate::emitter::{ConfigEmitter, RenderedFile};
use crate::error::Result;
use crate::formats::ConfigFormat;
use crate::project::{ProjectDefinition, ProjectDefinitionReader};

/// Where a run reads its inputs from.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Project root; generated files are written below it.
    pub project_dir: PathBuf,
    /// Overrides `<root>/<root name>.ini`.
    pub project_file: Option<PathBuf>,
    /// Overrides `<root>/dependencies.ini`.
    pub dependencies_file: Option<PathBuf>,
}

impl DriverOptions {
    pub fn new<P: Into<PathBuf>>(project_dir: P) -> Self {
        Self {
            project_dir: project_dir.into(),
            project_file: None,
            dependencies_file: None,
        }
    }
}

/// Owns the inputs of one run.
#[derive(Debug)]
pub struct Driver {
    root: PathBuf,
    project: ProjectDefinition,
    catalog: DependencyCatalog,
}

impl Driver {
    pub fn new(root: PathBuf, project: ProjectDefinition, catalog: DependencyCatalog) -> Self {
        Self {
            root,
            project,
            catalog,
        }
    }

    /// Load the project definition, then the dependency catalog.
    pub fn load(options: &DriverOptions) -> Result<Self> {
        let root = defaults::project_root(&options.project_dir)?;

        let project_file = match &options.project_file {
            Some(path) => path.clone(),
            None => defaults::project_definition_path(&root)?,
        };
        debug!("Reading project definition {}", project_file.display());
        let project = ProjectDefinitionReader::new().read(&project_file)?;

        let dependencies_file = options
            .dependencies_file
            .clone()
            .unwrap_or_else(|| defaults::dependencies_path(&root));
        debug!("Reading dependency catalog {}", dependencies_file.display());
        let catalog = DependencyCatalog::load(&dependencies_file)?;

        info!(
            "Loaded project '{}' with {} dependencies",
            project.name,
            catalog.len()
        );
        Ok(Self::new(root, project, catalog))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project(&self) -> &ProjectDefinition {
        &self.project
    }

    pub fn catalog(&self) -> &DependencyCatalog {
        &self.catalog
    }

    pub fn emitter(&self, format: ConfigFormat) -> ConfigEmitter<'_> {
        ConfigEmitter::new(format, &self.project, &self.catalog)
    }

    /// Render every format in run order without touching the disk.
    pub fn render_all(&self) -> Vec<RenderedFile> {
        ConfigFormat::ALL
            .iter()
            .map(|format| self.emitter(*format).render())
            .collect()
    }

    /// Write every format in run order, stopping at the first failure.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(ConfigFormat::ALL.len());
        for format in ConfigFormat::ALL {
            written.push(self.emitter(format).write(&self.root)?);
        }
        Ok(written)
    }
}
