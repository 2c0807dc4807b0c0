//! # depgen
//!
//! Regenerates a Python project's CI, packaging and requirements files from
//! two source-of-truth inputs: the project definition (`<project>.ini`) and
//! the dependency catalog (`dependencies.ini`).
//!
//! ## Quick Example
//!
//! ```
//! use depgen::dependencies::DependencyCatalog;
//! use depgen::emitter::ConfigEmitter;
//! use depgen::formats::ConfigFormat;
//! use depgen::project::ProjectDefinitionReader;
//!
//! let project = ProjectDefinitionReader::new()
//!     .read_str(
//!         "[project]\nname: sample\nmaintainer: A <a@x.com>\nhomepage_url: http://x\n\
//!          description_short: s\ndescription_long: l1\\nl2\n",
//!     )
//!     .unwrap();
//! let catalog = DependencyCatalog::from_ini_str(
//!     "[six]\ndpkg_name: python-six\nminimum_version: 1.10\npypi_name: six\nrpm_name: python-six\n",
//! )
//! .unwrap();
//!
//! let setup_cfg = ConfigEmitter::new(ConfigFormat::SetupCfg, &project, &catalog).render();
//! assert!(setup_cfg.text().contains("requires = python-six >= 1.10\n"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Project definition (`project`)**: name, maintainer, homepage and
//!   descriptions, read once per run.
//! - **Dependency catalog (`dependencies`)**: one entry per dependency, rendered
//!   on demand for the binary mirror, dpkg, pip and rpm ecosystems through a
//!   single `render` function.
//! - **Formats (`formats`)**: the table of generated files and how each one
//!   is laid out.
//! - **Emitter (`emitter`, `write`)**: renders one format fully in memory and
//!   writes it with a single overwrite.
//! - **Driver (`driver`)**: loads the inputs and runs every emitter in a fixed
//!   order, failing fast.

pub mod defaults;
pub mod dependencies;
pub mod driver;
pub mod emitter;
pub mod error;
pub mod formats;
pub mod output;
pub mod project;
pub mod suggestions;
pub mod write;

#[cfg(test)]
mod dependencies_proptest;
