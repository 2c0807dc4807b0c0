//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_sample_project();
//!     fixture.command().arg("update").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::inputs;
    pub use super::TestFixture;
}

/// Project definition and catalog snippets.
pub mod inputs {
    /// Project definition for a project directory named `sample`.
    pub const SAMPLE_PROJECT: &str = "[project]
name: sample
status: alpha
maintainer: A <a@x.com>
homepage_url: http://x
description_short: s
description_long: l1\\nl2
";

    /// Catalog with a single dependency.
    pub const SIX_CATALOG: &str = "[six]
dpkg_name: python-six
minimum_version: 1.10
pypi_name: six
rpm_name: python-six
version_property: __version__
";

    /// Catalog with names that differ per ecosystem.
    pub const MIXED_CATALOG: &str = "[six]
dpkg_name: python-six
minimum_version: 1.10
pypi_name: six
rpm_name: python-six

[dateutil]
dpkg_name: python-dateutil
l2tbinaries_name: python-dateutil
minimum_version: 1.5
pypi_name: python-dateutil
rpm_name: python-dateutil

[yaml]
dpkg_name: python-yaml
l2tbinaries_name: PyYAML
minimum_version: 3.10
pypi_name: PyYAML
rpm_name: PyYAML
";

    /// Catalog with no dependencies.
    pub const EMPTY_CATALOG: &str = "# no dependencies\n";
}

/// A temporary `sample` project directory.
///
/// The directory is named `sample` so the default project definition file is
/// `sample.ini`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create an empty `sample` project directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("sample")
            .create_dir_all()
            .expect("Failed to create project directory");
        Self { temp_dir }
    }

    /// Project definition, catalog and output directories for the `six` sample.
    pub fn with_sample_project(self) -> Self {
        self.with_project(inputs::SAMPLE_PROJECT)
            .with_catalog(inputs::SIX_CATALOG)
            .with_output_dirs()
    }

    pub fn with_project(self, content: &str) -> Self {
        self.with_file("sample.ini", content)
    }

    pub fn with_catalog(self, content: &str) -> Self {
        self.with_file("dependencies.ini", content)
    }

    /// Create `config/dpkg` and `config/travis`.
    pub fn with_output_dirs(self) -> Self {
        for dir in ["config/dpkg", "config/travis"] {
            self.child(dir)
                .create_dir_all()
                .expect("Failed to create output directory");
        }
        self
    }

    /// Add a file below the project root.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// The project root.
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join("sample")
    }

    /// The directory holding the project root.
    #[allow(dead_code)]
    pub fn parent(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A path below the project root.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child("sample").child(path)
    }

    /// Read a generated file.
    #[allow(dead_code)]
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e))
    }

    /// Create a command running in the project root.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("depgen");
        cmd.current_dir(self.path());
        cmd.env_remove("DEPGEN_PROJECT_DIR")
            .env_remove("DEPGEN_PROJECT_FILE")
            .env_remove("DEPGEN_DEPENDENCIES");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
