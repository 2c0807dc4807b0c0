//! # Dependency Catalog
//!
//! The dependency catalog maps each canonical dependency name to the name
//! (and version constraint) it carries in every packaging ecosystem the
//! generated files talk to:
//!
//! - **binary distribution**: prebuilt packages on the l2tbinaries mirror,
//!   addressed by bare name;
//! - **dpkg**: Debian control file relations, `python-six (>= 1.10)`;
//! - **pip**: requirement strings, `six>=1.10`;
//! - **rpm**: `requires` entries, `python-six >= 1.10`.
//!
//! All four renderings go through [`render`], so the same dependency set, in
//! the same order, is visible to every generated file.
//!
//! ## Catalog format
//!
//! ```ini
//! [six]
//! dpkg_name: python-six
//! minimum_version: 1.10
//! pypi_name: six
//! rpm_name: python-six
//! ```
//!
//! Every key is optional. Missing package names fall back to the canonical
//! name (binary distribution, pip) or `python-<name>` (dpkg, rpm).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use ini::{Ini, Properties};
use log::warn;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// Package-name prefix used for dpkg and rpm names that are not spelled out.
pub const PYTHON_PACKAGE_PREFIX: &str = "python-";

static VERSION_CONSTRAINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("version constraint pattern"));

/// Packaging ecosystem a dependency can be rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ecosystem {
    BinaryDistribution,
    Dpkg,
    Pip,
    Rpm,
}

impl Ecosystem {
    pub const ALL: [Ecosystem; 4] = [
        Ecosystem::BinaryDistribution,
        Ecosystem::Dpkg,
        Ecosystem::Pip,
        Ecosystem::Rpm,
    ];
}

/// A single catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Canonical dependency name (the catalog section name).
    pub name: String,
    pub dpkg_name: Option<String>,
    pub l2tbinaries_name: Option<String>,
    pub pypi_name: Option<String>,
    pub rpm_name: Option<String>,
    pub minimum_version: Option<String>,
    /// Only honoured by the pip rendering.
    pub maximum_version: Option<String>,
    pub is_optional: bool,
}

impl Dependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_minimum_version(mut self, version: impl Into<String>) -> Self {
        self.minimum_version = Some(version.into());
        self
    }

    fn package_name(&self, ecosystem: Ecosystem) -> String {
        let explicit = match ecosystem {
            Ecosystem::BinaryDistribution => &self.l2tbinaries_name,
            Ecosystem::Dpkg => &self.dpkg_name,
            Ecosystem::Pip => &self.pypi_name,
            Ecosystem::Rpm => &self.rpm_name,
        };
        match (explicit, ecosystem) {
            (Some(name), _) => name.clone(),
            (None, Ecosystem::Dpkg | Ecosystem::Rpm) => {
                format!("{}{}", PYTHON_PACKAGE_PREFIX, self.name)
            }
            (None, _) => self.name.clone(),
        }
    }
}

/// Render `dependency` the way `ecosystem` spells it.
pub fn render(dependency: &Dependency, ecosystem: Ecosystem) -> String {
    let name = dependency.package_name(ecosystem);
    let minimum = dependency.minimum_version.as_deref();
    let maximum = dependency.maximum_version.as_deref();

    match ecosystem {
        Ecosystem::BinaryDistribution => name,
        Ecosystem::Dpkg => match minimum {
            Some(min) => format!("{} (>= {})", name, min),
            None => name,
        },
        Ecosystem::Pip => match (minimum, maximum) {
            (Some(min), Some(max)) => format!("{}>={},<={}", name, min, max),
            (Some(min), None) => format!("{}>={}", name, min),
            (None, Some(max)) => format!("{}<={}", name, max),
            (None, None) => name,
        },
        Ecosystem::Rpm => match minimum {
            Some(min) => format!("{} >= {}", name, min),
            None => name,
        },
    }
}

/// Remove a trailing Debian-style version constraint: `foo (>= 1.2)` -> `foo`.
pub fn strip_version_constraint(spec: &str) -> String {
    VERSION_CONSTRAINT.replace(spec, "").into_owned()
}

/// The loaded dependency catalog, ordered by canonical name.
#[derive(Debug, Clone, Default)]
pub struct DependencyCatalog {
    dependencies: BTreeMap<String, Dependency>,
}

impl DependencyCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog stored at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Catalog {
            dependency: String::new(),
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_ini_str(&content)
    }

    /// Parse a catalog from its INI text.
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let ini = Ini::load_from_str(content).map_err(|e| Error::Catalog {
            dependency: String::new(),
            message: e.to_string(),
        })?;

        let mut catalog = Self::new();
        for (section, properties) in ini.iter() {
            let Some(name) = section else {
                if !properties.is_empty() {
                    return Err(Error::Catalog {
                        dependency: String::new(),
                        message: "entries outside of a dependency section".to_string(),
                    });
                }
                continue;
            };
            catalog.insert(parse_dependency(name, properties)?)?;
        }
        Ok(catalog)
    }

    /// Add a dependency; canonical names must be unique.
    pub fn insert(&mut self, dependency: Dependency) -> Result<()> {
        validate(&dependency)?;
        if dependency.maximum_version.is_some() {
            warn!(
                "maximum_version of '{}' only applies to pip requirements",
                dependency.name
            );
        }
        if self.dependencies.contains_key(&dependency.name) {
            return Err(Error::Catalog {
                dependency: dependency.name,
                message: "defined more than once".to_string(),
            });
        }
        self.dependencies.insert(dependency.name.clone(), dependency);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Iterate over the entries in canonical-name order.
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.values()
    }

    /// Render every dependency for one ecosystem.
    pub fn renderings(&self, ecosystem: Ecosystem) -> Vec<String> {
        self.dependencies()
            .map(|dependency| render(dependency, ecosystem))
            .collect()
    }

    /// Package names on the prebuilt binary mirror.
    pub fn binary_distribution_names(&self) -> Vec<String> {
        self.renderings(Ecosystem::BinaryDistribution)
    }

    /// Debian relations; `exclude_version` strips the `(>= x)` constraint.
    pub fn linux_distribution_specs(&self, exclude_version: bool) -> Vec<String> {
        let specs = self.renderings(Ecosystem::Dpkg);
        if exclude_version {
            specs
                .iter()
                .map(|spec| strip_version_constraint(spec))
                .collect()
        } else {
            specs
        }
    }

    pub fn pip_requirements(&self) -> Vec<String> {
        self.renderings(Ecosystem::Pip)
    }

    pub fn rpm_requirements(&self) -> Vec<String> {
        self.renderings(Ecosystem::Rpm)
    }
}

fn parse_dependency(name: &str, properties: &Properties) -> Result<Dependency> {
    let error = |message: String| Error::Catalog {
        dependency: name.to_string(),
        message,
    };

    let mut dependency = Dependency::new(name.trim());
    for (key, value) in properties.iter() {
        let value = value.trim();
        let text = || (!value.is_empty()).then(|| value.to_string());
        match key {
            "dpkg_name" => dependency.dpkg_name = text(),
            "l2tbinaries_name" => dependency.l2tbinaries_name = text(),
            "pypi_name" => dependency.pypi_name = text(),
            "rpm_name" => dependency.rpm_name = text(),
            "minimum_version" => dependency.minimum_version = text(),
            "maximum_version" => dependency.maximum_version = text(),
            "is_optional" => {
                dependency.is_optional = match value.to_ascii_lowercase().as_str() {
                    "" | "false" | "no" | "0" => false,
                    "true" | "yes" | "1" => true,
                    other => return Err(error(format!("invalid is_optional value '{}'", other))),
                }
            }
            // Read by the project's own version checks, not by the generator.
            "version_property" => {}
            other => return Err(error(format!("unknown key '{}'", other))),
        }
    }
    Ok(dependency)
}

fn validate(dependency: &Dependency) -> Result<()> {
    let error = |message: String| Error::Catalog {
        dependency: dependency.name.clone(),
        message,
    };

    if dependency.name.is_empty() || dependency.name.contains(char::is_whitespace) {
        return Err(error("invalid dependency name".to_string()));
    }

    let names = [
        ("dpkg_name", &dependency.dpkg_name),
        ("l2tbinaries_name", &dependency.l2tbinaries_name),
        ("pypi_name", &dependency.pypi_name),
        ("rpm_name", &dependency.rpm_name),
    ];
    for (key, value) in names {
        if let Some(value) = value {
            if value.contains(|c: char| c.is_whitespace() || c == ',') {
                return Err(error(format!("invalid {} '{}'", key, value)));
            }
        }
    }

    let versions = [
        ("minimum_version", &dependency.minimum_version),
        ("maximum_version", &dependency.maximum_version),
    ];
    for (key, value) in versions {
        if let Some(value) = value {
            if value.is_empty()
                || value.contains(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
            {
                return Err(error(format!("invalid {} '{}'", key, value)));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "\
[six]
dpkg_name: python-six
minimum_version: 1.10
pypi_name: six
rpm_name: python-six
version_property: __version__

[dateutil]
dpkg_name: python-dateutil
l2tbinaries_name: python-dateutil
minimum_version: 1.5
pypi_name: python-dateutil
rpm_name: python-dateutil

[yaml]
l2tbinaries_name: PyYAML
pypi_name: PyYAML
is_optional: true
";

    fn six() -> Dependency {
        Dependency {
            dpkg_name: Some("python-six".to_string()),
            pypi_name: Some("six".to_string()),
            rpm_name: Some("python-six".to_string()),
            ..Dependency::new("six").with_minimum_version("1.10")
        }
    }

    #[test]
    fn test_render_each_ecosystem() {
        let six = six();
        assert_eq!(render(&six, Ecosystem::BinaryDistribution), "six");
        assert_eq!(render(&six, Ecosystem::Dpkg), "python-six (>= 1.10)");
        assert_eq!(render(&six, Ecosystem::Pip), "six>=1.10");
        assert_eq!(render(&six, Ecosystem::Rpm), "python-six >= 1.10");
    }

    #[test]
    fn test_render_fallback_names() {
        let bare = Dependency::new("lzma");
        assert_eq!(render(&bare, Ecosystem::BinaryDistribution), "lzma");
        assert_eq!(render(&bare, Ecosystem::Dpkg), "python-lzma");
        assert_eq!(render(&bare, Ecosystem::Pip), "lzma");
        assert_eq!(render(&bare, Ecosystem::Rpm), "python-lzma");
    }

    #[test]
    fn test_render_pip_maximum_version() {
        let mut dependency = Dependency::new("pytsk3").with_minimum_version("20160721");
        dependency.maximum_version = Some("20170000".to_string());
        assert_eq!(
            render(&dependency, Ecosystem::Pip),
            "pytsk3>=20160721,<=20170000"
        );
        assert_eq!(
            render(&dependency, Ecosystem::Dpkg),
            "python-pytsk3 (>= 20160721)"
        );

        dependency.minimum_version = None;
        assert_eq!(render(&dependency, Ecosystem::Pip), "pytsk3<=20170000");
    }

    #[test]
    fn test_strip_version_constraint() {
        assert_eq!(strip_version_constraint("foo (>= 1.2)"), "foo");
        assert_eq!(strip_version_constraint("foo"), "foo");
        assert_eq!(strip_version_constraint("python-six (>= 1.10)"), "python-six");
    }

    #[test]
    fn test_from_ini_str_orders_by_name() {
        let catalog = DependencyCatalog::from_ini_str(CATALOG).unwrap();
        assert_eq!(catalog.len(), 3);
        let names: Vec<_> = catalog.dependencies().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["dateutil", "six", "yaml"]);
        assert!(catalog.dependencies().last().unwrap().is_optional);
    }

    #[test]
    fn test_catalog_queries() {
        let catalog = DependencyCatalog::from_ini_str(CATALOG).unwrap();
        assert_eq!(
            catalog.binary_distribution_names(),
            vec!["python-dateutil", "six", "PyYAML"]
        );
        assert_eq!(
            catalog.linux_distribution_specs(false),
            vec!["python-dateutil (>= 1.5)", "python-six (>= 1.10)", "python-yaml"]
        );
        assert_eq!(
            catalog.linux_distribution_specs(true),
            vec!["python-dateutil", "python-six", "python-yaml"]
        );
        assert_eq!(
            catalog.pip_requirements(),
            vec!["python-dateutil>=1.5", "six>=1.10", "PyYAML"]
        );
        assert_eq!(
            catalog.rpm_requirements(),
            vec!["python-dateutil >= 1.5", "python-six >= 1.10", "python-yaml"]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = DependencyCatalog::from_ini_str("").unwrap();
        assert!(catalog.is_empty());
        for ecosystem in Ecosystem::ALL {
            assert!(catalog.renderings(ecosystem).is_empty());
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = DependencyCatalog::from_ini_str("[six]\ndeb_name: python-six\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dependency catalog error for 'six': unknown key 'deb_name'"
        );
    }

    #[test]
    fn test_invalid_version_is_rejected() {
        let err =
            DependencyCatalog::from_ini_str("[six]\nminimum_version: 1.10 (beta)\n").unwrap_err();
        assert!(err.to_string().contains("invalid minimum_version"));
    }

    #[test]
    fn test_invalid_boolean_is_rejected() {
        let err = DependencyCatalog::from_ini_str("[six]\nis_optional: maybe\n").unwrap_err();
        assert!(err.to_string().contains("invalid is_optional value 'maybe'"));
    }

    #[test]
    fn test_entries_outside_section_are_rejected() {
        let err = DependencyCatalog::from_ini_str("pypi_name: six\n").unwrap_err();
        assert!(err.to_string().contains("outside of a dependency section"));
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut catalog = DependencyCatalog::new();
        catalog.insert(six()).unwrap();
        let err = catalog.insert(six()).unwrap_err();
        assert!(err.to_string().contains("defined more than once"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DependencyCatalog::load(Path::new("/nonexistent/dependencies.ini")).unwrap_err();
        assert!(matches!(err, Error::Catalog { .. }));
        assert!(err.to_string().contains("cannot read"));
    }
}
