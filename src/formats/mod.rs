//! # Generated File Formats
//!
//! Every file `depgen` produces is described by one [`ConfigFormat`] variant:
//! where it lives, which permissions it gets and how its lines are built from
//! the project definition and the dependency catalog. Each format module
//! renders a header block of static lines, a body computed from the catalog
//! and, for some formats, a static footer.
//!
//! | Format | Path | Dependency rendering |
//! |--------|------|----------------------|
//! | [`ConfigFormat::CiManifest`] | `appveyor.yml` | binary distribution |
//! | [`ConfigFormat::DpkgControl`] | `config/dpkg/control` | dpkg |
//! | [`ConfigFormat::Requirements`] | `requirements.txt` | pip |
//! | [`ConfigFormat::SetupCfg`] | `setup.cfg` | rpm |
//! | [`ConfigFormat::InstallScript`] | `config/travis/install.sh` | binary distribution, dpkg without versions |
//! | [`ConfigFormat::ToxIni`] | `tox.ini` | none |
//!
//! Each format asks the catalog for its own ecosystem's rendering. The only
//! rendering derived from another one is the version-stripped dpkg list used
//! by the install script.

use std::fmt;
use std::str::FromStr;

use crate::dependencies::DependencyCatalog;
use crate::project::ProjectDefinition;

mod appveyor;
mod dpkg;
mod requirements;
mod setup_cfg;
mod tox;
mod travis;

/// Test-only packages fetched from the binary mirror on CI.
pub(crate) const BINARY_TEST_DEPENDENCIES: [&str; 3] = ["funcsigs", "mock", "pbr"];

/// Test-only Debian packages installed on Linux CI workers.
pub(crate) const DPKG_TEST_DEPENDENCIES: [&str; 2] = ["python-mock", "python-tox"];

/// One generated configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigFormat {
    /// AppVeyor CI pipeline manifest.
    CiManifest,
    /// Debian packaging control file.
    DpkgControl,
    /// pip requirements file.
    Requirements,
    /// setuptools `bdist_rpm` metadata.
    SetupCfg,
    /// Travis-CI install script.
    InstallScript,
    /// tox test-matrix configuration.
    ToxIni,
}

impl ConfigFormat {
    /// All formats, in the order a run writes them.
    pub const ALL: [ConfigFormat; 6] = [
        ConfigFormat::CiManifest,
        ConfigFormat::DpkgControl,
        ConfigFormat::Requirements,
        ConfigFormat::SetupCfg,
        ConfigFormat::InstallScript,
        ConfigFormat::ToxIni,
    ];

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ConfigFormat::CiManifest => "appveyor",
            ConfigFormat::DpkgControl => "dpkg-control",
            ConfigFormat::Requirements => "requirements",
            ConfigFormat::SetupCfg => "setup-cfg",
            ConfigFormat::InstallScript => "install-script",
            ConfigFormat::ToxIni => "tox",
        }
    }

    /// Destination relative to the project root, `/`-separated.
    pub fn path(self) -> &'static str {
        match self {
            ConfigFormat::CiManifest => appveyor::PATH,
            ConfigFormat::DpkgControl => dpkg::PATH,
            ConfigFormat::Requirements => requirements::PATH,
            ConfigFormat::SetupCfg => setup_cfg::PATH,
            ConfigFormat::InstallScript => travis::PATH,
            ConfigFormat::ToxIni => tox::PATH,
        }
    }

    /// Unix permission bits of the written file.
    pub fn permissions(self) -> u32 {
        match self {
            ConfigFormat::InstallScript => 0o755,
            _ => 0o644,
        }
    }

    /// Build the file's lines; joining them with `\n` gives the file content.
    pub fn render_lines(
        self,
        project: &ProjectDefinition,
        catalog: &DependencyCatalog,
    ) -> Vec<String> {
        match self {
            ConfigFormat::CiManifest => appveyor::render(catalog),
            ConfigFormat::DpkgControl => dpkg::render(project, catalog),
            ConfigFormat::Requirements => requirements::render(catalog),
            ConfigFormat::SetupCfg => setup_cfg::render(project, catalog),
            ConfigFormat::InstallScript => travis::render(catalog),
            ConfigFormat::ToxIni => tox::render(project),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigFormat::ALL
            .into_iter()
            .find(|format| format.name() == s || format.path() == s)
            .ok_or_else(|| {
                let names: Vec<_> = ConfigFormat::ALL.iter().map(|f| f.name()).collect();
                format!("unknown format '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Extend `lines` with static lines.
fn push_static(lines: &mut Vec<String>, block: &[&str]) {
    lines.extend(block.iter().map(|line| line.to_string()));
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_are_in_run_order() {
        let names: Vec<_> = ConfigFormat::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "appveyor",
                "dpkg-control",
                "requirements",
                "setup-cfg",
                "install-script",
                "tox"
            ]
        );
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = ConfigFormat::ALL.iter().map(|f| f.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), ConfigFormat::ALL.len());
    }

    #[test]
    fn test_from_str_accepts_name_and_path() {
        assert_eq!(
            "dpkg-control".parse::<ConfigFormat>().unwrap(),
            ConfigFormat::DpkgControl
        );
        assert_eq!(
            "config/travis/install.sh".parse::<ConfigFormat>().unwrap(),
            ConfigFormat::InstallScript
        );
        let err = "makefile".parse::<ConfigFormat>().unwrap_err();
        assert!(err.contains("unknown format 'makefile'"));
        assert!(err.contains("setup-cfg"));
    }

    #[test]
    fn test_only_install_script_is_executable() {
        for format in ConfigFormat::ALL {
            let expected = if format == ConfigFormat::InstallScript {
                0o755
            } else {
                0o644
            };
            assert_eq!(format.permissions(), expected, "{}", format);
        }
    }
}
