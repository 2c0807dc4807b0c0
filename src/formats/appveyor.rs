//! AppVeyor CI manifest (`appveyor.yml`).
//!
//! The Windows workers fetch every runtime dependency, plus the test-only
//! packages, from the l2tbinaries mirror with a single `update.py` call.

use super::{push_static, BINARY_TEST_DEPENDENCIES};
use crate::dependencies::DependencyCatalog;

pub(super) const PATH: &str = "appveyor.yml";

const PYWIN32_VERSION: &str = "220";
const WMI_VERSION: &str = "1.4.9";

const FOOTER: &[&str] = &[
    "",
    "build: off",
    "",
    "test_script:",
    r#"  - "%PYTHON%\\python.exe run_tests.py""#,
    "",
];

fn header() -> Vec<String> {
    vec![
        "environment:".to_string(),
        "  matrix:".to_string(),
        r#"    - PYTHON: "C:\\Python27""#.to_string(),
        String::new(),
        "install:".to_string(),
        r#"  - cmd: '"C:\Program Files\Microsoft SDKs\Windows\v7.1\Bin\SetEnv.cmd" /x86 /release'"#
            .to_string(),
        download(
            "https://bootstrap.pypa.io/get-pip.py",
            r"C:\Projects\get-pip.py",
        ),
        download(
            &format!(
                "https://github.com/log2timeline/l2tbinaries/raw/master/win32/pywin32-{}.win32-py2.7.exe",
                PYWIN32_VERSION
            ),
            &format!(r"C:\Projects\pywin32-{}.win32-py2.7.exe", PYWIN32_VERSION),
        ),
        download(
            &format!(
                "https://github.com/log2timeline/l2tbinaries/raw/master/win32/WMI-{}.win32.exe",
                WMI_VERSION
            ),
            &format!(r"C:\Projects\WMI-{}.win32.exe", WMI_VERSION),
        ),
        r#"  - cmd: "%PYTHON%\\python.exe C:\\Projects\\get-pip.py""#.to_string(),
        format!(
            r#"  - cmd: "%PYTHON%\\Scripts\\easy_install.exe C:\\Projects\\pywin32-{}.win32-py2.7.exe""#,
            PYWIN32_VERSION
        ),
        format!(
            r#"  - cmd: "%PYTHON%\\Scripts\\easy_install.exe C:\\Projects\\WMI-{}.win32.exe""#,
            WMI_VERSION
        ),
        r"  - cmd: git clone https://github.com/log2timeline/l2tdevtools.git && move l2tdevtools ..\"
            .to_string(),
    ]
}

fn download(url: &str, destination: &str) -> String {
    format!(
        "  - ps: (new-object net.webclient).DownloadFile('{}', '{}')",
        url, destination
    )
}

/// The `update.py` invocation; `dependencies` is the space-joined package list.
fn update_command(dependencies: &str) -> String {
    format!(
        r#"  - cmd: mkdir dependencies && set PYTHONPATH=..\l2tdevtools && "%PYTHON%\\python.exe" ..\l2tdevtools\tools\update.py --download-directory dependencies --machine-type x86 --msi-targetdir "%PYTHON%" {}"#,
        dependencies
    )
}

pub(super) fn render(catalog: &DependencyCatalog) -> Vec<String> {
    let mut dependencies = catalog.binary_distribution_names();
    dependencies.extend(BINARY_TEST_DEPENDENCIES.iter().map(|d| d.to_string()));

    let mut lines = header();
    lines.push(update_command(&dependencies.join(" ")));
    push_static(&mut lines, FOOTER);
    lines
}
