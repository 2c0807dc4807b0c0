//! Travis-CI install script (`config/travis/install.sh`).
//!
//! macOS workers pull packages from the l2tbinaries mirror; Linux workers
//! install Debian packages from the GIFT PPA. Each axis gets its own runtime
//! and test variables. `apt-get install` takes bare package names, so the
//! Linux axis uses the dpkg relations with their version constraints
//! stripped.

use super::{push_static, BINARY_TEST_DEPENDENCIES, DPKG_TEST_DEPENDENCIES};
use crate::dependencies::DependencyCatalog;

pub(super) const PATH: &str = "config/travis/install.sh";

const HEADER: &[&str] = &[
    "#!/bin/bash",
    "#",
    "# Script to set up Travis-CI test VM.",
    "",
    r#"COVERALL_DEPENDENCIES="python-coverage python-coveralls python-docopt";"#,
    "",
];

const FOOTER: &[&str] = &[
    "",
    "# Exit on error.",
    "set -e;",
    "",
    r#"if test ${TRAVIS_OS_NAME} = "osx";"#,
    "then",
    "\tgit clone https://github.com/log2timeline/l2tdevtools.git;",
    "",
    "\tmv l2tdevtools ../;",
    "\tmkdir dependencies;",
    "",
    "\tPYTHONPATH=../l2tdevtools ../l2tdevtools/tools/update.py \
     --download-directory=dependencies ${L2TBINARIES_DEPENDENCIES} \
     ${L2TBINARIES_TEST_DEPENDENCIES};",
    "",
    r#"elif test ${TRAVIS_OS_NAME} = "linux";"#,
    "then",
    "\tsudo add-apt-repository ppa:gift/dev -y;",
    "\tsudo apt-get update -q;",
    "\t# Only install the Python 2 dependencies.",
    "\t# Also see: https://docs.travis-ci.com/user/languages/python/\
     #Travis-CI-Uses-Isolated-virtualenvs",
    "\tsudo apt-get install -y ${COVERALL_DEPENDENCIES} \
     ${PYTHON2_DEPENDENCIES} ${PYTHON2_TEST_DEPENDENCIES};",
    "fi",
    "",
];

fn variable(name: &str, packages: &[String]) -> String {
    format!("{}=\"{}\";", name, packages.join(" "))
}

fn fixed(packages: &[&str]) -> Vec<String> {
    packages.iter().map(|p| p.to_string()).collect()
}

pub(super) fn render(catalog: &DependencyCatalog) -> Vec<String> {
    let mut lines = Vec::new();
    push_static(&mut lines, HEADER);

    lines.push(variable(
        "L2TBINARIES_DEPENDENCIES",
        &catalog.binary_distribution_names(),
    ));
    lines.push(String::new());
    lines.push(variable(
        "L2TBINARIES_TEST_DEPENDENCIES",
        &fixed(&BINARY_TEST_DEPENDENCIES),
    ));
    lines.push(String::new());

    lines.push(variable(
        "PYTHON2_DEPENDENCIES",
        &catalog.linux_distribution_specs(true),
    ));
    lines.push(String::new());
    lines.push(variable(
        "PYTHON2_TEST_DEPENDENCIES",
        &fixed(&DPKG_TEST_DEPENDENCIES),
    ));

    push_static(&mut lines, FOOTER);
    lines
}
