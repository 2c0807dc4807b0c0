//! Debian packaging control file (`config/dpkg/control`).
//!
//! The control file declares two binary packages, one per Python
//! interpreter. Both get the same dependency relations; the Python 3 block
//! swaps every standalone `python` token for `python3`, which covers both
//! `python-six` and libyal bindings such as `libregf-python`.

use std::sync::LazyLock;

use regex::Regex;

use crate::dependencies::{DependencyCatalog, PYTHON_PACKAGE_PREFIX};
use crate::project::ProjectDefinition;

pub(super) const PATH: &str = "config/dpkg/control";

const PYTHON3_PACKAGE_PREFIX: &str = "python3-";

/// Join dependency relations for a `Depends:` field.
///
/// A non-empty list keeps a trailing `, ` so the `${...:Depends}`
/// substitution variables can follow it directly.
fn depends_prefix(relations: &[String]) -> String {
    if relations.is_empty() {
        String::new()
    } else {
        format!("{}, ", relations.join(", "))
    }
}

static PYTHON_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bpython\b").expect("python token pattern"));

/// Rewrite Python 2 package names for the Python 3 package block.
///
/// `python3-*` names are left alone.
fn python3_relations(relations: &str) -> String {
    PYTHON_TOKEN.replace_all(relations, "python3").into_owned()
}

/// Long description lines are indented by one space; blank lines become ` .`.
fn extended_description(project: &ProjectDefinition) -> Vec<String> {
    project
        .description_lines()
        .map(|line| {
            if line.is_empty() {
                " .".to_string()
            } else {
                format!(" {}", line)
            }
        })
        .collect()
}

fn binary_package(
    lines: &mut Vec<String>,
    project: &ProjectDefinition,
    package_prefix: &str,
    depends: &str,
    substvar: &str,
) {
    lines.push(format!("Package: {}{}", package_prefix, project.name));
    lines.push("Architecture: all".to_string());
    lines.push(format!(
        "Depends: {}${{{}:Depends}}, ${{misc:Depends}}",
        depends, substvar
    ));
    lines.push(format!("Description: {}", project.description_short));
    lines.extend(extended_description(project));
}

pub(super) fn render(project: &ProjectDefinition, catalog: &DependencyCatalog) -> Vec<String> {
    let python2_depends = depends_prefix(&catalog.linux_distribution_specs(false));
    let python3_depends = python3_relations(&python2_depends);

    let mut lines = vec![
        format!("Source: {}", project.name),
        "Section: python".to_string(),
        "Priority: extra".to_string(),
        format!("Maintainer: {}", project.maintainer),
        "Build-Depends: debhelper (>= 7), python-all (>= 2.7~), python-setuptools, \
         python3-all (>= 3.4~), python3-setuptools"
            .to_string(),
        "Standards-Version: 3.9.5".to_string(),
        "X-Python-Version: >= 2.7".to_string(),
        "X-Python3-Version: >= 3.4".to_string(),
        format!("Homepage: {}", project.homepage_url),
        String::new(),
    ];

    binary_package(
        &mut lines,
        project,
        PYTHON_PACKAGE_PREFIX,
        &python2_depends,
        "python",
    );
    lines.push(String::new());
    binary_package(
        &mut lines,
        project,
        PYTHON3_PACKAGE_PREFIX,
        &python3_depends,
        "python3",
    );
    lines.push(String::new());
    lines
}
