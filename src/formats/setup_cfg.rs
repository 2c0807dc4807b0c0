//! setuptools metadata (`setup.cfg`), `[bdist_rpm]` section.

use super::push_static;
use crate::dependencies::DependencyCatalog;
use crate::project::ProjectDefinition;

pub(super) const PATH: &str = "setup.cfg";

const REQUIRES_KEY: &str = "requires = ";

const DOC_FILES: &[&str] = &[
    "doc_files = ACKNOWLEDGEMENTS",
    "            AUTHORS",
    "            LICENSE",
    "            README",
    "build_requires = python-setuptools",
];

/// `requires = first`, then continuation lines aligned under the first value.
fn requires_lines(requirements: &[String]) -> Vec<String> {
    let indent = " ".repeat(REQUIRES_KEY.len());
    requirements
        .iter()
        .enumerate()
        .map(|(index, requirement)| {
            if index == 0 {
                format!("{}{}", REQUIRES_KEY, requirement)
            } else {
                format!("{}{}", indent, requirement)
            }
        })
        .collect()
}

pub(super) fn render(project: &ProjectDefinition, catalog: &DependencyCatalog) -> Vec<String> {
    let mut lines = vec![
        "[bdist_rpm]".to_string(),
        "release = 1".to_string(),
        format!("packager = {}", project.maintainer),
    ];
    push_static(&mut lines, DOC_FILES);
    lines.extend(requires_lines(&catalog.rpm_requirements()));
    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::test_support::{sample_project, six_catalog, two_dependency_catalog};

    #[test]
    fn test_single_requirement_has_no_continuation() {
        let lines = render(&sample_project(), &six_catalog());
        assert_eq!(lines[lines.len() - 2], "requires = python-six >= 1.10");
        assert_eq!(lines.last().unwrap(), "");
        assert_eq!(lines.len(), 3 + DOC_FILES.len() + 2);
    }

    #[test]
    fn test_continuation_lines_align_with_key() {
        let lines = requires_lines(&two_dependency_catalog().rpm_requirements());
        assert_eq!(
            lines,
            vec![
                "requires = python-dfdatetime >= 20160814",
                "           python-six >= 1.10",
            ]
        );
    }

    #[test]
    fn test_empty_catalog_omits_requires() {
        let lines = render(&sample_project(), &DependencyCatalog::new());
        assert!(lines.iter().all(|line| !line.starts_with("requires")));
        assert_eq!(lines[2], "packager = A <a@x.com>");
        assert_eq!(lines[lines.len() - 2], "build_requires = python-setuptools");
    }
}
