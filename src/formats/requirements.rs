//! pip requirements file (`requirements.txt`).

use crate::dependencies::DependencyCatalog;

pub(super) const PATH: &str = "requirements.txt";

/// Pinned bootstrap requirement, always the first line.
const BOOTSTRAP: &str = "pip >= 7.0.0";

pub(super) fn render(catalog: &DependencyCatalog) -> Vec<String> {
    let mut lines = vec![BOOTSTRAP.to_string()];
    lines.extend(catalog.pip_requirements());
    lines
}
