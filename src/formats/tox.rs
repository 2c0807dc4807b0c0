//! tox test-matrix configuration (`tox.ini`).
//!
//! Dependencies are pulled in through `-rrequirements.txt`, so only the
//! project name is interpolated.

use crate::project::ProjectDefinition;

pub(super) const PATH: &str = "tox.ini";

pub(super) fn render(project: &ProjectDefinition) -> Vec<String> {
    let mut lines: Vec<String> = [
        "[tox]",
        "envlist = py2, py3",
        "",
        "[testenv]",
        "pip_pre = True",
        "setenv =",
        "    PYTHONPATH = {toxinidir}",
        "deps =",
        "    coverage",
        "    mock",
        "    pytest",
        "    -rrequirements.txt",
        "commands =",
        "    coverage erase",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect();

    lines.push(format!(
        "    coverage run --source={} --omit=\"*_test*,*__init__*,*test_lib*\" run_tests.py",
        project.name
    ));
    lines.push(String::new());
    lines
}
