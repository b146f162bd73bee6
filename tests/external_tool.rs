//! End-to-end runs against a stand-in `jupyter-nbconvert` shell script that
//! mimics the two calls: it rewrites the notebook on `--execute` and writes
//! an HTML file on render.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use nbreport::{Error, FailurePolicy, ReportConfig, ReportGenerator, Stage};

const STAND_IN: &str = r#"#!/bin/sh
if [ "$1" = "--execute" ]; then
    nb="$5"
    [ -f "$nb" ] || exit 1
    printf '{"cells": [{"outputs": ["42"]}]}\n' > "$nb"
    exit 0
fi
nb="$1"
out="$6"
template="$8"
[ -f "$nb" ] || exit 1
printf '<html data-template="%s"><body>%s</body></html>\n' "$template" "$(cat "$nb")" > "$out"
"#;

// Installed once, before any test spawns, so no forked child can hold the
// script open for writing when it is executed.
fn stand_in() -> &'static Path {
    static TOOL: OnceLock<(tempfile::TempDir, PathBuf)> = OnceLock::new();
    let (_dir, path) = TOOL.get_or_init(|| {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jupyter-nbconvert");
        fs::write(&path, STAND_IN).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        (dir, path)
    });
    path
}

fn config_in(dir: &Path) -> ReportConfig {
    ReportConfig::default()
        .with_program(stand_in().to_str().unwrap())
        .with_working_dir(dir)
}

#[test]
fn valid_notebook_produces_non_empty_report() {
    let work = tempfile::tempdir().unwrap();
    fs::write(work.path().join("analysis.ipynb"), r#"{"cells": []}"#).unwrap();

    let report = ReportGenerator::new(config_in(work.path())).run().unwrap();
    assert!(report.succeeded());

    let notebook = fs::read_to_string(work.path().join("analysis.ipynb")).unwrap();
    assert!(notebook.contains("outputs"));

    let html = fs::read_to_string(work.path().join("report.html")).unwrap();
    assert!(!html.is_empty());
    assert!(html.contains(r#"data-template="flowkey""#));
    assert!(html.contains("42"));
}

#[test]
fn missing_notebook_still_attempts_render_and_succeeds_under_ignore() {
    let work = tempfile::tempdir().unwrap();
    let config = config_in(work.path()).with_template("classic");

    let report = ReportGenerator::new(config).run().unwrap();
    let execute = report.execute.as_ref().unwrap();
    let render = report.render.as_ref().unwrap();
    assert_eq!(execute.exit_code, Some(1));
    assert_eq!(render.stage, Stage::Render);
    assert!(!render.success);
    assert!(!report.succeeded());
    assert!(!work.path().join("report.html").exists());
}

#[test]
fn missing_notebook_aborts_before_render_under_abort() {
    let work = tempfile::tempdir().unwrap();
    let config = config_in(work.path()).with_failure_policy(FailurePolicy::Abort);

    let err = ReportGenerator::new(config).run().unwrap_err();
    assert!(matches!(
        err.cause(),
        Error::StageFailed {
            stage: Stage::Execute,
            code: Some(1)
        }
    ));
    assert!(err.partial_report().unwrap().render.is_none());
    assert!(!work.path().join("report.html").exists());
}
