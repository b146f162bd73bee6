use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::FailurePolicy;

pub const DEFAULT_NOTEBOOK: &str = "analysis.ipynb";
pub const DEFAULT_REPORT: &str = "report.html";
pub const DEFAULT_TEMPLATE: &str = "flowkey";
pub const DEFAULT_PROGRAM: &str = "jupyter-nbconvert";

/// Report pipeline configuration, suitable for JSON config files.
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Notebook executed in place and then rendered; not checked for existence
    pub notebook: PathBuf,
    /// HTML output, overwritten on every run
    pub report: PathBuf,
    pub template: String,
    /// nbconvert executable, resolved through PATH when not absolute
    pub program: String,
    /// Working directory for both invocations; None keeps the current one
    pub working_dir: Option<PathBuf>,
    pub on_failure: FailurePolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            notebook: PathBuf::from(DEFAULT_NOTEBOOK),
            report: PathBuf::from(DEFAULT_REPORT),
            template: DEFAULT_TEMPLATE.to_string(),
            program: DEFAULT_PROGRAM.to_string(),
            working_dir: None,
            on_failure: FailurePolicy::Ignore,
        }
    }
}

impl ReportConfig {
    pub fn new(notebook: impl Into<PathBuf>, report: impl Into<PathBuf>) -> Self {
        Self {
            notebook: notebook.into(),
            report: report.into(),
            ..Default::default()
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(Error::config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
