//! Shared types and enums used across nbreport.
//! Includes the pipeline `Stage`, the `FailurePolicy` applied between stages,
//! and the `NotebookFormat` targets handed to nbconvert.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One step of the report pipeline.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Execute,
    Render,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Execute => write!(f, "execute"),
            Stage::Render => write!(f, "render"),
        }
    }
}

/// What the generator does when a stage does not succeed.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure and keep going; the run always reports success.
    #[default]
    Ignore,
    /// Skip the remaining stages and return the failure.
    Abort,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Ignore => write!(f, "ignore"),
            FailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

/// `--to` targets understood by nbconvert.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum NotebookFormat {
    Notebook,
    Html,
}

impl NotebookFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotebookFormat::Notebook => "notebook",
            NotebookFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for NotebookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
