//! Crate-level error type and `Result` alias.
//! Covers spawning the external tool, stage failures under the abort policy,
//! and config file problems.
use thiserror::Error;

use crate::api::RunReport;
use crate::types::Stage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} stage failed ({})", describe_code(.code))]
    StageFailed { stage: Stage, code: Option<i32> },

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A full run stopped early; `report` holds the stages that did run.
    #[error("{cause}")]
    Aborted {
        report: Box<RunReport>,
        cause: Box<Error>,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl Error {
    pub fn config<E: std::fmt::Display>(e: E) -> Self {
        Error::Config(e.to_string())
    }

    pub fn aborted(report: RunReport, cause: Error) -> Self {
        Error::Aborted {
            report: Box::new(report),
            cause: Box::new(cause),
        }
    }

    /// The failure that stopped the run, looking through `Aborted`.
    pub fn cause(&self) -> &Error {
        match self {
            Error::Aborted { cause, .. } => cause.cause(),
            other => other,
        }
    }

    pub fn partial_report(&self) -> Option<&RunReport> {
        match self {
            Error::Aborted { report, .. } => Some(report.as_ref()),
            _ => None,
        }
    }
}
