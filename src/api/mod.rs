//! High-level library API: the `ReportGenerator` that executes a notebook and
//! renders it to HTML, plus the `generate_report` convenience entrypoint.
//! Prefer these over building `Invocation`s by hand.
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::invocation::Invocation;
use crate::core::params::ReportConfig;
use crate::error::{Error, Result};
use crate::io::process::{ProcessOutcome, ProcessRunner, SystemRunner};
use crate::types::{FailurePolicy, Stage};

/// Outcome of one pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageOutcome {
    pub stage: Stage,
    /// None when the tool could not be started or was killed by a signal
    pub exit_code: Option<i32>,
    pub success: bool,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

/// Summary of a full execute-then-render run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub on_failure: FailurePolicy,
    pub execute: Option<StageOutcome>,
    pub render: Option<StageOutcome>,
}

impl RunReport {
    /// True only when both stages ran and succeeded.
    pub fn succeeded(&self) -> bool {
        matches!(
            (&self.execute, &self.render),
            (Some(e), Some(r)) if e.success && r.success
        )
    }
}

pub struct ReportGenerator<R = SystemRunner> {
    config: ReportConfig,
    runner: R,
}

impl ReportGenerator<SystemRunner> {
    pub fn new(config: ReportConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: ProcessRunner> ReportGenerator<R> {
    pub fn with_runner(config: ReportConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Run the notebook in place so its cells carry fresh outputs.
    pub fn execute_notebook(&self) -> Result<StageOutcome> {
        into_result(self.attempt_execute())
    }

    /// Convert the notebook to HTML without input cells, using the configured template.
    pub fn render_html(&self) -> Result<StageOutcome> {
        into_result(self.attempt_render())
    }

    /// Execute, then render. Under `FailurePolicy::Ignore` both stages always
    /// run and the result is always `Ok`; under `Abort` the first failure is
    /// returned as `Error::Aborted`, carrying the stages that did run.
    pub fn run(&self) -> Result<RunReport> {
        let mut report = RunReport {
            on_failure: self.config.on_failure,
            execute: None,
            render: None,
        };

        let (executed, failure) = self.attempt_execute();
        let executed_ok = executed.success;
        report.execute = Some(executed);
        if let Some(cause) = failure {
            warn!("Skipping render: {}", cause);
            return Err(Error::aborted(report, cause));
        }
        if !executed_ok {
            warn!("Rendering anyway; the report may be stale or incomplete");
        }

        let (rendered, failure) = self.attempt_render();
        report.render = Some(rendered);
        if let Some(cause) = failure {
            return Err(Error::aborted(report, cause));
        }

        if report.succeeded() {
            info!("Report written: {:?}", self.config.report);
        }
        Ok(report)
    }

    fn attempt_execute(&self) -> (StageOutcome, Option<Error>) {
        info!("Executing notebook: {:?}", self.config.notebook);
        self.attempt(Invocation::execute(&self.config))
    }

    fn attempt_render(&self) -> (StageOutcome, Option<Error>) {
        info!(
            "Rendering {:?} -> {:?} (template: {})",
            self.config.notebook, self.config.report, self.config.template
        );
        self.attempt(Invocation::render(&self.config))
    }

    /// Runs one stage. The outcome is always recorded; the error is only
    /// returned when the failure policy says the run must stop.
    fn attempt(&self, invocation: Invocation) -> (StageOutcome, Option<Error>) {
        let stage = invocation.stage;
        let started_at = Utc::now();
        let clock = Instant::now();

        let (outcome, spawn_error) = match self.runner.run(&invocation) {
            Ok(outcome) => (outcome, None),
            Err(e) => {
                warn!("{} stage could not run: {}", stage, e);
                let outcome = ProcessOutcome {
                    code: None,
                    success: false,
                };
                (outcome, Some(e))
            }
        };

        let result = StageOutcome {
            stage,
            exit_code: outcome.code,
            success: outcome.success,
            started_at,
            elapsed_ms: whole_millis(clock.elapsed()),
        };

        if result.success {
            info!("{} stage finished in {} ms", stage, result.elapsed_ms);
            return (result, None);
        }

        match self.config.on_failure {
            FailurePolicy::Ignore => {
                warn!("{} stage failed (exit code {:?}); ignoring", stage, outcome.code);
                (result, None)
            }
            FailurePolicy::Abort => {
                let error = spawn_error.unwrap_or(Error::StageFailed {
                    stage,
                    code: outcome.code,
                });
                (result, Some(error))
            }
        }
    }
}

fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn into_result((outcome, failure): (StageOutcome, Option<Error>)) -> Result<StageOutcome> {
    match failure {
        Some(e) => Err(e),
        None => Ok(outcome),
    }
}

/// Run the full pipeline against the real `jupyter-nbconvert` (or the
/// configured program).
pub fn generate_report(config: &ReportConfig) -> Result<RunReport> {
    ReportGenerator::new(config.clone()).run()
}
