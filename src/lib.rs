#![doc = r#"
nbreport — execute a Jupyter notebook in place and render it to a templated HTML report.

The pipeline has two stages, both delegated to `jupyter-nbconvert`:

1. `jupyter-nbconvert --execute --inplace --to notebook analysis.ipynb`
2. `jupyter-nbconvert analysis.ipynb --to html --no-input --output report.html --template flowkey`

The library builds those invocations from a [`ReportConfig`], runs them one after the
other, and reports the outcome of each stage. It powers the `nbreport` CLI and can be
embedded in your own tooling.

Quick start
-----------
```rust,no_run
use nbreport::{generate_report, ReportConfig};

fn main() -> nbreport::Result<()> {
    let report = generate_report(&ReportConfig::default())?;
    if !report.succeeded() {
        eprintln!("report may be stale; see logs");
    }
    Ok(())
}
```

Failure policy
--------------
By default ([`FailurePolicy::Ignore`]) a failing stage is logged and the pipeline keeps
going: the render stage runs even when execution failed, and `run` returns `Ok`.
[`FailurePolicy::Abort`] stops at the first failing stage and returns [`Error::Aborted`],
which carries the partial [`RunReport`] and the cause: [`Error::StageFailed`], or
[`Error::Spawn`] when the tool could not be started.

```rust,no_run
use nbreport::{Error, FailurePolicy, ReportConfig, ReportGenerator};

fn main() {
    let config = ReportConfig::new("weekly.ipynb", "weekly.html")
        .with_failure_policy(FailurePolicy::Abort);

    if let Err(err) = ReportGenerator::new(config).run() {
        match err.cause() {
            Error::StageFailed { stage, code } => eprintln!("{stage} failed: {code:?}"),
            other => eprintln!("error: {other}"),
        }
        if let Some(partial) = err.partial_report() {
            eprintln!("rendered: {}", partial.render.is_some());
        }
    }
}
```

Testing without nbconvert
-------------------------
[`ReportGenerator::with_runner`] accepts any [`ProcessRunner`], so the argument
construction and stage sequencing can be exercised without spawning real processes.

Useful modules
--------------
- [`api`] — `ReportGenerator` and run summaries.
- [`core`] — configuration and argument construction.
- [`io`] — process spawning.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::invocation::Invocation;
pub use crate::core::params::ReportConfig;
pub use error::{Error, Result};
pub use types::{FailurePolicy, NotebookFormat, Stage};

pub use io::{ProcessOutcome, ProcessRunner, SystemRunner};

pub use api::{ReportGenerator, RunReport, StageOutcome, generate_report};
