use clap::Parser;
use std::path::PathBuf;

use nbreport::FailurePolicy;

#[derive(Parser, Debug)]
#[command(
    name = "nbreport",
    version,
    about = "Execute a notebook in place, then render it to a templated HTML report"
)]
pub struct CliArgs {
    /// Notebook to execute and render [default: analysis.ipynb]
    #[arg(short, long)]
    pub notebook: Option<PathBuf>,

    /// HTML report to write [default: report.html]
    #[arg(short = 'o', long)]
    pub report: Option<PathBuf>,

    /// nbconvert template name [default: flowkey]
    #[arg(short, long)]
    pub template: Option<String>,

    /// nbconvert executable [default: jupyter-nbconvert]
    #[arg(long)]
    pub program: Option<String>,

    /// Working directory for both nbconvert calls
    #[arg(short = 'C', long)]
    pub working_dir: Option<PathBuf>,

    /// What to do when a stage fails (ignore keeps going and exits 0)
    #[arg(long, value_enum)]
    pub on_failure: Option<FailurePolicy>,

    /// JSON config file; flags given on the command line take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON summary of both stages to stdout
    #[arg(long, default_value_t = false)]
    pub summary: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
