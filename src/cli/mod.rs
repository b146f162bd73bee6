//! Command Line Interface (CLI) layer for nbreport.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that merges flags with an optional
//! config file and drives the report pipeline.
//!
//! If you are embedding nbreport into another tool, use `nbreport::api`
//! directly instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
