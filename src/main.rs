//! nbreport CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the execute and render
//! stages, and exit. With the default failure policy the exit status is 0 even
//! when nbconvert fails; `--on-failure abort` makes failures exit non-zero.
//! For programmatic use, prefer the library API (`nbreport::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
