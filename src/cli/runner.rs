use std::io::Write;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nbreport::{ReportConfig, ReportGenerator, RunReport};

use super::args::CliArgs;
use super::errors::AppError;

/// Build the effective config: defaults, then the config file, then flags.
pub fn resolve_config(args: &CliArgs) -> Result<ReportConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_json_file(path).map_err(|source| AppError::Config {
            path: path.display().to_string(),
            source,
        })?,
        None => ReportConfig::default(),
    };

    if let Some(notebook) = &args.notebook {
        config.notebook = notebook.clone();
    }
    if let Some(report) = &args.report {
        config.report = report.clone();
    }
    if let Some(template) = &args.template {
        config.template = template.clone();
    }
    if let Some(program) = &args.program {
        config.program = program.clone();
    }
    if let Some(dir) = &args.working_dir {
        config.working_dir = Some(dir.clone());
    }
    if let Some(policy) = args.on_failure {
        config.on_failure = policy;
    }

    if config.template.trim().is_empty() {
        return Err(AppError::InvalidTemplate {
            template: config.template,
        });
    }

    Ok(config)
}

/// Run the pipeline. With `--summary`, the JSON summary is the only thing
/// written to `out`; an aborted run still prints the stages that ran.
pub fn execute<W: Write>(args: &CliArgs, out: &mut W) -> Result<RunReport, AppError> {
    let config = resolve_config(args)?;
    debug!("Effective config: {:?}", config);

    match ReportGenerator::new(config).run() {
        Ok(report) => {
            if args.summary {
                write_summary(out, &report)?;
            }
            info!(
                "Done (execute ok: {}, render ok: {})",
                report.execute.as_ref().is_some_and(|s| s.success),
                report.render.as_ref().is_some_and(|s| s.success)
            );
            Ok(report)
        }
        Err(err) => {
            if let (true, Some(partial)) = (args.summary, err.partial_report()) {
                write_summary(out, partial)?;
            }
            Err(err.into())
        }
    }
}

fn write_summary<W: Write>(out: &mut W, report: &RunReport) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, report).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        // stdout is reserved for --summary
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    execute(&args, &mut std::io::stdout().lock())?;
    Ok(())
}
