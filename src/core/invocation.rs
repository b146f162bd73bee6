//! Argument construction for the two nbconvert calls. Nothing here spawns a
//! process; `io::process` takes an `Invocation` and runs it.
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use crate::core::params::ReportConfig;
use crate::types::{NotebookFormat, Stage};

/// A fully resolved external command: program, argv and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub stage: Stage,
    pub program: String,
    pub args: Vec<OsString>,
    pub working_dir: Option<PathBuf>,
}

impl Invocation {
    /// `<program> --execute --inplace --to notebook <notebook>`
    pub fn execute(config: &ReportConfig) -> Self {
        let args = vec![
            OsString::from("--execute"),
            OsString::from("--inplace"),
            OsString::from("--to"),
            OsString::from(NotebookFormat::Notebook.as_str()),
            config.notebook.clone().into_os_string(),
        ];
        Self::for_stage(Stage::Execute, config, args)
    }

    /// `<program> <notebook> --to html --no-input --output <report> --template <template>`
    pub fn render(config: &ReportConfig) -> Self {
        let args = vec![
            config.notebook.clone().into_os_string(),
            OsString::from("--to"),
            OsString::from(NotebookFormat::Html.as_str()),
            OsString::from("--no-input"),
            OsString::from("--output"),
            config.report.clone().into_os_string(),
            OsString::from("--template"),
            OsString::from(&config.template),
        ];
        Self::for_stage(Stage::Render, config, args)
    }

    fn for_stage(stage: Stage, config: &ReportConfig, args: Vec<OsString>) -> Self {
        Self {
            stage,
            program: config.program.clone(),
            args,
            working_dir: config.working_dir.clone(),
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(inv: &Invocation) -> Vec<String> {
        inv.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn execute_args_are_exact() {
        let inv = Invocation::execute(&ReportConfig::default());
        assert_eq!(inv.stage, Stage::Execute);
        assert_eq!(inv.program, "jupyter-nbconvert");
        assert_eq!(
            args_of(&inv),
            ["--execute", "--inplace", "--to", "notebook", "analysis.ipynb"]
        );
    }

    #[test]
    fn render_args_are_exact() {
        let inv = Invocation::render(&ReportConfig::default());
        assert_eq!(inv.stage, Stage::Render);
        assert_eq!(
            args_of(&inv),
            [
                "analysis.ipynb",
                "--to",
                "html",
                "--no-input",
                "--output",
                "report.html",
                "--template",
                "flowkey",
            ]
        );
    }

    #[test]
    fn overrides_flow_into_both_invocations() {
        let config = ReportConfig::new("q3.ipynb", "q3.html")
            .with_template("minimal")
            .with_working_dir("/data");
        let exec = Invocation::execute(&config);
        let render = Invocation::render(&config);
        assert_eq!(args_of(&exec).last().map(String::as_str), Some("q3.ipynb"));
        assert_eq!(args_of(&render)[5], "q3.html");
        assert_eq!(args_of(&render)[7], "minimal");
        assert_eq!(exec.working_dir, Some(PathBuf::from("/data")));
        assert_eq!(render.working_dir, Some(PathBuf::from("/data")));
    }

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let config = ReportConfig::new("my analysis.ipynb", "report.html");
        let shown = Invocation::execute(&config).to_string();
        assert_eq!(
            shown,
            "jupyter-nbconvert --execute --inplace --to notebook 'my analysis.ipynb'"
        );
    }

    #[test]
    fn command_carries_program_and_args() {
        let inv = Invocation::render(&ReportConfig::default());
        let cmd = inv.command();
        assert_eq!(cmd.get_program(), "jupyter-nbconvert");
        assert_eq!(cmd.get_args().count(), 8);
        assert_eq!(cmd.get_current_dir(), None);
    }
}
