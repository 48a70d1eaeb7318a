//! External tool invocation.
//!
//! All raster work is done by the GDAL command-line utilities and `gsutil`.
//! Commands are described by `ToolCommand` and executed through a `ToolRunner`,
//! so the orchestration code can be driven by a recording runner in tests.
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Error, Result};

/// A program plus its arguments. Arguments are passed verbatim, no shell involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl std::fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What to do with the child's standard output
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StdoutMode {
    Inherit,
    Discard,
    Capture,
}

/// Exit code (None when killed by a signal) and captured stdout, if requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub code: Option<i32>,
    pub stdout: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait ToolRunner {
    /// Run `cmd` to completion. Only a failure to start the process is an error here.
    fn run(&mut self, cmd: &ToolCommand, stdout: StdoutMode) -> Result<ToolOutput>;
}

/// Runs commands as child processes of this one.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&mut self, cmd: &ToolCommand, stdout: StdoutMode) -> Result<ToolOutput> {
        debug!("Running: {}", cmd);
        let mut command = Command::new(&cmd.program);
        command.args(&cmd.args);
        let spawn_err = |source| Error::CommandSpawn {
            program: cmd.program.clone(),
            source,
        };
        match stdout {
            StdoutMode::Capture => {
                let out = command
                    .stderr(Stdio::inherit())
                    .output()
                    .map_err(spawn_err)?;
                Ok(ToolOutput {
                    code: out.status.code(),
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                })
            }
            StdoutMode::Inherit | StdoutMode::Discard => {
                if stdout == StdoutMode::Discard {
                    command.stdout(Stdio::null());
                }
                let status = command.status().map_err(spawn_err)?;
                Ok(ToolOutput {
                    code: status.code(),
                    stdout: String::new(),
                })
            }
        }
    }
}

/// Run a command whose failure aborts the whole run.
pub fn check_call<R: ToolRunner + ?Sized>(
    runner: &mut R,
    cmd: &ToolCommand,
    stdout: StdoutMode,
) -> Result<ToolOutput> {
    let out = runner.run(cmd, stdout)?;
    if !out.success() {
        return Err(Error::CommandFailed {
            program: cmd.program.clone(),
            code: out.code,
        });
    }
    Ok(out)
}

/// Checked call returning captured stdout
pub fn check_output<R: ToolRunner + ?Sized>(runner: &mut R, cmd: &ToolCommand) -> Result<String> {
    Ok(check_call(runner, cmd, StdoutMode::Capture)?.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRunner(Option<i32>);

    impl ToolRunner for FixedRunner {
        fn run(&mut self, _cmd: &ToolCommand, _stdout: StdoutMode) -> Result<ToolOutput> {
            Ok(ToolOutput {
                code: self.0,
                stdout: "gs://b/x.tar.gz\n".to_string(),
            })
        }
    }

    #[test]
    fn display_joins_program_and_args() {
        let cmd = ToolCommand::new("gdal_translate")
            .arg("-ot")
            .arg("Int16")
            .args(["a.vrt", "b.vrt"]);
        assert_eq!(cmd.to_string(), "gdal_translate -ot Int16 a.vrt b.vrt");
    }

    #[test]
    fn check_call_rejects_non_zero_exit() {
        let cmd = ToolCommand::new("gsutil").arg("ls");
        let err = check_call(&mut FixedRunner(Some(1)), &cmd, StdoutMode::Discard).unwrap_err();
        assert!(matches!(err, Error::CommandFailed { code: Some(1), .. }));

        let err = check_call(&mut FixedRunner(None), &cmd, StdoutMode::Discard).unwrap_err();
        assert!(matches!(err, Error::CommandFailed { code: None, .. }));
    }

    #[test]
    fn check_output_returns_stdout() {
        let cmd = ToolCommand::new("gsutil").arg("ls");
        let out = check_output(&mut FixedRunner(Some(0)), &cmd).unwrap();
        assert_eq!(out, "gs://b/x.tar.gz\n");
    }

    #[test]
    fn system_runner_reports_missing_program() {
        let cmd = ToolCommand::new("definitely-not-an-installed-tool-7f3a");
        let err = SystemRunner.run(&cmd, StdoutMode::Discard).unwrap_err();
        assert!(matches!(err, Error::CommandSpawn { .. }));
    }
}
