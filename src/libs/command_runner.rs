// Structured command execution.
//
// Commands are specified as program + argument vector (plus an optional
// stdin payload for the few `tee`-style steps), never as a shell string, so
// nothing the operator types can smuggle shell metacharacters into a
// privileged command. The runner is the sole side-effecting primitive: it
// logs every command to the audit record, honors dry-run, and turns checked
// nonzero exits into typed errors.

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

use serde::Serialize;

use crate::libs::error::InstallError;
use crate::libs::run_log::RunLog;
use crate::log_debug;

/// A fully specified command: program, arguments, optional stdin payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<String>,
}

impl CommandSpec {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            stdin: None,
        }
    }

    /// Feed the given payload to the child's stdin (used for `sudo tee`).
    pub fn with_stdin(mut self, payload: impl Into<String>) -> Self {
        self.stdin = Some(payload.into());
        self
    }

    /// Human-readable rendering for the audit log. Arguments containing
    /// whitespace are single-quoted; a stdin payload is shown herestring
    /// style so the logged line documents the full effect.
    pub fn rendered(&self) -> String {
        let mut parts = vec![self.program.clone()];
        for arg in &self.args {
            if arg.chars().any(char::is_whitespace) {
                parts.push(format!("'{arg}'"));
            } else {
                parts.push(arg.clone());
            }
        }
        let mut line = parts.join(" ");
        if let Some(payload) = &self.stdin {
            line.push_str(&format!(" <<< '{}'", payload.trim_end()));
        }
        line
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered())
    }
}

/// Seam between the runner and the host: production code spawns real
/// processes, tests script exit codes and record what would have run.
pub trait ExecuteCommand {
    fn execute(&self, spec: &CommandSpec) -> Result<i32, InstallError>;
}

/// Spawns the command as a child process, inheriting stdout/stderr so the
/// operator sees package-manager output live.
pub struct ShellExecutor;

impl ExecuteCommand for ShellExecutor {
    fn execute(&self, spec: &CommandSpec) -> Result<i32, InstallError> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        command.stdin(if spec.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });

        let mut child = command.spawn().map_err(|source| InstallError::Execution {
            command: spec.rendered(),
            source,
        })?;

        if let Some(payload) = &spec.stdin {
            // Scope the handle so the pipe closes before we wait.
            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(payload.as_bytes())
                    .map_err(|source| InstallError::Execution {
                        command: spec.rendered(),
                        source,
                    })?;
            }
        }

        let status = child.wait().map_err(|source| InstallError::Execution {
            command: spec.rendered(),
            source,
        })?;
        Ok(status.code().unwrap_or(-1))
    }
}

/// Runs commands against an executor, with audit logging and dry-run.
pub struct CommandRunner<'a> {
    exec: &'a dyn ExecuteCommand,
    log: &'a RunLog,
    dry_run: bool,
}

impl<'a> CommandRunner<'a> {
    pub fn new(exec: &'a dyn ExecuteCommand, log: &'a RunLog, dry_run: bool) -> Self {
        Self { exec, log, dry_run }
    }

    /// Logs the command, then executes it (unless dry-run). With `check`
    /// set, a nonzero exit becomes `InstallError::CommandFailed`; otherwise
    /// the exit code is returned as-is.
    pub fn run(&self, spec: &CommandSpec, check: bool) -> Result<i32, InstallError> {
        self.log.log(&format!("CMD: {spec}"))?;
        if self.dry_run {
            self.log.log("(dry-run) - not executing")?;
            return Ok(0);
        }

        let code = self.exec.execute(spec)?;
        log_debug!("[Runner] '{}' exited with rc={}", spec.program, code);
        if check && code != 0 {
            return Err(InstallError::CommandFailed {
                command: spec.rendered(),
                code,
            });
        }
        Ok(code)
    }
}
