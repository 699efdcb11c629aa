// Error taxonomy for the installer.
//
// The variants separate "a command ran and failed" (the usual trigger for a
// tool's fallback route) from "we could not even execute it" and from plain
// misuse, so callers can decide what to do without inspecting strings.

use std::io;

use thiserror::Error;

use crate::schemas::catalog::TargetOs;

#[derive(Debug, Error)]
pub enum InstallError {
    /// A checked command exited nonzero.
    #[error("command failed: {command} (rc={code})")]
    CommandFailed { command: String, code: i32 },

    /// The command could not be spawned or its I/O failed.
    #[error("failed to execute '{command}': {source}")]
    Execution {
        command: String,
        source: io::Error,
    },

    /// No supported package manager was found for the target OS.
    #[error("no supported package manager detected for {os}")]
    PackageManagerUnavailable { os: TargetOs },

    /// The named tool is not in the catalog.
    #[error("tool '{0}' is not present in the catalog")]
    UnsupportedTool(String),

    /// The audit log could not be written; this aborts the run.
    #[error("could not append to the install log: {0}")]
    LogWrite(#[from] io::Error),

    /// An interactive prompt could not be displayed or read.
    #[error("prompt failed: {0}")]
    Prompt(String),
}
