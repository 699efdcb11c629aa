// Per-tool installation orchestration.
//
// For one tool name: resolve it against the catalog (an unknown name is a
// typed error, caught by the driver like any other per-tool failure),
// resolve the default version and offer an override, try the generic
// package-manager route when both a package mapping and a detected manager
// exist, and on failure fall through to the entry's fallback strategy. A
// failed package-manager attempt is an expected branch, not an abort; only
// errors from the fallback itself (or from the audit log / prompts)
// propagate to the driver, which catches them per tool.

use crate::installers::{binary, repository};
use crate::libs::catalog::Catalog;
use crate::libs::command_runner::CommandRunner;
use crate::libs::error::InstallError;
use crate::libs::prompts::Prompter;
use crate::libs::run_log::RunLog;
use crate::log_debug;
use crate::schemas::catalog::Fallback;
use crate::schemas::context::RunContext;

pub fn install_tool(
    name: &str,
    catalog: &Catalog,
    ctx: &RunContext,
    runner: &CommandRunner,
    log: &RunLog,
    prompter: &mut dyn Prompter,
) -> Result<(), InstallError> {
    let entry = catalog.require(name)?;
    log.log(&format!(
        "Preparing to install {} - {}",
        entry.name, entry.description
    ))?;

    let version = prompter.version(entry.name, entry.default_version(ctx.os))?;
    log_debug!(
        "[Installer] '{}' resolved version: {}",
        entry.name,
        version
    );

    if let (Some(package), Some(manager)) = (entry.package_for(ctx.os), ctx.package_manager) {
        log.log(&format!(
            "Installing {} via {} as package '{}' (version hint: {})",
            entry.name, manager, package, version
        ))?;
        match runner.run(&manager.install_spec(package), true) {
            Ok(_) => {
                log.log(&format!(
                    "{} installation attempted via package manager.",
                    entry.name
                ))?;
                return Ok(());
            }
            Err(err @ (InstallError::CommandFailed { .. } | InstallError::Execution { .. })) => {
                // Expected trigger for the fallback route, never fatal.
                log.log(&format!(
                    "Package manager install failed for {}: {}. Trying the fallback route.",
                    entry.name, err
                ))?;
            }
            Err(other) => return Err(other),
        }
    }

    match &entry.fallback {
        Fallback::BinaryRelease(artifact) => {
            binary::install(entry, artifact, &version, ctx, runner, log)
        }
        Fallback::AptRepository(repo) => repository::install(entry, repo, ctx, runner, log),
        Fallback::Guidance(message) => {
            log.log(&format!("{}: {}", entry.name, message))?;
            Ok(())
        }
    }
}
