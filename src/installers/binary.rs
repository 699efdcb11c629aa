//! # Binary Release Installer
//!
//! Installs tools that ship as plain release tarballs (Prometheus and its
//! exporters): fetch the archive into a staging directory under /tmp,
//! extract it, copy the listed binaries into /usr/local/bin, then make a
//! best-effort attempt to enable the tool's systemd service. Every step is
//! an individual command-runner call, so each is logged and each is skipped
//! under dry-run. There is no rollback; a failed step propagates and the
//! caller decides whether the run continues.
//!
//! Automation is Linux-only. For other targets the operator is pointed at
//! the upstream releases page instead.

use crate::libs::command_runner::{CommandRunner, CommandSpec};
use crate::libs::error::InstallError;
use crate::libs::run_log::RunLog;
use crate::schemas::catalog::{BinaryArtifact, CatalogEntry, TargetOs};
use crate::schemas::context::RunContext;

pub fn install(
    entry: &CatalogEntry,
    artifact: &BinaryArtifact,
    version: &str,
    ctx: &RunContext,
    runner: &CommandRunner,
    log: &RunLog,
) -> Result<(), InstallError> {
    if ctx.os != TargetOs::Linux {
        log.log(&format!(
            "{}: binary installs are automated on Linux only; download a release from the upstream page and configure a service manually.",
            entry.name
        ))?;
        return Ok(());
    }

    let url = artifact.tarball_url.replace("{version}", version);
    let unpacked_dir = artifact.unpacked_dir.replace("{version}", version);
    let staging = staging_dir(entry.name);
    let archive_name = url.rsplit('/').next().unwrap_or("release.tar.gz");
    let archive = format!("{staging}/{archive_name}");

    log.log(&format!(
        "Downloading {} {} from {}",
        entry.name, version, url
    ))?;
    runner.run(&CommandSpec::new("mkdir", ["-p", staging.as_str()]), true)?;
    runner.run(
        &CommandSpec::new("curl", ["-fsSL", "-o", archive.as_str(), url.as_str()]),
        true,
    )?;
    runner.run(
        &CommandSpec::new("tar", ["-xzf", archive.as_str(), "-C", staging.as_str()]),
        true,
    )?;

    for binary in artifact.binaries {
        let source = format!("{staging}/{unpacked_dir}/{binary}");
        runner.run(
            &CommandSpec::new("sudo", ["cp", source.as_str(), "/usr/local/bin/"]),
            true,
        )?;
    }
    log.log(&format!(
        "{} binaries copied to /usr/local/bin",
        entry.name
    ))?;

    for service in entry.services {
        enable_service(service, runner, log)?;
    }
    Ok(())
}

/// Best-effort `systemctl enable --now`. Both calls are unchecked: the unit
/// may not exist yet, and a missing unit must not fail the install.
fn enable_service(service: &str, runner: &CommandRunner, log: &RunLog) -> Result<(), InstallError> {
    runner.run(
        &CommandSpec::new("sudo", ["systemctl", "daemon-reload"]),
        false,
    )?;
    let code = runner.run(
        &CommandSpec::new("sudo", ["systemctl", "enable", "--now", service]),
        false,
    )?;
    if code == 0 {
        log.log(&format!("Service '{service}' enabled and started."))?;
    } else {
        log.log(&format!(
            "Could not enable service '{service}' (rc={code}); create its systemd unit and start it manually."
        ))?;
    }
    Ok(())
}

fn staging_dir(tool_name: &str) -> String {
    let slug: String = tool_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("/tmp/{}-install", slug.trim_matches('-'))
}
