//! # Vendor Repository Installer
//!
//! Installs tools whose packages live behind a vendor apt repository
//! (Grafana, Jenkins). On Linux with apt detected, the bootstrap sequence
//! is: prerequisites, fetch the signing key, trust it (dearmored or copied
//! verbatim depending on the vendor), write the sources list, refresh the
//! index, install. There is no rollback if an intermediate step fails; the
//! error propagates and the caller logs it.
//!
//! On macOS/Windows the entry either maps to a plain package on the
//! detected manager (Grafana) or the operator is pointed at the official
//! route (Jenkins).

use crate::libs::command_runner::{CommandRunner, CommandSpec};
use crate::libs::error::InstallError;
use crate::libs::run_log::RunLog;
use crate::schemas::catalog::{AptRepository, CatalogEntry, TargetOs};
use crate::schemas::context::{PackageManager, RunContext};

pub fn install(
    entry: &CatalogEntry,
    repo: &AptRepository,
    ctx: &RunContext,
    runner: &CommandRunner,
    log: &RunLog,
) -> Result<(), InstallError> {
    if ctx.os == TargetOs::Linux {
        if ctx.package_manager != Some(PackageManager::Apt) {
            log.log(&format!(
                "{}: repository bootstrap is automated for apt only. {}",
                entry.name, repo.guidance
            ))?;
            return Ok(());
        }
        return bootstrap_apt_repository(entry, repo, runner, log);
    }

    // Off Linux the vendor repo does not apply; fall back to a plain
    // package where one exists.
    match (repo.other_os_package, ctx.package_manager) {
        (Some(package), Some(manager)) => {
            runner.run(&manager.install_spec(package), true)?;
            log.log(&format!("{} installed via {}.", entry.name, manager))?;
        }
        // A plain package exists but nothing on the host can install it;
        // surface that as the typed condition so the driver logs it.
        (Some(_), None) => {
            return Err(InstallError::PackageManagerUnavailable { os: ctx.os });
        }
        (None, _) => {
            log.log(&format!("{}: {}", entry.name, repo.guidance))?;
        }
    }
    Ok(())
}

fn bootstrap_apt_repository(
    entry: &CatalogEntry,
    repo: &AptRepository,
    runner: &CommandRunner,
    log: &RunLog,
) -> Result<(), InstallError> {
    log.log(&format!(
        "Installing {} via the vendor apt repository (requires sudo).",
        entry.name
    ))?;

    if !repo.prerequisites.is_empty() {
        let mut args: Vec<String> = vec!["apt-get".into(), "install".into(), "-y".into()];
        args.extend(repo.prerequisites.iter().map(|p| p.to_string()));
        runner.run(&CommandSpec::new("sudo", args), true)?;
    }

    // The key is fetched unprivileged into staging, then installed with
    // sudo, so curl never runs as root.
    let staged_key = format!("/tmp/{}.key", entry.name.to_lowercase().replace(' ', "-"));
    runner.run(
        &CommandSpec::new("curl", ["-fsSL", "-o", staged_key.as_str(), repo.key_url]),
        true,
    )?;
    if repo.dearmor {
        runner.run(
            &CommandSpec::new(
                "sudo",
                ["gpg", "--dearmor", "-o", repo.keyring_path, staged_key.as_str()],
            ),
            true,
        )?;
    } else {
        runner.run(
            &CommandSpec::new("sudo", ["cp", staged_key.as_str(), repo.keyring_path]),
            true,
        )?;
    }

    runner.run(
        &CommandSpec::new("sudo", ["tee", repo.sources_path])
            .with_stdin(format!("{}\n", repo.sources_line)),
        true,
    )?;
    if let Some(refresh) = PackageManager::Apt.refresh_spec() {
        runner.run(&refresh, true)?;
    }

    let mut args: Vec<String> = vec!["apt-get".into(), "install".into(), "-y".into()];
    args.extend(repo.packages.iter().map(|p| p.to_string()));
    runner.run(&CommandSpec::new("sudo", args), true)?;

    log.log(repo.post_note)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::catalog::Catalog;
    use crate::libs::command_runner::testing::ScriptedExecutor;
    use crate::libs::run_log::testing::MemorySink;
    use crate::schemas::catalog::Fallback;
    use std::sync::Arc;

    fn tool(name: &str) -> (&'static CatalogEntry, &'static AptRepository) {
        let entry = Catalog::builtin().get(name).unwrap();
        match &entry.fallback {
            Fallback::AptRepository(repo) => (entry, repo),
            _ => unreachable!("{name} is a repository-bootstrap tool"),
        }
    }

    fn ctx(os: TargetOs, pm: Option<PackageManager>) -> RunContext {
        RunContext {
            os,
            package_manager: pm,
            dry_run: false,
        }
    }

    #[test]
    fn grafana_apt_bootstrap_sequences_key_sources_refresh_install() {
        let (entry, repo) = tool("Grafana");
        let sink = Arc::new(MemorySink::default());
        let log = RunLog::with_sink(Box::new(sink.clone()));
        let exec = ScriptedExecutor::default();
        let runner = CommandRunner::new(&exec, &log, false);

        install(
            entry,
            repo,
            &ctx(TargetOs::Linux, Some(PackageManager::Apt)),
            &runner,
            &log,
        )
        .unwrap();

        let commands = exec.commands();
        assert!(commands[0].contains("apt-get install -y apt-transport-https gnupg"));
        assert!(commands[1].contains("curl -fsSL -o /tmp/grafana.key"));
        assert!(commands[2].contains("gpg --dearmor -o /etc/apt/trusted.gpg.d/grafana.gpg"));
        assert!(commands[3].contains("tee /etc/apt/sources.list.d/grafana.list"));
        assert!(commands[3].contains("deb https://packages.grafana.com/oss/deb stable main"));
        assert!(commands[4].contains("apt-get update -y"));
        assert!(commands[5].contains("apt-get install -y grafana"));
    }

    #[test]
    fn jenkins_key_is_installed_verbatim_not_dearmored() {
        let (entry, repo) = tool("Jenkins");
        let sink = Arc::new(MemorySink::default());
        let log = RunLog::with_sink(Box::new(sink.clone()));
        let exec = ScriptedExecutor::default();
        let runner = CommandRunner::new(&exec, &log, false);

        install(
            entry,
            repo,
            &ctx(TargetOs::Linux, Some(PackageManager::Apt)),
            &runner,
            &log,
        )
        .unwrap();

        let commands = exec.commands().join("\n");
        assert!(commands.contains("cp /tmp/jenkins.key /usr/share/keyrings/jenkins-keyring.asc"));
        assert!(!commands.contains("--dearmor"));
        assert!(commands.contains("apt-get install -y openjdk-17-jre jenkins"));
    }

    #[test]
    fn grafana_on_mac_uses_the_plain_brew_package() {
        let (entry, repo) = tool("Grafana");
        let sink = Arc::new(MemorySink::default());
        let log = RunLog::with_sink(Box::new(sink.clone()));
        let exec = ScriptedExecutor::default();
        let runner = CommandRunner::new(&exec, &log, false);

        install(
            entry,
            repo,
            &ctx(TargetOs::Mac, Some(PackageManager::Brew)),
            &runner,
            &log,
        )
        .unwrap();

        assert_eq!(exec.commands(), vec!["brew install grafana".to_string()]);
    }

    #[test]
    fn missing_package_manager_off_linux_is_a_typed_error() {
        let (entry, repo) = tool("Grafana");
        let sink = Arc::new(MemorySink::default());
        let log = RunLog::with_sink(Box::new(sink.clone()));
        let exec = ScriptedExecutor::default();
        let runner = CommandRunner::new(&exec, &log, false);

        let err = install(entry, repo, &ctx(TargetOs::Mac, None), &runner, &log).unwrap_err();

        assert!(matches!(
            err,
            InstallError::PackageManagerUnavailable { os: TargetOs::Mac }
        ));
        assert!(exec.commands().is_empty());
    }

    #[test]
    fn jenkins_off_linux_gets_guidance_only() {
        let (entry, repo) = tool("Jenkins");
        let sink = Arc::new(MemorySink::default());
        let log = RunLog::with_sink(Box::new(sink.clone()));
        let exec = ScriptedExecutor::default();
        let runner = CommandRunner::new(&exec, &log, false);

        install(
            entry,
            repo,
            &ctx(TargetOs::Windows, Some(PackageManager::Choco)),
            &runner,
            &log,
        )
        .unwrap();

        assert!(exec.commands().is_empty());
        assert!(sink.lines().join("\n").contains("official Docker image"));
    }

    #[test]
    fn non_apt_linux_host_is_not_bootstrapped() {
        let (entry, repo) = tool("Grafana");
        let sink = Arc::new(MemorySink::default());
        let log = RunLog::with_sink(Box::new(sink.clone()));
        let exec = ScriptedExecutor::default();
        let runner = CommandRunner::new(&exec, &log, false);

        install(
            entry,
            repo,
            &ctx(TargetOs::Linux, Some(PackageManager::Yum)),
            &runner,
            &log,
        )
        .unwrap();

        assert!(exec.commands().is_empty());
        assert!(
            sink.lines()
                .join("\n")
                .contains("automated for apt only")
        );
    }
}
