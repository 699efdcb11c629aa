// Package-manager detection and command templates.
//
// Detection is pure probing: per OS, try known executables in a fixed
// priority order and take the first one present. Nothing here installs a
// package manager that is missing.

use crate::libs::command_runner::CommandSpec;
use crate::libs::platform::executable_exists;
use crate::log_debug;
use crate::schemas::catalog::TargetOs;
use crate::schemas::context::PackageManager;

impl PackageManager {
    /// Probes the host for the package managers known for `os`, in priority
    /// order (Linux: apt-get, dnf, yum; macOS: brew; Windows: choco,
    /// winget), and returns the first one found.
    pub fn detect(os: TargetOs) -> Option<PackageManager> {
        let candidates: &[(&str, PackageManager)] = match os {
            TargetOs::Linux => &[
                ("apt-get", PackageManager::Apt),
                ("dnf", PackageManager::Dnf),
                ("yum", PackageManager::Yum),
            ],
            TargetOs::Mac => &[("brew", PackageManager::Brew)],
            TargetOs::Windows => &[
                ("choco", PackageManager::Choco),
                ("winget", PackageManager::Winget),
            ],
        };

        for (exe, manager) in candidates {
            if executable_exists(exe) {
                log_debug!("[PM] '{}' found, selecting {}", exe, manager);
                return Some(*manager);
            }
        }
        None
    }

    /// Command that installs `package` non-interactively. Linux managers go
    /// through sudo; brew refuses to run as root, choco/winget expect an
    /// elevated terminal instead.
    pub fn install_spec(&self, package: &str) -> CommandSpec {
        match self {
            PackageManager::Apt => {
                CommandSpec::new("sudo", ["apt-get", "install", "-y", package])
            }
            PackageManager::Dnf => CommandSpec::new("sudo", ["dnf", "install", "-y", package]),
            PackageManager::Yum => CommandSpec::new("sudo", ["yum", "install", "-y", package]),
            PackageManager::Brew => CommandSpec::new("brew", ["install", package]),
            PackageManager::Choco => CommandSpec::new("choco", ["install", "-y", package]),
            PackageManager::Winget => {
                CommandSpec::new("winget", ["install", "-e", "--id", package])
            }
        }
    }

    /// Command that refreshes the package index, where the manager has one.
    pub fn refresh_spec(&self) -> Option<CommandSpec> {
        match self {
            PackageManager::Apt => Some(CommandSpec::new("sudo", ["apt-get", "update", "-y"])),
            PackageManager::Dnf => Some(CommandSpec::new("sudo", ["dnf", "makecache", "-y"])),
            PackageManager::Yum => Some(CommandSpec::new("sudo", ["yum", "makecache", "-y"])),
            PackageManager::Brew | PackageManager::Choco | PackageManager::Winget => None,
        }
    }
}
