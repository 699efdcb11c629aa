// Per-invocation run context.

use std::fmt;

use serde::Serialize;

use crate::schemas::catalog::TargetOs;

/// A package manager the installer knows how to drive. Detection and command
/// construction live in `libs::package_manager`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PackageManager {
    Apt,
    Dnf,
    Yum,
    Brew,
    Choco,
    Winget,
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
            PackageManager::Yum => "yum",
            PackageManager::Brew => "brew",
            PackageManager::Choco => "choco",
            PackageManager::Winget => "winget",
        };
        write!(f, "{name}")
    }
}

/// Everything resolved once at the start of a run and read-only thereafter.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunContext {
    pub os: TargetOs,
    pub package_manager: Option<PackageManager>,
    pub dry_run: bool,
}
