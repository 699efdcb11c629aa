// Types describing the static tool catalog.
//
// A `CatalogEntry` is everything the installer knows about one tool:
// human-facing metadata (description, recommended versions, upstream note),
// an optional generic package-manager mapping, and the fallback route to use
// when no package mapping exists or the package-manager attempt fails.
// Entries are built once at startup and never mutated; the actual table
// lives in `libs::catalog`.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// Operating system the operator is installing for. Doubles as the value
/// type of the `--os` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[value(rename_all = "verbatim")]
pub enum TargetOs {
    Linux,
    Mac,
    Windows,
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetOs::Linux => "Linux",
            TargetOs::Mac => "macOS",
            TargetOs::Windows => "Windows",
        };
        write!(f, "{name}")
    }
}

/// Recommended version per OS, with an OS-agnostic `all` default for tools
/// whose releases are not platform-specific.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecommendedVersions {
    pub linux: Option<&'static str>,
    pub mac: Option<&'static str>,
    pub windows: Option<&'static str>,
    pub all: Option<&'static str>,
}

impl RecommendedVersions {
    /// Same recommendation on every OS.
    pub const fn per_os(
        linux: &'static str,
        mac: &'static str,
        windows: &'static str,
    ) -> Self {
        Self {
            linux: Some(linux),
            mac: Some(mac),
            windows: Some(windows),
            all: None,
        }
    }

    /// A single OS-agnostic recommendation.
    pub const fn any(version: &'static str) -> Self {
        Self {
            linux: None,
            mac: None,
            windows: None,
            all: Some(version),
        }
    }

    pub fn for_os(&self, os: TargetOs) -> Option<&'static str> {
        match os {
            TargetOs::Linux => self.linux,
            TargetOs::Mac => self.mac,
            TargetOs::Windows => self.windows,
        }
    }
}

/// Package name to hand to a generic package-manager install.
///
/// Most tools ship under one name everywhere; Docker is the exception
/// (`docker.io` on Debian-family Linux, `docker` elsewhere).
#[derive(Debug, Clone, Copy, Serialize)]
pub enum PackageName {
    Uniform(&'static str),
    PerOs {
        linux: &'static str,
        mac: &'static str,
        windows: &'static str,
    },
}

impl PackageName {
    pub fn for_os(&self, os: TargetOs) -> &'static str {
        match self {
            PackageName::Uniform(name) => name,
            PackageName::PerOs {
                linux,
                mac,
                windows,
            } => match os {
                TargetOs::Linux => linux,
                TargetOs::Mac => mac,
                TargetOs::Windows => windows,
            },
        }
    }
}

/// Default connection details for server tools (Jenkins, Grafana, ELK).
/// Surfaced at the end of the run so the operator remembers to change them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConnectionDefaults {
    pub url: &'static str,
    pub username: &'static str,
    pub password: &'static str,
}

/// A release tarball that installs by download + extract + copy to
/// /usr/local/bin. `{version}` placeholders are substituted with the
/// operator-chosen version.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BinaryArtifact {
    pub tarball_url: &'static str,
    pub unpacked_dir: &'static str,
    pub binaries: &'static [&'static str],
}

/// A vendor apt repository to bootstrap before installing: prerequisites,
/// signing key, sources list, refresh, install. No rollback on a failed
/// intermediate step.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AptRepository {
    pub prerequisites: &'static [&'static str],
    pub key_url: &'static str,
    /// Where the trusted key lands on disk.
    pub keyring_path: &'static str,
    /// Whether the fetched key must be de-armored into a binary keyring.
    pub dearmor: bool,
    pub sources_line: &'static str,
    pub sources_path: &'static str,
    pub packages: &'static [&'static str],
    /// Plain package name to use on macOS/Windows instead of the apt route.
    pub other_os_package: Option<&'static str>,
    /// Logged after a successful install (start/first-login hints).
    pub post_note: &'static str,
    /// Logged when the apt route does not apply and there is no package.
    pub guidance: &'static str,
}

/// What to do for a tool once the generic package-manager attempt is
/// exhausted (or was never possible).
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Fallback {
    /// Fetch a release archive and copy its binaries into the system path.
    BinaryRelease(BinaryArtifact),
    /// Bootstrap a vendor apt repository, then install from it.
    AptRepository(AptRepository),
    /// Nothing automated: point the operator at the official route.
    Guidance(&'static str),
}

/// One tool in the catalog. Immutable after construction.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    /// Unique key, also the name shown in prompts.
    pub name: &'static str,
    pub description: &'static str,
    pub recommended: RecommendedVersions,
    /// Upstream "latest" note shown in step-through mode, if any.
    pub latest_note: Option<&'static str>,
    /// Generic package-manager mapping; `None` means "no generic package".
    pub package: Option<PackageName>,
    /// Service names to enable after a binary install (Linux/systemd).
    pub services: &'static [&'static str],
    pub connection: Option<ConnectionDefaults>,
    pub fallback: Fallback,
}

impl CatalogEntry {
    /// Default version shown in the override prompt: OS-specific
    /// recommendation, else the OS-agnostic one, else the literal "latest".
    pub fn default_version(&self, os: TargetOs) -> &'static str {
        self.recommended
            .for_os(os)
            .or(self.recommended.all)
            .unwrap_or("latest")
    }

    /// Package name to try with the detected package manager, if any.
    pub fn package_for(&self, os: TargetOs) -> Option<&'static str> {
        self.package.as_ref().map(|pkg| pkg.for_os(os))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(recommended: RecommendedVersions) -> CatalogEntry {
        CatalogEntry {
            name: "sample",
            description: "sample tool",
            recommended,
            latest_note: None,
            package: None,
            services: &[],
            connection: None,
            fallback: Fallback::Guidance("see the docs"),
        }
    }

    #[test]
    fn os_specific_recommendation_wins() {
        let e = entry(RecommendedVersions {
            linux: Some("1.2"),
            mac: None,
            windows: None,
            all: Some("9.9"),
        });
        assert_eq!(e.default_version(TargetOs::Linux), "1.2");
    }

    #[test]
    fn falls_back_to_os_agnostic_default() {
        let e = entry(RecommendedVersions::any("v3.12.0"));
        assert_eq!(e.default_version(TargetOs::Mac), "v3.12.0");
    }

    #[test]
    fn falls_back_to_literal_latest() {
        let e = entry(RecommendedVersions {
            linux: None,
            mac: None,
            windows: None,
            all: None,
        });
        assert_eq!(e.default_version(TargetOs::Windows), "latest");
    }

    #[test]
    fn per_os_package_names_resolve() {
        let pkg = PackageName::PerOs {
            linux: "docker.io",
            mac: "docker",
            windows: "docker",
        };
        assert_eq!(pkg.for_os(TargetOs::Linux), "docker.io");
        assert_eq!(pkg.for_os(TargetOs::Windows), "docker");
    }
}
