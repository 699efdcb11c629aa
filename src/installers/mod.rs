// Fallback installers, one module per strategy.
//
// Dispatch happens in `libs::tool_installer` based on the catalog entry's
// `Fallback` variant; everything here funnels its side effects through the
// command runner so dry-run and audit logging apply uniformly.

/// Release-tarball installs: download, extract, copy binaries into
/// /usr/local/bin, best-effort systemd enable.
pub(crate) mod binary;

/// Vendor apt-repository bootstraps: key, sources list, refresh, install.
pub(crate) mod repository;
