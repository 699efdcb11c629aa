// Host probes.
//
// These query the machine the installer runs on, not the target OS the
// operator selected; they go straight through `std::process::Command`
// because they are read-only detection, not install side effects.

use std::process::{Command, Stdio};

use crate::log_debug;

/// Whether an executable can be spawned from PATH. A `--version` invocation
/// is the cheapest universally supported probe across the package managers
/// we care about.
pub fn executable_exists(program: &str) -> bool {
    let found = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok();
    log_debug!("[Platform] probe '{}': {}", program, found);
    found
}

/// Whether the current process has administrative rights: a successful
/// `net session` on Windows hosts, euid 0 (via `id -u`) elsewhere. The
/// probe follows the platform the installer runs on, never the
/// operator-selected target OS. Used only to warn early that package
/// installs may need sudo/admin; never to gate anything.
pub fn is_elevated() -> bool {
    if cfg!(target_os = "windows") {
        Command::new("net")
            .arg("session")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    } else {
        Command::new("id")
            .arg("-u")
            .stdin(Stdio::null())
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim() == "0")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The probe must track the host, so on a Unix host it has to agree with
    // a direct euid check no matter what target OS the operator picked.
    #[cfg(unix)]
    #[test]
    fn elevation_probe_follows_the_host_euid() {
        let euid_is_root = Command::new("id")
            .arg("-u")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim() == "0")
            .unwrap_or(false);
        assert_eq!(is_elevated(), euid_is_root);
    }
}
