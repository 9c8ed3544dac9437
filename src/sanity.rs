//! Pre-flight checks for the runtime environment
//!
//! - Which package manager listing binaries are present in PATH
//! - Whether we run with root privileges (only affects the reported
//!   install command, nothing is ever installed)

use crate::error::{Result, RouletteError};
use crate::types::Backend;
use std::env;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::debug;

/// Check if a binary is available in PATH
pub fn binary_exists(name: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| is_executable(&dir.join(name)))
}

fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Check if running as root (EUID 0)
pub fn is_running_as_root() -> bool {
    nix::unistd::geteuid().is_root()
}

/// Pick the first backend whose listing binary is installed.
///
/// Probed in declaration order: apt, pacman, dnf.
pub fn detect_backend() -> Result<Backend> {
    detect_backend_with(binary_exists)
}

/// [`detect_backend`] with an injectable PATH probe.
pub fn detect_backend_with<F>(mut exists: F) -> Result<Backend>
where
    F: FnMut(&str) -> bool,
{
    for backend in Backend::iter() {
        let program = backend.listing_program();
        if exists(program) {
            debug!("Detected backend {} ({} found)", backend, program);
            return Ok(backend);
        }
        debug!("{} not found in PATH", program);
    }

    let probed: Vec<&str> = Backend::iter().map(|b| b.listing_program()).collect();
    Err(RouletteError::UnsupportedBackend(probed.join(", ")))
}
