//! Pacman candidates read straight from libalpm
//!
//! Instead of running `pacman -Sl` and parsing stdout, this source opens the
//! sync databases configured in pacman.conf and keeps every package that has
//! no entry in the local database. Only reads are performed; no transaction
//! is ever initialized.

use crate::candidates::CandidateList;
use crate::error::{Result, RouletteError};
use crate::lister::PackageSource;
use crate::types::Backend;
use alpm::{Alpm, LogLevel, SigLevel};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default pacman configuration on a running system
const PACMAN_CONF: &str = "/etc/pacman.conf";

/// Package source backed by the ALPM sync and local databases.
#[derive(Debug, Clone)]
pub struct AlpmSource {
    conf_path: PathBuf,
}

impl AlpmSource {
    /// Source for the live system, configured by `/etc/pacman.conf`.
    pub fn system() -> Self {
        Self::from_pacman_conf(PACMAN_CONF)
    }

    pub fn from_pacman_conf<P: AsRef<Path>>(conf_path: P) -> Self {
        Self {
            conf_path: conf_path.as_ref().to_path_buf(),
        }
    }

    /// Initialize ALPM and register every sync database from pacman.conf.
    fn open(&self) -> Result<Alpm> {
        let conf = pacmanconf::Config::from_file(&self.conf_path).map_err(|e| {
            unavailable(format!(
                "failed to parse {}: {}",
                self.conf_path.display(),
                e
            ))
        })?;

        let mut handle = Alpm::new(conf.root_dir.as_str(), conf.db_path.as_str()).map_err(|e| {
            unavailable(format!(
                "failed to initialize ALPM with root={}, db_path={}: {}",
                conf.root_dir, conf.db_path, e
            ))
        })?;
        handle.set_log_cb((), log_cb);

        for repo in &conf.repos {
            handle
                .register_syncdb_mut(repo.name.clone(), SigLevel::USE_DEFAULT)
                .map_err(|e| unavailable(format!("failed to register sync db {}: {}", repo.name, e)))?;
            debug!("Registered sync db: {}", repo.name);
        }

        Ok(handle)
    }
}

impl PackageSource for AlpmSource {
    fn backend(&self) -> Backend {
        Backend::Pacman
    }

    fn candidates(&self) -> Result<CandidateList> {
        let handle = self.open()?;
        let local = handle.localdb();
        let mut list = CandidateList::new();

        for db in handle.syncdbs() {
            let mut added = 0usize;
            for pkg in db.pkgs() {
                if local.pkg(pkg.name()).is_err() && list.push(pkg.name()) {
                    added += 1;
                }
            }
            debug!("{}: {} uninstalled package(s)", db.name(), added);
        }

        info!("ALPM listed {} uninstalled package(s)", list.len());
        Ok(list)
    }
}

fn unavailable(reason: String) -> RouletteError {
    RouletteError::listing_unavailable(Backend::Pacman, reason)
}

/// Routes ALPM log messages into tracing.
fn log_cb(level: LogLevel, msg: &str, _: &mut ()) {
    // ALPM messages often have trailing newlines
    let msg = msg.trim_end();

    if level.contains(LogLevel::ERROR) {
        tracing::error!("[ALPM] {}", msg);
    } else if level.contains(LogLevel::WARNING) {
        tracing::warn!("[ALPM] {}", msg);
    } else if level.contains(LogLevel::FUNCTION) {
        tracing::trace!("[ALPM] {}", msg);
    } else {
        tracing::debug!("[ALPM] {}", msg);
    }
}
