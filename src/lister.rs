//! Candidate listing: query the package manager and parse its output.
//!
//! The query runs the backend's listing command once and reads its stdout.
//! Each record is reduced to a bare package name; header lines, notices and
//! already-installed packages are discarded. Output order is preserved.

use crate::candidates::CandidateList;
use crate::error::{Result, RouletteError};
use crate::process_guard::CommandProcessGroup;
use crate::types::Backend;
use std::collections::HashSet;
use std::process::Command;
use tracing::{debug, info};

/// Anything that can produce the list of installable packages.
pub trait PackageSource {
    /// Backend whose packages this source lists
    fn backend(&self) -> Backend;

    /// Return every not-yet-installed package, in source order
    fn candidates(&self) -> Result<CandidateList>;
}

/// Lists packages by running the backend's listing command.
#[derive(Debug, Clone)]
pub struct CommandSource {
    backend: Backend,
}

impl CommandSource {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Run the listing command and return its raw stdout.
    pub fn raw_listing(&self) -> Result<String> {
        let program = self.backend.listing_program();
        debug!("Running listing command: {}", self.backend.listing_command());

        let output = Command::new(program)
            .args(self.backend.listing_args())
            .env("LC_ALL", "C")
            .in_new_process_group()
            .output()
            .map_err(|e| {
                RouletteError::listing_unavailable(
                    self.backend,
                    format!("failed to run {}: {}", program, e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("{} exited with {}", program, output.status),
                msg => format!("{} exited with {}: {}", program, output.status, msg),
            };
            return Err(RouletteError::listing_unavailable(self.backend, reason));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl PackageSource for CommandSource {
    fn backend(&self) -> Backend {
        self.backend
    }

    fn candidates(&self) -> Result<CandidateList> {
        let raw = self.raw_listing()?;
        let list = parse_listing(self.backend, raw.lines());
        info!(
            "{} listed {} uninstalled package(s)",
            self.backend.listing_command(),
            list.len()
        );
        Ok(list)
    }
}

/// Parse listing output into candidates, skipping headers and installed packages.
///
/// A name is dropped if any of its records is installed, so an installed
/// amd64 package does not come back through its i386 record.
pub fn parse_listing<'a, I>(backend: Backend, lines: I) -> CandidateList
where
    I: IntoIterator<Item = &'a str>,
{
    let lines: Vec<&str> = lines.into_iter().collect();
    let installed: HashSet<&str> = lines
        .iter()
        .filter(|line| is_installed(backend, line))
        .filter_map(|line| extract_name(backend, line))
        .collect();

    let mut list = CandidateList::new();
    let mut skipped = 0usize;

    for line in &lines {
        match candidate_name(backend, line) {
            Some(name) if !installed.contains(name) => {
                list.push(name);
            }
            _ => skipped += 1,
        }
    }

    debug!(
        "Parsed {} candidate(s), {} installed name(s), skipped {} line(s)",
        list.len(),
        installed.len(),
        skipped
    );
    list
}

/// Name of the package in `line` if it is an installable record.
///
/// Returns `None` for blank lines, headers, notices and installed packages.
pub fn candidate_name(backend: Backend, line: &str) -> Option<&str> {
    if line.trim().is_empty() || is_installed(backend, line) {
        return None;
    }
    extract_name(backend, line)
}

/// Package name with version and architecture qualifiers stripped.
///
/// Unlike [`candidate_name`] this ignores the installed marker.
pub fn extract_name(backend: Backend, line: &str) -> Option<&str> {
    match backend {
        Backend::Apt => apt_name(line),
        Backend::Pacman => pacman_name(line),
        Backend::Dnf => dnf_name(line),
    }
}

fn is_installed(backend: Backend, line: &str) -> bool {
    match backend {
        // [installed], [installed,automatic], [installed,local], [upgradable from: ...]
        Backend::Apt => line.contains("[installed") || line.contains("[upgradable"),
        // [installed] or [installed: 1.2-3] when the local version differs
        Backend::Pacman => line.contains("[installed"),
        // Repo column of installed packages starts with '@'
        Backend::Dnf => line
            .split_whitespace()
            .nth(2)
            .is_some_and(|repo| repo.starts_with('@')),
    }
}

/// `curl/stable,now 7.88.1-10 amd64` -> `curl`
fn apt_name(line: &str) -> Option<&str> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let record = line.trim_end();
    if record.starts_with("Listing...") || record.starts_with("WARNING:") {
        return None;
    }
    let (name, _qualifiers) = record.split_once('/')?;
    valid_name(name)
}

/// `core curl 8.0.1-1` -> `curl`
fn pacman_name(line: &str) -> Option<&str> {
    let mut fields = line.split_whitespace();
    let repo = fields.next()?;
    // "warning: database file for 'core' does not exist"
    if repo.ends_with(':') {
        return None;
    }
    let name = fields.next()?;
    // A record always carries a version column
    fields.next()?;
    valid_name(name)
}

/// `curl.x86_64  7.88.1-1.fc38  updates` -> `curl`
fn dnf_name(line: &str) -> Option<&str> {
    // Wrapped continuation of the previous record
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let record = line.trim_end();
    if record.ends_with("Packages")
        || record.starts_with("Last metadata expiration")
        || record.starts_with("Error:")
    {
        return None;
    }
    let first = record.split_whitespace().next()?;
    let (name, _arch) = first.rsplit_once('.')?;
    valid_name(name)
}

fn valid_name(name: &str) -> Option<&str> {
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        None
    } else {
        Some(name)
    }
}
