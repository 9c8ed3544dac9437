//! Reporting the chosen package.
//!
//! The name goes to the writer (stdout in the binary) as a single line.
//! The install command is only logged: pkgroulette is a dry run.

use crate::error::Result;
use crate::sanity;
use crate::types::Backend;
use std::io::Write;
use tracing::info;

/// Writes the selected package to an output stream.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print `package` followed by a newline and log what would be installed.
    pub fn report(&mut self, backend: Backend, package: &str) -> Result<()> {
        writeln!(self.out, "{}", package)?;
        self.out.flush()?;

        info!(
            "Dry run, not installing. Would run: {}",
            install_preview(backend, package, sanity::is_running_as_root())
        );
        Ok(())
    }

    /// Print every candidate, one per line.
    pub fn report_all<'a, I>(&mut self, packages: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for package in packages {
            writeln!(self.out, "{}", package)?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Shell form of the install command, prefixed with sudo when not root.
pub fn install_preview(backend: Backend, package: &str, as_root: bool) -> String {
    let command = backend.install_command(package).join(" ");
    if as_root {
        command
    } else {
        format!("sudo {}", command)
    }
}
