//! Type-safe package manager backends
//!
//! Each backend knows which command lists its packages and which command a
//! real (non dry-run) install would use. Parsing of the listing output lives
//! in [`crate::lister`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Host package manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Backend {
    /// Debian, Ubuntu and derivatives
    Apt,
    /// Arch Linux and derivatives
    Pacman,
    /// Fedora, RHEL and derivatives
    Dnf,
}

impl Backend {
    /// Program that lists every package the manager knows about
    pub fn listing_program(&self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Pacman => "pacman",
            Self::Dnf => "dnf",
        }
    }

    /// Arguments passed to [`Backend::listing_program`]
    pub fn listing_args(&self) -> &'static [&'static str] {
        match self {
            Self::Apt => &["list"],
            Self::Pacman => &["-Sl"],
            // Both sections: installed records mark names to skip
            Self::Dnf => &["list", "--quiet"],
        }
    }

    /// Human-readable listing command, used in logs and diagnostics
    pub fn listing_command(&self) -> String {
        let mut parts = vec![self.listing_program()];
        parts.extend_from_slice(self.listing_args());
        parts.join(" ")
    }

    /// Command a real run would use to install `package`.
    ///
    /// Only ever reported, never executed.
    pub fn install_command(&self, package: &str) -> Vec<String> {
        let base: &[&str] = match self {
            Self::Apt => &["apt-get", "install", "-y"],
            Self::Pacman => &["pacman", "-S", "--noconfirm"],
            Self::Dnf => &["dnf", "install", "-y"],
        };
        base.iter()
            .map(|s| (*s).to_string())
            .chain(std::iter::once(package.to_string()))
            .collect()
    }
}
