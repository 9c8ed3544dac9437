//! Pipeline wiring: list candidates, draw one, report it.

use crate::candidates::CandidateList;
use crate::config::RouletteConfig;
use crate::error::Result;
use crate::lister::{CommandSource, PackageSource};
use crate::reporter::Reporter;
use crate::sanity;
use crate::selector::{self, IndexSource, RandomSource};
use crate::types::Backend;
use std::io::Write;
use tracing::{debug, info};

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend: Backend,
    pub seed: Option<u64>,
    pub exclude: Vec<String>,
}

impl Settings {
    /// Resolve a merged config, detecting the backend when none is set.
    pub fn resolve(config: RouletteConfig) -> Result<Self> {
        let backend = match config.backend {
            Some(backend) => backend,
            None => sanity::detect_backend()?,
        };
        Ok(Self {
            backend,
            seed: config.seed,
            exclude: config.exclude,
        })
    }

    /// Seeded source if a seed was given, OS entropy otherwise.
    pub fn index_source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => {
                debug!("Using fixed seed {}", seed);
                RandomSource::from_seed(seed)
            }
            None => RandomSource::from_entropy(),
        }
    }

    /// Package source for the configured backend.
    pub fn package_source(&self) -> Box<dyn PackageSource> {
        match self.backend {
            Backend::Pacman => pacman_source(),
            backend => Box::new(CommandSource::new(backend)),
        }
    }
}

#[cfg(feature = "alpm")]
fn pacman_source() -> Box<dyn PackageSource> {
    Box::new(crate::alpm_source::AlpmSource::system())
}

#[cfg(not(feature = "alpm"))]
fn pacman_source() -> Box<dyn PackageSource> {
    Box::new(CommandSource::new(Backend::Pacman))
}

/// Candidate lister plus exclusions.
pub struct Roulette<P: PackageSource + ?Sized> {
    exclude: Vec<String>,
    source: Box<P>,
}

impl<P: PackageSource + ?Sized> Roulette<P> {
    pub fn new(source: Box<P>, exclude: Vec<String>) -> Self {
        Self { exclude, source }
    }

    /// Installable packages minus user exclusions.
    pub fn candidates(&self) -> Result<CandidateList> {
        let mut list = self.source.candidates()?;
        if !self.exclude.is_empty() {
            let before = list.len();
            list.exclude(&self.exclude);
            debug!("Excluded {} candidate(s)", before - list.len());
        }
        Ok(list)
    }

    /// Run the whole pipeline and return the chosen name.
    pub fn pick<S, W>(&self, rng: &mut S, out: W) -> Result<String>
    where
        S: IndexSource + ?Sized,
        W: Write,
    {
        let list = self.candidates()?;
        let chosen = selector::select(&list, rng)?;
        info!("Picked {} out of {} candidate(s)", chosen, list.len());

        Reporter::new(out).report(self.source.backend(), chosen)?;
        Ok(chosen.to_string())
    }

    /// Print all candidates instead of picking one.
    pub fn list_all<W: Write>(&self, out: W) -> Result<usize> {
        let list = self.candidates()?;
        Reporter::new(out).report_all(list.iter())?;
        Ok(list.len())
    }
}
