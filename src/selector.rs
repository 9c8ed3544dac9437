//! Uniform random selection over the candidate list.
//!
//! The random source is always passed in explicitly. Production code uses
//! [`RandomSource::from_entropy`]; tests and reproducible runs use a seed
//! or a [`FixedIndex`].

use crate::candidates::CandidateList;
use crate::error::{Result, RouletteError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Source of index draws.
pub trait IndexSource {
    /// Draw an index in `0..upper`. `upper` is never zero.
    fn draw(&mut self, upper: usize) -> usize;
}

/// Pseudo-random index source backed by [`StdRng`].
///
/// Not cryptographically meaningful; uniformity is all that matters.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source: the same seed always yields the same draws.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexSource for RandomSource {
    fn draw(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

/// Always draws the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn draw(&mut self, _upper: usize) -> usize {
        self.0
    }
}

/// Pick one candidate with a single draw from `source`.
pub fn select<'a, S>(candidates: &'a CandidateList, source: &mut S) -> Result<&'a str>
where
    S: IndexSource + ?Sized,
{
    let len = candidates.len();
    if len == 0 {
        return Err(RouletteError::EmptyCandidateSet);
    }

    let index = source.draw(len);
    let chosen = candidates
        .get(index)
        .ok_or(RouletteError::IndexOutOfRange { index, len })?;

    debug!("Drew index {} of {}: {}", index, len, chosen);
    Ok(chosen)
}
