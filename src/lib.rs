//! pkgroulette library
//!
//! Lists the packages the host package manager knows about but has not
//! installed, draws one uniformly at random and reports it. Installation is
//! never performed.

#[cfg(feature = "alpm")]
pub mod alpm_source;
pub mod app;
pub mod candidates;
pub mod cli;
pub mod config;
pub mod error;
pub mod lister;
pub mod process_guard;
pub mod reporter;
pub mod sanity;
pub mod selector;
pub mod types;

// Re-export main types for convenience
#[cfg(feature = "alpm")]
pub use alpm_source::AlpmSource;
pub use app::{Roulette, Settings};
pub use candidates::CandidateList;
pub use config::RouletteConfig;
pub use error::{Result, RouletteError};
pub use lister::{CommandSource, PackageSource, candidate_name, extract_name, parse_listing};
pub use process_guard::CommandProcessGroup;
pub use reporter::{Reporter, install_preview};
pub use selector::{FixedIndex, IndexSource, RandomSource, select};
pub use types::Backend;
