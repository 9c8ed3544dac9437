//! Error handling module for pkgroulette
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Every failure in the pipeline is fatal; the binary maps each variant to an
//! exit code through [`RouletteError::exit_code`].

use thiserror::Error;

use crate::types::Backend;

/// Main error type for pkgroulette
#[derive(Error, Debug)]
pub enum RouletteError {
    /// The package manager query could not be run or exited non-zero
    #[error("Package listing unavailable ({backend}): {reason}")]
    ListingUnavailable { backend: Backend, reason: String },

    /// No uninstalled package survived filtering
    #[error("No candidate packages found: every listed package is installed or excluded")]
    EmptyCandidateSet,

    /// A random source produced an index outside the candidate list
    #[error("Drawn index {index} is out of range for {len} candidates")]
    IndexOutOfRange { index: usize, len: usize },

    /// No supported package manager was found on this host
    #[error("Unsupported system: none of {0} found in PATH")]
    UnsupportedBackend(String),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors (writing the report, reading files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pkgroulette operations
pub type Result<T> = std::result::Result<T, RouletteError>;

impl RouletteError {
    /// Create a listing error for the given backend
    pub fn listing_unavailable(backend: Backend, reason: impl Into<String>) -> Self {
        Self::ListingUnavailable {
            backend,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Process exit code for this error.
    ///
    /// 2 = listing failed, 3 = nothing to pick, 1 = everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ListingUnavailable { .. } | Self::UnsupportedBackend(_) => 2,
            Self::EmptyCandidateSet => 3,
            _ => 1,
        }
    }
}
