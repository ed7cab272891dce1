//! Error types for pricing table loading.

use std::path::PathBuf;

use farecast_types::{ContractViolation, Provider};
use thiserror::Error;

/// Result type alias for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors that can occur while loading or querying a pricing table.
#[derive(Error, Debug)]
pub enum PricingError {
    /// Failed to read a pricing file.
    #[error("Failed to read pricing file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Pricing JSON is malformed.
    #[error("Invalid pricing table: {0}")]
    Json(#[from] serde_json::Error),

    /// Pricing table names a provider farecast does not know.
    #[error("Unknown provider in pricing table: {0}")]
    UnknownProvider(String),

    /// A profile has a negative or non-finite rate.
    #[error("Invalid pricing profile for {provider}: {source}")]
    InvalidProfile {
        /// The provider whose profile is invalid.
        provider: Provider,
        /// The rate check that failed.
        source: ContractViolation,
    },

    /// The table has no profile for the requested provider.
    #[error("No pricing profile for provider {0}")]
    MissingProvider(Provider),
}
