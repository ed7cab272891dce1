//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod interactive;
pub(crate) mod providers;

use anyhow::{Context, Result};
use farecast_lib::{FareEstimator, PricingTable};
use std::path::Path;

/// Builds the estimator, loading an alternate pricing table when given.
#[allow(clippy::option_if_let_else)]
pub(crate) fn load_estimator(pricing: Option<&Path>) -> Result<FareEstimator> {
    match pricing {
        Some(path) => {
            let table = PricingTable::from_path(path)
                .with_context(|| format!("Failed to load pricing table from {}", path.display()))?;
            tracing::info!(path = %path.display(), providers = table.len(), "loaded pricing table");
            Ok(FareEstimator::new(table))
        }
        None => Ok(FareEstimator::global().clone()),
    }
}
