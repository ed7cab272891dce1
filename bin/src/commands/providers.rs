//! Providers command implementation.
//!
//! This module lists the pricing profiles the estimator knows about.

use anyhow::Result;
use farecast_lib::prelude::*;

/// List pricing profiles.
pub(crate) fn list_providers(estimator: &FareEstimator) -> Result<()> {
    let pricing = estimator.pricing();

    if pricing.is_empty() {
        println!("No providers configured.");
        return Ok(());
    }

    println!(
        "{:<13} {:<15} {:>10} {:>10} {:>10}",
        "ID", "NAME", "BASE", "PER KM", "PER MIN"
    );
    println!("{}", "-".repeat(62));

    for (provider, profile) in pricing.iter() {
        println!(
            "{:<13} {:<15} {:>10.2} {:>10.2} {:>10.2}",
            provider.as_str(),
            profile.display_name(),
            profile.base_fare(),
            profile.per_km(),
            profile.per_minute(),
        );
    }

    println!("\nTotal: {} providers", pricing.len());
    Ok(())
}
