//! Estimate command implementation.
//!
//! Runs a single estimate from command-line flags through an estimation
//! session and prints the result.

use crate::display::{estimate_spinner, print_estimate, print_field_errors, reveal_fare};
use anyhow::{Context, Result, bail};
use farecast_lib::prelude::*;
use std::time::Duration;

/// Estimate the fare for one trip.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn estimate(
    estimator: FareEstimator,
    distance: &str,
    duration: &str,
    distance_unit: &str,
    duration_unit: &str,
    surge: f64,
    provider: &str,
    json: bool,
    no_delay: bool,
    quiet: bool,
) -> Result<()> {
    let distance_unit = distance_unit
        .parse::<DistanceUnit>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let duration_unit = duration_unit
        .parse::<DurationUnit>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let provider = provider
        .parse::<Provider>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let form = TripForm::new(distance, duration)
        .with_distance_unit(distance_unit)
        .with_duration_unit(duration_unit)
        .with_surge(surge)
        .with_provider(provider);

    let latency = if no_delay {
        FixedLatency::new(Duration::ZERO)
    } else {
        FixedLatency::default()
    };
    let session = EstimationSession::with_latency(estimator, latency);

    let spinner = estimate_spinner(quiet || json);
    let outcome = session.submit(&form).await;
    spinner.finish_and_clear();

    match outcome.context("Failed to estimate fare")? {
        Submission::Completed { record, estimate } => {
            if json {
                let report = serde_json::json!({
                    "record": record,
                    "estimate": estimate,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                reveal_fare(estimate.fare, quiet).await?;
                if !quiet {
                    print_estimate(&record, &estimate);
                }
            }
            Ok(())
        }
        Submission::Invalid(errors) => {
            print_field_errors(&errors);
            bail!("Invalid trip: {errors}")
        }
        Submission::Ignored | Submission::Discarded => {
            bail!("Estimate did not complete")
        }
    }
}
