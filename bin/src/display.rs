//! Display utilities and output formatting for the farecast CLI.

use anyhow::Result;
use chrono::{DateTime, Utc};
use farecast_lib::{Fare, FareEstimate, FareEstimator, HistoryRecord, ValidationErrors};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write as _;
use std::time::Duration;

/// How long the fare reveal animation runs.
const REVEAL_DURATION: Duration = Duration::from_secs(2);

/// Time between animation frames.
const REVEAL_FRAME: Duration = Duration::from_millis(33);

/// Elastic ease-out curve over `t` in `[0, 1]`. Overshoots before settling.
pub(crate) fn ease_out_elastic(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let c4 = (2.0 * std::f64::consts::PI) / 3.0;
    2f64.powf(-10.0 * t).mul_add((t.mul_add(10.0, -0.75) * c4).sin(), 1.0)
}

/// Creates the spinner shown while an estimate is pending.
pub(crate) fn estimate_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress template"),
    );
    spinner.set_message("Estimating fare...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Counts the fare up from zero along the elastic curve, then prints the
/// exact value.
pub(crate) async fn reveal_fare(fare: Fare, quiet: bool) -> Result<()> {
    let mut stdout = std::io::stdout();
    if !quiet {
        let frames = REVEAL_DURATION.as_millis() / REVEAL_FRAME.as_millis();
        let mut ticker = tokio::time::interval(REVEAL_FRAME);
        for frame in 0..frames {
            ticker.tick().await;
            let progress = frame as f64 / frames as f64;
            let shown = fare.amount() * ease_out_elastic(progress);
            write!(stdout, "\rEstimated fare: ${shown:.2}   ")?;
            stdout.flush()?;
        }
    }
    writeln!(stdout, "\rEstimated fare: {}   ", FareEstimator::format_fare(fare))?;
    Ok(())
}

/// Prints the details of a completed estimate.
pub(crate) fn print_estimate(record: &HistoryRecord, estimate: &FareEstimate) {
    let breakdown = &estimate.breakdown;
    println!("Provider: {}", record.provider());
    println!("Trip: {}", describe_trip(record));
    println!(
        "Normalized: {:.2} km / {:.1} minutes",
        breakdown.distance_km, breakdown.duration_minutes
    );
    println!("Raw cost: {:.2}", breakdown.raw_cost);
    println!("Surged cost: {:.2}", breakdown.surged_cost);
}

/// Prints one line per invalid field.
pub(crate) fn print_field_errors(errors: &ValidationErrors) {
    for (_, error) in errors.iter() {
        eprintln!("  ✗ {error}");
    }
}

/// Describes a record's trip in the units it was entered in.
pub(crate) fn describe_trip(record: &HistoryRecord) -> String {
    format!(
        "{} {} / {} {} @ {}",
        record.distance(),
        record.distance_unit(),
        record.duration(),
        record.duration_unit(),
        FareEstimator::format_surge(record.surge_multiplier()),
    )
}

/// Prints the history newest first.
pub(crate) fn print_history(records: &[HistoryRecord], now: DateTime<Utc>) {
    if records.is_empty() {
        println!("No estimates yet.");
        return;
    }

    println!(
        "{:<4} {:<10} {:<12} {:<32} {:<20}",
        "ID", "FARE", "PROVIDER", "TRIP", "WHEN"
    );
    println!("{}", "-".repeat(80));

    for record in records {
        println!(
            "{:<4} {:<10} {:<12} {:<32} {:<20}",
            record.id(),
            FareEstimator::format_fare(record.fare()),
            record.provider().display_name(),
            describe_trip(record),
            format_age(record.created_at(), now),
        );
    }
}

/// Formats how long ago `then` was, relative to `now` (e.g. "3 minutes ago").
pub(crate) fn format_age(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = (seconds + 30) / 60;

    match minutes {
        0 => "less than a minute ago".to_string(),
        1 => "1 minute ago".to_string(),
        2..=44 => format!("{minutes} minutes ago"),
        45..=89 => "about 1 hour ago".to_string(),
        90..=1439 => format!("about {} hours ago", (minutes + 30) / 60),
        1440..=2519 => "1 day ago".to_string(),
        _ => format!("{} days ago", (minutes + 720) / 1440),
    }
}
