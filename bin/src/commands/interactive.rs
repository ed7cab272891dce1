//! Interactive estimation loop.
//!
//! Prompts for trips, shows estimates and lets the user pick a past estimate
//! to start from.

use crate::display::{
    describe_trip, estimate_spinner, format_age, print_field_errors, print_history, reveal_fare,
};
use anyhow::Result;
use chrono::Utc;
use farecast_lib::prelude::*;
use inquire::validator::Validation;
use inquire::{CustomType, CustomUserError, InquireError, Select, Text};
use std::time::Duration;

/// Lowest surge multiplier offered.
const MIN_SURGE: f64 = 1.0;

/// Highest surge multiplier offered.
const MAX_SURGE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    NewEstimate,
    Reuse,
    History,
    Quit,
}

impl Action {
    const ALL: [Self; 4] = [Self::NewEstimate, Self::Reuse, Self::History, Self::Quit];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::NewEstimate => "New estimate",
            Self::Reuse => "Reuse a past estimate",
            Self::History => "Show history",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// History entry as shown in the reuse picker.
#[derive(Debug)]
struct HistoryChoice {
    record: HistoryRecord,
    age: String,
}

impl std::fmt::Display for HistoryChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "${} {} - {} ({})",
            self.record.fare(),
            self.record.provider().display_name(),
            describe_trip(&self.record),
            self.age
        )
    }
}

/// Run the interactive loop until the user quits.
pub(crate) async fn interactive(estimator: FareEstimator, no_delay: bool, quiet: bool) -> Result<()> {
    let latency = if no_delay {
        FixedLatency::new(Duration::ZERO)
    } else {
        FixedLatency::default()
    };
    let session = EstimationSession::with_latency(estimator, latency);
    tracing::debug!(session = %session.id(), "interactive session started");

    let mut last_form = TripForm::default();

    loop {
        let menu = Select::new("What would you like to do?", Action::ALL.to_vec()).prompt();
        let action = unless_cancelled(menu)?.unwrap_or(Action::Quit);

        let form = match action {
            Action::NewEstimate => prompt_form(&last_form)?,
            Action::Reuse => {
                let Some(id) = pick_record(&session.history().await)? else {
                    continue;
                };
                let reused = session.reuse(id).await?;
                prompt_form(&reused)?
            }
            Action::History => {
                print_history(&session.history().await, Utc::now());
                continue;
            }
            Action::Quit => break,
        };
        let Some(form) = form else {
            continue;
        };

        let spinner = estimate_spinner(quiet);
        let outcome = session.submit(&form).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(Submission::Completed { record, .. }) => {
                reveal_fare(record.fare(), quiet).await?;
                println!(
                    "{} - {}\n",
                    record.provider().display_name(),
                    describe_trip(&record)
                );
            }
            Ok(Submission::Invalid(errors)) => {
                eprintln!("Please fix the following:");
                print_field_errors(&errors);
            }
            Ok(Submission::Ignored | Submission::Discarded) => {}
            Err(e) => eprintln!("Error: {e}"),
        }
        last_form = form;
    }

    session.close();
    Ok(())
}

/// Prompts for every trip field, starting from `initial`.
///
/// Returns `None` if the user cancels.
fn prompt_form(initial: &TripForm) -> Result<Option<TripForm>> {
    let answers = (|| -> Result<TripForm, InquireError> {
        let provider = Select::new("Provider:", Provider::all().to_vec())
            .with_starting_cursor(position(Provider::all(), &initial.provider))
            .prompt()?;
        let distance = Text::new("Distance:")
            .with_initial_value(&initial.distance)
            .prompt()?;
        let distance_unit = Select::new("Distance unit:", DistanceUnit::all().to_vec())
            .with_starting_cursor(position(DistanceUnit::all(), &initial.distance_unit))
            .prompt()?;
        let duration = Text::new("Duration:")
            .with_initial_value(&initial.duration)
            .prompt()?;
        let duration_unit = Select::new("Duration unit:", DurationUnit::all().to_vec())
            .with_starting_cursor(position(DurationUnit::all(), &initial.duration_unit))
            .prompt()?;
        let surge = CustomType::<f64>::new("Surge multiplier:")
            .with_default(initial.surge_multiplier)
            .with_help_message("between 1.0 and 3.0")
            .with_validator(|value: &f64| -> Result<Validation, CustomUserError> {
                if (MIN_SURGE..=MAX_SURGE).contains(value) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        "Surge multiplier must be between 1.0 and 3.0".into(),
                    ))
                }
            })
            .prompt()?;

        Ok(TripForm::new(distance, duration)
            .with_distance_unit(distance_unit)
            .with_duration_unit(duration_unit)
            .with_surge(surge)
            .with_provider(provider))
    })();

    unless_cancelled(answers)
}

/// Lets the user choose a history record. Returns `None` when there is
/// nothing to choose or the user cancels.
fn pick_record(records: &[HistoryRecord]) -> Result<Option<RecordId>> {
    if records.is_empty() {
        println!("No estimates yet.");
        return Ok(None);
    }

    let now = Utc::now();
    let choices: Vec<_> = records
        .iter()
        .map(|record| HistoryChoice {
            record: record.clone(),
            age: format_age(record.created_at(), now),
        })
        .collect();

    let choice = Select::new("Select an estimate to reuse:", choices).prompt();
    Ok(unless_cancelled(choice)?.map(|choice| choice.record.id()))
}

/// Maps Esc and Ctrl-C on a prompt to `None`, keeping other errors.
fn unless_cancelled<T>(answer: Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn position<T: PartialEq>(options: &[T], selected: &T) -> usize {
    options.iter().position(|o| o == selected).unwrap_or(0)
}
