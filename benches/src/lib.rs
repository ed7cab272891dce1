//! Benchmark fixtures for farecast.

use farecast_lib::{DistanceUnit, DurationUnit, Provider, TripForm};

/// A named benchmark workload.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Label shown in benchmark ids.
    pub name: &'static str,
    /// The form submitted on each iteration.
    pub form: TripForm,
}

/// Trips covering each provider and unit combination, plus a rejected form.
pub fn workloads() -> Vec<Workload> {
    vec![
        Workload {
            name: "ola-km-minutes",
            form: TripForm::new("10", "15"),
        },
        Workload {
            name: "uber-km-hours-surge",
            form: TripForm::new("5", "1")
                .with_duration_unit(DurationUnit::Hours)
                .with_surge(2.0)
                .with_provider(Provider::Uber),
        },
        Workload {
            name: "namma-yatri-miles",
            form: TripForm::new("12.5", "40")
                .with_distance_unit(DistanceUnit::Miles)
                .with_surge(1.3)
                .with_provider(Provider::NammaYatri),
        },
        Workload {
            name: "invalid",
            form: TripForm::new("", "-5"),
        },
    ]
}

/// Forms for `count` distinct trips, used to fill history.
pub fn history_forms(count: usize) -> Vec<TripForm> {
    (1..=count)
        .map(|i| TripForm::new(i.to_string(), (i * 3).to_string()))
        .collect()
}
