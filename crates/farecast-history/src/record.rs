//! History record definitions.

use chrono::{DateTime, Utc};
use farecast_types::{DistanceUnit, DurationUnit, Fare, Provider, TripForm, TripInput};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a history record.
///
/// Ids are handed out in creation order, so a larger id is a newer record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Creates a record id from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// Hands out unique, increasing record ids.
#[derive(Debug)]
pub struct RecordIdGenerator {
    next: AtomicU64,
}

impl RecordIdGenerator {
    /// Creates a generator whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the next id.
    pub fn next_id(&self) -> RecordId {
        RecordId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of one completed estimate.
///
/// Distance and duration are stored in the units the user picked, not the
/// normalized ones, so that reuse puts back exactly what was on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    id: RecordId,
    distance: f64,
    distance_unit: DistanceUnit,
    duration: f64,
    duration_unit: DurationUnit,
    surge_multiplier: f64,
    provider: Provider,
    fare: Fare,
    created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Creates a record for a trip and the fare estimated for it.
    #[must_use]
    pub const fn new(id: RecordId, trip: &TripInput, fare: Fare, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            distance: trip.distance,
            distance_unit: trip.distance_unit,
            duration: trip.duration,
            duration_unit: trip.duration_unit,
            surge_multiplier: trip.surge_multiplier,
            provider: trip.provider,
            fare,
            created_at,
        }
    }

    /// Returns the record id.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the distance as entered.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the distance unit as selected.
    #[must_use]
    pub const fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    /// Returns the duration as entered.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the duration unit as selected.
    #[must_use]
    pub const fn duration_unit(&self) -> DurationUnit {
        self.duration_unit
    }

    /// Returns the surge multiplier.
    #[must_use]
    pub const fn surge_multiplier(&self) -> f64 {
        self.surge_multiplier
    }

    /// Returns the provider the fare was estimated for.
    #[must_use]
    pub const fn provider(&self) -> Provider {
        self.provider
    }

    /// Returns the estimated fare.
    #[must_use]
    pub const fn fare(&self) -> Fare {
        self.fare
    }

    /// Returns when the estimate was made.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the trip this record was estimated from.
    #[must_use]
    pub const fn trip(&self) -> TripInput {
        TripInput::new(
            self.distance,
            self.distance_unit,
            self.duration,
            self.duration_unit,
            self.surge_multiplier,
            self.provider,
        )
    }
}

/// Projects a record back into an editable trip form.
///
/// The record is left untouched and may be reused any number of times.
#[must_use]
pub fn reuse(record: &HistoryRecord) -> TripForm {
    TripForm {
        distance: record.distance.to_string(),
        distance_unit: record.distance_unit,
        duration: record.duration.to_string(),
        duration_unit: record.duration_unit,
        surge_multiplier: record.surge_multiplier,
        provider: record.provider,
    }
}
