//! Trip input, raw and validated.

use serde::{Deserialize, Serialize};

use crate::{DistanceUnit, DurationUnit, Provider};

/// Surge multiplier applied when the user leaves the control untouched.
const DEFAULT_SURGE_MULTIPLIER: f64 = 1.0;

/// User-editable trip field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripField {
    /// Trip distance.
    Distance,
    /// Trip duration.
    Duration,
}

impl TripField {
    /// Returns the field name as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Duration => "duration",
        }
    }

    /// Returns the capitalized label used in messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Distance => "Distance",
            Self::Duration => "Duration",
        }
    }
}

impl std::fmt::Display for TripField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw trip input as entered by the user.
///
/// Distance and duration are kept as the text the user typed; they only
/// become numbers once the form passes validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripForm {
    /// Distance text, possibly empty or non-numeric.
    pub distance: String,
    /// Unit the distance is expressed in.
    pub distance_unit: DistanceUnit,
    /// Duration text, possibly empty or non-numeric.
    pub duration: String,
    /// Unit the duration is expressed in.
    pub duration_unit: DurationUnit,
    /// Surge multiplier selected on the input control.
    pub surge_multiplier: f64,
    /// Selected ride provider.
    pub provider: Provider,
}

impl TripForm {
    /// Creates a form with the given distance and duration text and default
    /// units, surge and provider.
    #[must_use]
    pub fn new(distance: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            distance: distance.into(),
            duration: duration.into(),
            ..Self::default()
        }
    }

    /// Sets the distance unit.
    #[must_use]
    pub const fn with_distance_unit(mut self, unit: DistanceUnit) -> Self {
        self.distance_unit = unit;
        self
    }

    /// Sets the duration unit.
    #[must_use]
    pub const fn with_duration_unit(mut self, unit: DurationUnit) -> Self {
        self.duration_unit = unit;
        self
    }

    /// Sets the surge multiplier.
    #[must_use]
    pub const fn with_surge(mut self, surge_multiplier: f64) -> Self {
        self.surge_multiplier = surge_multiplier;
        self
    }

    /// Sets the provider.
    #[must_use]
    pub const fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            distance: String::new(),
            distance_unit: DistanceUnit::default(),
            duration: String::new(),
            duration_unit: DurationUnit::default(),
            surge_multiplier: DEFAULT_SURGE_MULTIPLIER,
            provider: Provider::default(),
        }
    }
}

/// Validated trip parameters for a single estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripInput {
    /// Trip distance in `distance_unit`.
    pub distance: f64,
    /// Unit the distance is expressed in.
    pub distance_unit: DistanceUnit,
    /// Trip duration in `duration_unit`.
    pub duration: f64,
    /// Unit the duration is expressed in.
    pub duration_unit: DurationUnit,
    /// Demand multiplier applied to the raw cost.
    pub surge_multiplier: f64,
    /// Ride provider whose pricing profile applies.
    pub provider: Provider,
}

impl TripInput {
    /// Creates a new trip input.
    #[must_use]
    pub const fn new(
        distance: f64,
        distance_unit: DistanceUnit,
        duration: f64,
        duration_unit: DurationUnit,
        surge_multiplier: f64,
        provider: Provider,
    ) -> Self {
        Self {
            distance,
            distance_unit,
            duration,
            duration_unit,
            surge_multiplier,
            provider,
        }
    }

    /// Returns the distance normalized to kilometers.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.distance_unit.to_km(self.distance)
    }

    /// Returns the duration normalized to minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_unit.to_minutes(self.duration)
    }
}

impl std::fmt::Display for TripInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} / {} {} @ {:.1}x ({})",
            self.distance,
            self.distance_unit,
            self.duration,
            self.duration_unit,
            self.surge_multiplier,
            self.provider
        )
    }
}
