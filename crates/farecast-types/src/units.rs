//! Distance and duration units.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ChoiceParseError;

/// Kilometers in one statute mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Unit a trip distance was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometers.
    #[default]
    Km,
    /// Statute miles.
    Miles,
}

impl DistanceUnit {
    /// Converts a distance in this unit to kilometers.
    #[must_use]
    pub fn to_km(self, value: f64) -> f64 {
        match self {
            Self::Km => value,
            Self::Miles => value * KM_PER_MILE,
        }
    }

    /// Returns the unit as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::Miles => "miles",
        }
    }

    /// Returns all distance units.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Km, Self::Miles]
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km" | "kms" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Ok(Self::Km),
            "mi" | "mile" | "miles" => Ok(Self::Miles),
            _ => Err(ChoiceParseError::new("distance unit", s, "km, miles")),
        }
    }
}

/// Unit a trip duration was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    /// Minutes.
    #[default]
    Minutes,
    /// Hours.
    Hours,
}

impl DurationUnit {
    /// Converts a duration in this unit to minutes.
    #[must_use]
    pub fn to_minutes(self, value: f64) -> f64 {
        match self {
            Self::Minutes => value,
            Self::Hours => value * MINUTES_PER_HOUR,
        }
    }

    /// Returns the unit as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Hours => "hours",
        }
    }

    /// Returns all duration units.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Minutes, Self::Hours]
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DurationUnit {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(Self::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(Self::Hours),
            _ => Err(ChoiceParseError::new("duration unit", s, "minutes, hours")),
        }
    }
}
