//! Fare amounts.

use serde::{Deserialize, Serialize};

/// Estimated trip cost in currency units.
///
/// The full floating-point value is retained; rounding to cents only happens
/// when the fare is displayed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Fare(f64);

impl Fare {
    /// A zero fare.
    pub const ZERO: Self = Self(0.0);

    /// Creates a fare from an amount in currency units.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Returns the full-precision amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns the amount rounded to two decimal places.
    #[must_use]
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl From<Fare> for f64 {
    fn from(fare: Fare) -> Self {
        fare.0
    }
}

impl std::fmt::Display for Fare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
