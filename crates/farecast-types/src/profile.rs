//! Per-provider pricing constants.

use serde::{Deserialize, Serialize};

use crate::ContractViolation;

/// Fare constants for one ride provider.
///
/// Rates are expressed per kilometer and per minute; trips entered in other
/// units are normalized before the rates apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingProfile {
    /// Human-readable provider name (e.g., "Namma Yatri").
    display_name: String,
    /// Flat amount charged for every trip.
    base_fare: f64,
    /// Currency per kilometer.
    per_km: f64,
    /// Currency per minute.
    per_minute: f64,
}

impl PricingProfile {
    /// Creates a new pricing profile.
    #[must_use]
    pub fn new(display_name: impl Into<String>, base_fare: f64, per_km: f64, per_minute: f64) -> Self {
        Self {
            display_name: display_name.into(),
            base_fare,
            per_km,
            per_minute,
        }
    }

    /// Returns the human-readable provider name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the flat base fare.
    #[must_use]
    pub const fn base_fare(&self) -> f64 {
        self.base_fare
    }

    /// Returns the rate per kilometer.
    #[must_use]
    pub const fn per_km(&self) -> f64 {
        self.per_km
    }

    /// Returns the rate per minute.
    #[must_use]
    pub const fn per_minute(&self) -> f64 {
        self.per_minute
    }

    /// Checks that every rate is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first offending rate.
    pub fn check_rates(&self) -> Result<(), ContractViolation> {
        for (rate, value) in [
            ("base_fare", self.base_fare),
            ("per_km", self.per_km),
            ("per_minute", self.per_minute),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ContractViolation::InvalidRate { rate, value });
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for PricingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: base {} + {}/km + {}/min",
            self.display_name, self.base_fare, self.per_km, self.per_minute
        )
    }
}
