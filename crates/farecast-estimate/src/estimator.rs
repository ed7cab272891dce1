//! Fare estimation logic.

use std::sync::OnceLock;

use farecast_pricing::{PricingError, PricingTable};
use farecast_types::{ContractViolation, Fare, PricingProfile, TripInput};
use serde::Serialize;
use thiserror::Error;

/// Divisor applied to every surged cost, for every provider and unit.
///
/// This is part of the pricing contract, not a tuning knob.
pub const FARE_DIVISOR: f64 = 86.0;

/// Static estimator instance.
static ESTIMATOR: OnceLock<FareEstimator> = OnceLock::new();

/// Errors that can occur when estimating through a [`FareEstimator`].
#[derive(Error, Debug)]
pub enum EstimateError {
    /// The pricing table has no usable profile for the trip's provider.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The trip or profile broke the estimation preconditions.
    #[error("estimation contract violated: {0}")]
    Contract(#[from] ContractViolation),
}

/// Intermediate values of a fare computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FareBreakdown {
    /// Distance normalized to kilometers.
    pub distance_km: f64,
    /// Duration normalized to minutes.
    pub duration_minutes: f64,
    /// Base fare plus distance and time charges.
    pub raw_cost: f64,
    /// Raw cost times the surge multiplier.
    pub surged_cost: f64,
}

/// Result of estimating one trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FareEstimate {
    /// The estimated fare.
    pub fare: Fare,
    /// How the fare was computed.
    pub breakdown: FareBreakdown,
}

/// Estimates the fare of a validated trip under a pricing profile.
///
/// The distance is normalized to kilometers and the duration to minutes, the
/// profile's rates are applied, the result is scaled by the surge multiplier
/// and divided by [`FARE_DIVISOR`].
///
/// # Errors
///
/// Returns a [`ContractViolation`] if distance, duration or surge is not a
/// positive finite number, or if the profile has a negative rate. Validated
/// trips never trigger this; seeing it means the caller skipped validation.
/// Returns [`ContractViolation::NonFiniteFare`] if inputs are so large that
/// the computation overflows.
pub fn estimate(
    trip: &TripInput,
    profile: &PricingProfile,
) -> Result<FareEstimate, ContractViolation> {
    if !is_positive(trip.distance) {
        return Err(ContractViolation::InvalidDistance(trip.distance));
    }
    if !is_positive(trip.duration) {
        return Err(ContractViolation::InvalidDuration(trip.duration));
    }
    if !is_positive(trip.surge_multiplier) {
        return Err(ContractViolation::InvalidSurge(trip.surge_multiplier));
    }
    profile.check_rates()?;

    let distance_km = trip.distance_km();
    let duration_minutes = trip.duration_minutes();
    let raw_cost = profile.base_fare()
        + profile.per_km() * distance_km
        + profile.per_minute() * duration_minutes;
    let surged_cost = raw_cost * trip.surge_multiplier;
    let fare = surged_cost / FARE_DIVISOR;

    if !(raw_cost.is_finite() && surged_cost.is_finite() && fare.is_finite()) {
        return Err(ContractViolation::NonFiniteFare(fare));
    }

    Ok(FareEstimate {
        fare: Fare::new(fare),
        breakdown: FareBreakdown {
            distance_km,
            duration_minutes,
            raw_cost,
            surged_cost,
        },
    })
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Estimates fares against a pricing table.
#[derive(Debug, Clone, PartialEq)]
pub struct FareEstimator {
    pricing: PricingTable,
}

impl FareEstimator {
    /// Creates an estimator over the given pricing table.
    #[must_use]
    pub const fn new(pricing: PricingTable) -> Self {
        Self { pricing }
    }

    /// Returns the global estimator using the embedded pricing table.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(|| Self::new(PricingTable::global().clone()))
    }

    /// Returns the pricing table this estimator uses.
    #[must_use]
    pub const fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Estimates a trip using its provider's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider has no profile or the trip breaks the
    /// estimation preconditions.
    pub fn estimate(&self, trip: &TripInput) -> Result<FareEstimate, EstimateError> {
        let profile = self.pricing.profile(trip.provider)?;
        let result = estimate(trip, profile)?;

        tracing::debug!(
            provider = %trip.provider,
            distance_km = result.breakdown.distance_km,
            duration_minutes = result.breakdown.duration_minutes,
            fare = result.fare.amount(),
            "estimated fare"
        );

        Ok(result)
    }

    /// Formats a fare for display (e.g., "$7.41").
    #[must_use]
    pub fn format_fare(fare: Fare) -> String {
        format!("${fare}")
    }

    /// Formats a surge multiplier for display (e.g., "1.5x").
    #[must_use]
    pub fn format_surge(surge_multiplier: f64) -> String {
        format!("{surge_multiplier:.1}x")
    }
}

impl Default for FareEstimator {
    fn default() -> Self {
        Self::global().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use farecast_types::{DistanceUnit, DurationUnit, Provider};

    fn ola() -> PricingProfile {
        PricingProfile::new("Ola", 20.0, 58.76, 2.0)
    }

    fn uber() -> PricingProfile {
        PricingProfile::new("Uber", 25.0, 41.22, 1.5)
    }

    fn trip(
        distance: f64,
        distance_unit: DistanceUnit,
        duration: f64,
        duration_unit: DurationUnit,
        surge: f64,
    ) -> TripInput {
        TripInput::new(
            distance,
            distance_unit,
            duration,
            duration_unit,
            surge,
            Provider::Ola,
        )
    }

    #[test]
    fn test_kilometers_and_minutes() {
        let result = estimate(
            &trip(10.0, DistanceUnit::Km, 15.0, DurationUnit::Minutes, 1.0),
            &ola(),
        )
        .unwrap();

        assert_relative_eq!(result.breakdown.raw_cost, 637.6, epsilon = 1e-9);
        assert_relative_eq!(result.breakdown.surged_cost, 637.6, epsilon = 1e-9);
        assert_relative_eq!(result.fare.amount(), 637.6 / 86.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.fare.amount(), 7.4140, epsilon = 1e-4);
    }

    #[test]
    fn test_miles_converted_once() {
        let result = estimate(
            &trip(10.0, DistanceUnit::Miles, 15.0, DurationUnit::Minutes, 1.0),
            &ola(),
        )
        .unwrap();

        assert_relative_eq!(result.breakdown.distance_km, 16.0934, epsilon = 1e-12);
        let expected_raw = 20.0 + 58.76 * 16.0934 + 30.0;
        assert_relative_eq!(result.breakdown.raw_cost, expected_raw, epsilon = 1e-9);
        assert_abs_diff_eq!(result.fare.amount(), 11.5773, epsilon = 1e-4);
    }

    #[test]
    fn test_hours_and_surge() {
        let result = estimate(
            &trip(5.0, DistanceUnit::Km, 1.0, DurationUnit::Hours, 2.0),
            &uber(),
        )
        .unwrap();

        assert_relative_eq!(result.breakdown.duration_minutes, 60.0);
        assert_relative_eq!(result.breakdown.raw_cost, 321.1, epsilon = 1e-9);
        assert_relative_eq!(result.breakdown.surged_cost, 642.2, epsilon = 1e-9);
        assert_abs_diff_eq!(result.fare.amount(), 7.4674, epsilon = 1e-4);
    }

    #[test]
    fn test_unit_normalization_is_linear() {
        for d in [0.5, 3.0, 12.25, 140.0] {
            let miles = estimate(
                &trip(d, DistanceUnit::Miles, 20.0, DurationUnit::Minutes, 1.3),
                &uber(),
            )
            .unwrap();
            let km = estimate(
                &trip(d * 1.60934, DistanceUnit::Km, 20.0, DurationUnit::Minutes, 1.3),
                &uber(),
            )
            .unwrap();
            assert_relative_eq!(miles.fare.amount(), km.fare.amount(), max_relative = 1e-12);
        }

        for t in [0.25, 1.0, 2.5] {
            let hours = estimate(
                &trip(8.0, DistanceUnit::Km, t, DurationUnit::Hours, 1.0),
                &ola(),
            )
            .unwrap();
            let minutes = estimate(
                &trip(8.0, DistanceUnit::Km, t * 60.0, DurationUnit::Minutes, 1.0),
                &ola(),
            )
            .unwrap();
            assert_relative_eq!(hours.fare.amount(), minutes.fare.amount(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_fare_is_never_negative() {
        let profiles = [
            ola(),
            uber(),
            PricingProfile::new("Free", 0.0, 0.0, 0.0),
            PricingProfile::new("Flat", 50.0, 0.0, 0.0),
        ];
        for profile in &profiles {
            for distance in [0.01, 1.0, 250.0] {
                for duration in [0.01, 30.0, 600.0] {
                    for surge in [0.1, 1.0, 3.0, 7.5] {
                        let result = estimate(
                            &trip(distance, DistanceUnit::Km, duration, DurationUnit::Minutes, surge),
                            profile,
                        )
                        .unwrap();
                        assert!(result.fare.amount() >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_surge_outside_slider_range_is_accepted() {
        let result = estimate(
            &trip(10.0, DistanceUnit::Km, 15.0, DurationUnit::Minutes, 4.5),
            &ola(),
        )
        .unwrap();
        assert_relative_eq!(result.fare.amount(), 637.6 * 4.5 / 86.0, epsilon = 1e-12);
    }

    #[test]
    fn test_contract_violations() {
        let profile = ola();
        assert_eq!(
            estimate(&trip(0.0, DistanceUnit::Km, 15.0, DurationUnit::Minutes, 1.0), &profile),
            Err(ContractViolation::InvalidDistance(0.0))
        );
        assert_eq!(
            estimate(&trip(10.0, DistanceUnit::Km, -1.0, DurationUnit::Minutes, 1.0), &profile),
            Err(ContractViolation::InvalidDuration(-1.0))
        );
        assert!(matches!(
            estimate(&trip(10.0, DistanceUnit::Km, 15.0, DurationUnit::Minutes, f64::NAN), &profile),
            Err(ContractViolation::InvalidSurge(_))
        ));
        assert!(matches!(
            estimate(
                &trip(10.0, DistanceUnit::Km, 15.0, DurationUnit::Minutes, 1.0),
                &PricingProfile::new("Broken", -20.0, 1.0, 1.0)
            ),
            Err(ContractViolation::InvalidRate { rate: "base_fare", .. })
        ));
    }

    #[test]
    fn test_overflowing_trip_is_rejected() {
        let profile = ola();
        assert!(matches!(
            estimate(&trip(1e307, DistanceUnit::Km, 10.0, DurationUnit::Minutes, 1.0), &profile),
            Err(ContractViolation::NonFiniteFare(f)) if f.is_infinite()
        ));
        assert!(matches!(
            estimate(&trip(2e306, DistanceUnit::Km, 10.0, DurationUnit::Minutes, 3.0), &profile),
            Err(ContractViolation::NonFiniteFare(_))
        ));

        let largest_ok = estimate(
            &trip(1e300, DistanceUnit::Km, 10.0, DurationUnit::Minutes, 1.0),
            &profile,
        )
        .unwrap();
        assert!(largest_ok.fare.amount().is_finite());
    }

    #[test]
    fn test_estimator_uses_provider_profile() {
        let estimator = FareEstimator::global();
        let mut input = trip(5.0, DistanceUnit::Km, 1.0, DurationUnit::Hours, 2.0);
        input.provider = Provider::Uber;

        let result = estimator.estimate(&input).unwrap();
        assert_abs_diff_eq!(result.fare.amount(), 7.4674, epsilon = 1e-4);
    }

    #[test]
    fn test_estimator_missing_provider() {
        let pricing = PricingTable::from_profiles([(Provider::Uber, uber())]).unwrap();
        let estimator = FareEstimator::new(pricing);

        let result = estimator.estimate(&trip(1.0, DistanceUnit::Km, 1.0, DurationUnit::Minutes, 1.0));
        assert!(matches!(
            result,
            Err(EstimateError::Pricing(PricingError::MissingProvider(Provider::Ola)))
        ));
    }

    #[test]
    fn test_estimator_reports_contract_violation() {
        let result = FareEstimator::global()
            .estimate(&trip(-3.0, DistanceUnit::Km, 1.0, DurationUnit::Minutes, 1.0));
        assert!(matches!(
            result,
            Err(EstimateError::Contract(ContractViolation::InvalidDistance(_)))
        ));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(FareEstimator::format_fare(Fare::new(637.6 / 86.0)), "$7.41");
        assert_eq!(FareEstimator::format_fare(Fare::ZERO), "$0.00");
        assert_eq!(FareEstimator::format_surge(1.0), "1.0x");
        assert_eq!(FareEstimator::format_surge(2.5), "2.5x");
    }
}
