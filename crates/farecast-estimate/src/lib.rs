//! Trip validation and fare estimation for the farecast ride fare estimator.
//!
//! This crate is the pure core of farecast; nothing here blocks, sleeps or
//! keeps state between calls:
//!
//! - [`validate`] - Checks raw form text and produces a [`TripInput`](farecast_types::TripInput)
//! - [`estimate`] - Applies a pricing profile to a validated trip
//! - [`FareEstimator`] - Looks up the provider's profile in a pricing table and estimates
//! - [`FareEstimate`] and [`FareBreakdown`] - The fare and the values it was computed from
//!
//! # Example
//!
//! ```
//! use farecast_estimate::{FareEstimator, validate};
//! use farecast_types::{DurationUnit, Provider, TripForm};
//!
//! let form = TripForm::new("5", "1")
//!     .with_duration_unit(DurationUnit::Hours)
//!     .with_surge(2.0)
//!     .with_provider(Provider::Uber);
//!
//! let trip = validate(&form).expect("form is valid");
//! let estimate = FareEstimator::global().estimate(&trip).expect("uber is priced");
//! assert_eq!(estimate.fare.to_string(), "7.47");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/farecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod validate;

pub use estimator::{
    EstimateError, FARE_DIVISOR, FareBreakdown, FareEstimate, FareEstimator, estimate,
};
pub use validate::{parse_positive, validate};
