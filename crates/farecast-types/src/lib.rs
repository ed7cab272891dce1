//! Core types for the farecast ride fare estimator.
//!
//! This crate provides the fundamental data structures used throughout farecast:
//!
//! - [`Provider`] - Ride provider a fare is estimated for
//! - [`DistanceUnit`] and [`DurationUnit`] - Units the user entered the trip in
//! - [`TripForm`] - Raw, editable trip input as typed by the user
//! - [`TripInput`] - Validated trip parameters ready for estimation
//! - [`PricingProfile`] - Per-provider fare constants
//! - [`Fare`] - Estimated trip cost in currency units
//! - [`ValidationErrors`], [`FieldError`], [`ContractViolation`] - Error taxonomy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/farecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod fare;
mod profile;
mod provider;
mod trip;
mod units;

pub use error::{ChoiceParseError, ContractViolation, FieldError, ValidationErrors};
pub use fare::Fare;
pub use profile::PricingProfile;
pub use provider::Provider;
pub use trip::{TripField, TripForm, TripInput};
pub use units::{DistanceUnit, DurationUnit, KM_PER_MILE, MINUTES_PER_HOUR};
