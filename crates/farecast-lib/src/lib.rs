//! Ride fare estimation with a bounded history of past estimates.
//!
//! This is a facade crate that re-exports functionality from the farecast
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use farecast_lib::prelude::*;
//!
//! let form = TripForm::new("10", "45")
//!     .with_distance_unit(DistanceUnit::Km)
//!     .with_provider(Provider::Ola);
//!
//! let trip = validate(&form).expect("form is valid");
//! let estimate = FareEstimator::global().estimate(&trip).expect("ola is priced");
//! assert!(estimate.fare.amount() > 0.0);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/farecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use farecast_types::*;

// Re-export pricing table
pub use farecast_pricing::{PricingError, PricingTable};

// Re-export estimation
pub use farecast_estimate::{
    EstimateError, FARE_DIVISOR, FareBreakdown, FareEstimate, FareEstimator, estimate,
    parse_positive, validate,
};

// Re-export history
#[cfg(feature = "history")]
pub use farecast_history::{
    HISTORY_CAPACITY, HistoryRecord, HistoryStore, RecordId, RecordIdGenerator, reuse,
};

// Re-export session
#[cfg(feature = "session")]
pub use farecast_session::{
    EstimationSession, FixedLatency, LatencySimulator, NoLatency, SessionError, SessionPhase,
    Submission,
};

/// Prelude module for convenient imports.
///
/// ```
/// use farecast_lib::prelude::*;
/// ```
pub mod prelude {
    pub use farecast_types::{
        DistanceUnit, DurationUnit, Fare, PricingProfile, Provider, TripField, TripForm,
        TripInput, ValidationErrors,
    };

    pub use farecast_pricing::PricingTable;

    pub use farecast_estimate::{FareEstimate, FareEstimator, validate};

    #[cfg(feature = "history")]
    pub use farecast_history::{HistoryRecord, HistoryStore, RecordId, reuse};

    #[cfg(feature = "session")]
    pub use farecast_session::{
        EstimationSession, FixedLatency, NoLatency, SessionPhase, Submission,
    };
}
