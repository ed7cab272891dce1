//! Interactive estimation session for the farecast ride fare estimator.
//!
//! This crate ties validation, pricing and history together into one flow:
//!
//! - [`EstimationSession`] - Runs submissions and owns the history
//! - [`Submission`] - Outcome of a single submission
//! - [`SessionPhase`] - Where the session currently is in its flow
//! - [`LatencySimulator`] - Artificial delay before an estimate resolves
//! - [`FixedLatency`] / [`NoLatency`] - Stock latency implementations

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/farecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod latency;
mod session;

pub use error::{Result, SessionError};
pub use latency::{FixedLatency, LatencySimulator, NoLatency};
pub use session::{EstimationSession, SessionPhase, Submission};
