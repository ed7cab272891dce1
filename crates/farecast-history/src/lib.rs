//! Bounded history of past estimates for the farecast ride fare estimator.
//!
//! This crate keeps recent estimates around so they can be listed and reused:
//!
//! - [`RecordId`] - Unique, creation-ordered identifier for a record
//! - [`RecordIdGenerator`] - Hands out record ids
//! - [`HistoryRecord`] - Immutable snapshot of one estimate
//! - [`HistoryStore`] - Newest-first store holding at most [`HISTORY_CAPACITY`] records
//! - [`reuse`] - Projects a record back into an editable trip form

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/farecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod record;
mod store;

pub use record::{HistoryRecord, RecordId, RecordIdGenerator, reuse};
pub use store::{HISTORY_CAPACITY, HistoryStore};
