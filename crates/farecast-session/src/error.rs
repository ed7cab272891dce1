//! Session error types.

use farecast_estimate::EstimateError;
use farecast_history::RecordId;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while running an estimation session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The fare could not be computed for a validated trip.
    #[error("estimation failed: {0}")]
    Estimate(#[from] EstimateError),

    /// No record with this id is held in history.
    #[error("no history record with id {0}")]
    UnknownRecord(RecordId),
}
