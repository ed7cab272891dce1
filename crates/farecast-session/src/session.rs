//! Estimation session state machine.
//!
//! A session walks each submission through `idle -> validating -> computing
//! -> done`, falling back to idle when the form is invalid. At most one
//! submission is in flight at a time.

use crate::{FixedLatency, LatencySimulator, Result, SessionError};
use chrono::Utc;
use farecast_estimate::{FareEstimate, FareEstimator, validate};
use farecast_history::{HistoryRecord, HistoryStore, RecordId, RecordIdGenerator, reuse};
use farecast_types::{TripForm, ValidationErrors};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Where a session is in its submission flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Waiting for a submission.
    #[default]
    Idle,
    /// Checking the submitted form.
    Validating,
    /// Waiting out the latency and computing the fare.
    Computing,
    /// The last submission produced an estimate.
    Done,
}

impl SessionPhase {
    /// Returns the phase as a lowercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Computing => "computing",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of [`EstimationSession::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The form had one or more invalid fields. Nothing was recorded.
    Invalid(ValidationErrors),
    /// The fare was estimated and recorded in history.
    Completed {
        /// The record added to history.
        record: HistoryRecord,
        /// The estimate with its breakdown.
        estimate: FareEstimate,
    },
    /// Another submission was already pending.
    Ignored,
    /// The session was closed before the estimate resolved.
    Discarded,
}

/// Ends the in-flight submission when dropped, including when its future is
/// dropped mid-wait. An unfinished phase goes back to idle before the pending
/// flag is cleared.
struct PendingGuard<'a> {
    pending: &'a AtomicBool,
    phase: &'a Mutex<SessionPhase>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        {
            let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
            if matches!(*phase, SessionPhase::Validating | SessionPhase::Computing) {
                *phase = SessionPhase::Idle;
            }
        }
        self.pending.store(false, Ordering::Release);
    }
}

/// Runs estimations and keeps their history.
///
/// The session is `Send + Sync` and is meant to be shared behind an
/// [`Arc`](std::sync::Arc).
#[derive(Debug)]
pub struct EstimationSession<L = FixedLatency> {
    id: Uuid,
    estimator: FareEstimator,
    latency: L,
    history: RwLock<HistoryStore>,
    ids: RecordIdGenerator,
    pending: AtomicBool,
    closed: AtomicBool,
    phase: Mutex<SessionPhase>,
}

impl EstimationSession<FixedLatency> {
    /// Creates a session over the embedded pricing table with the default
    /// two second latency.
    #[must_use]
    pub fn new() -> Self {
        Self::with_latency(FareEstimator::global().clone(), FixedLatency::default())
    }
}

impl Default for EstimationSession<FixedLatency> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LatencySimulator> EstimationSession<L> {
    /// Creates a session with an explicit estimator and latency.
    #[must_use]
    pub fn with_latency(estimator: FareEstimator, latency: L) -> Self {
        Self {
            id: Uuid::new_v4(),
            estimator,
            latency,
            history: RwLock::new(HistoryStore::new()),
            ids: RecordIdGenerator::new(),
            pending: AtomicBool::new(false),
            closed: AtomicBool::new(false),
            phase: Mutex::new(SessionPhase::Idle),
        }
    }

    /// Returns the session id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the estimator used by this session.
    #[must_use]
    pub const fn estimator(&self) -> &FareEstimator {
        &self.estimator
    }

    /// Submits a form for estimation.
    ///
    /// Returns [`Submission::Ignored`] without doing anything if another
    /// submission is still pending.
    ///
    /// # Errors
    ///
    /// Returns an error if the validated trip cannot be priced, for example
    /// when the pricing table has no profile for the chosen provider.
    #[tracing::instrument(skip_all, fields(session = %self.id, provider = %form.provider))]
    pub async fn submit(&self, form: &TripForm) -> Result<Submission> {
        if self.is_closed() {
            tracing::debug!("session closed, discarding submission");
            return Ok(Submission::Discarded);
        }
        if self.pending.swap(true, Ordering::AcqRel) {
            tracing::warn!("estimate already pending, ignoring submission");
            return Ok(Submission::Ignored);
        }
        let _pending = PendingGuard {
            pending: &self.pending,
            phase: &self.phase,
        };

        self.set_phase(SessionPhase::Validating);
        let trip = match validate(form) {
            Ok(trip) => trip,
            Err(errors) => {
                tracing::debug!(%errors, "form rejected");
                self.set_phase(SessionPhase::Idle);
                return Ok(Submission::Invalid(errors));
            }
        };

        self.set_phase(SessionPhase::Computing);
        self.latency.wait().await;

        if self.is_closed() {
            tracing::warn!("session closed while pending, dropping estimate");
            self.set_phase(SessionPhase::Idle);
            return Ok(Submission::Discarded);
        }

        let estimate = match self.estimator.estimate(&trip) {
            Ok(estimate) => estimate,
            Err(e) => {
                tracing::error!(error = %e, %trip, "failed to estimate fare");
                self.set_phase(SessionPhase::Idle);
                return Err(e.into());
            }
        };

        let record = HistoryRecord::new(self.ids.next_id(), &trip, estimate.fare, Utc::now());
        self.history.write().await.record_estimate(record.clone());
        self.set_phase(SessionPhase::Done);

        Ok(Submission::Completed { record, estimate })
    }

    /// Returns the history, newest first.
    pub async fn history(&self) -> Vec<HistoryRecord> {
        self.history.read().await.snapshot()
    }

    /// Returns an editable form populated from a history record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownRecord`] if no record has this id,
    /// including records already evicted from history.
    pub async fn reuse(&self, id: RecordId) -> Result<TripForm> {
        let history = self.history.read().await;
        history
            .get(id)
            .map(reuse)
            .ok_or(SessionError::UnknownRecord(id))
    }

    /// Closes the session. A pending estimate will be discarded.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!(session = %self.id, "session closed");
        }
    }

    /// Returns true once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Returns true while a submission is in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_phase(&self, phase: SessionPhase) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoLatency;
    use async_trait::async_trait;
    use farecast_estimate::{EstimateError, estimate};
    use farecast_pricing::PricingTable;
    use farecast_types::{
        ContractViolation, DistanceUnit, DurationUnit, FieldError, PricingProfile, Provider,
        TripField,
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Latency that holds until the test releases it.
    #[derive(Debug, Default)]
    struct GatedLatency {
        release: Notify,
    }

    #[async_trait]
    impl LatencySimulator for Arc<GatedLatency> {
        async fn wait(&self) {
            self.release.notified().await;
        }
    }

    fn instant_session() -> EstimationSession<NoLatency> {
        EstimationSession::with_latency(FareEstimator::global().clone(), NoLatency)
    }

    fn gated_session() -> (Arc<EstimationSession<Arc<GatedLatency>>>, Arc<GatedLatency>) {
        let gate = Arc::new(GatedLatency::default());
        let session = EstimationSession::with_latency(FareEstimator::global().clone(), gate.clone());
        (Arc::new(session), gate)
    }

    async fn wait_until_pending<L: LatencySimulator>(session: &EstimationSession<L>) {
        while !session.is_pending() {
            tokio::task::yield_now().await;
        }
    }

    fn uber_form() -> TripForm {
        TripForm::new("5", "1")
            .with_duration_unit(DurationUnit::Hours)
            .with_surge(2.0)
            .with_provider(Provider::Uber)
    }

    #[tokio::test]
    async fn test_submit_records_estimate() {
        let session = instant_session();
        let outcome = session.submit(&uber_form()).await.unwrap();

        let Submission::Completed { record, estimate } = outcome else {
            panic!("expected completed submission, got {outcome:?}");
        };
        assert_eq!(record.fare(), estimate.fare);
        assert_eq!(record.provider(), Provider::Uber);
        assert_eq!(estimate.fare.to_string(), "7.47");
        assert_eq!(session.phase(), SessionPhase::Done);
        assert!(!session.is_pending());
        assert_eq!(session.history().await, vec![record]);
    }

    #[tokio::test]
    async fn test_invalid_form_leaves_history_untouched() {
        let session = instant_session();
        let outcome = session.submit(&TripForm::new("", "abc")).await.unwrap();

        let Submission::Invalid(errors) = outcome else {
            panic!("expected invalid submission, got {outcome:?}");
        };
        assert_eq!(
            errors.get(TripField::Distance),
            Some(&FieldError::Missing {
                field: TripField::Distance
            })
        );
        assert!(errors.contains(TripField::Duration));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(!session.is_pending());
        assert!(session.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_history_keeps_five_newest() {
        let session = instant_session();
        for distance in 1..=7 {
            let form = TripForm::new(distance.to_string(), "10");
            session.submit(&form).await.unwrap();
        }

        let distances: Vec<f64> = session.history().await.iter().map(|r| r.distance()).collect();
        assert_eq!(distances, vec![7.0, 6.0, 5.0, 4.0, 3.0]);
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_ignored() {
        let (session, gate) = gated_session();

        let first = tokio::spawn({
            let session = session.clone();
            async move { session.submit(&uber_form()).await }
        });
        wait_until_pending(&session).await;
        assert_eq!(session.phase(), SessionPhase::Computing);

        let second = session.submit(&TripForm::new("9", "9")).await.unwrap();
        assert_eq!(second, Submission::Ignored);

        gate.release.notify_one();
        let first = first.await.unwrap().unwrap();
        assert!(matches!(first, Submission::Completed { .. }));
        assert_eq!(session.history().await.len(), 1);
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_close_while_pending_discards() {
        let (session, gate) = gated_session();

        let pending = tokio::spawn({
            let session = session.clone();
            async move { session.submit(&uber_form()).await }
        });
        wait_until_pending(&session).await;

        session.close();
        gate.release.notify_one();

        let outcome = pending.await.unwrap().unwrap();
        assert_eq!(outcome, Submission::Discarded);
        assert!(session.history().await.is_empty());
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[tokio::test]
    async fn test_submit_after_close_is_discarded() {
        let session = instant_session();
        session.close();
        assert!(session.is_closed());

        let outcome = session.submit(&uber_form()).await.unwrap();
        assert_eq!(outcome, Submission::Discarded);
        assert!(session.history().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_latency_delays_completion() {
        let session = EstimationSession::with_latency(
            FareEstimator::global().clone(),
            FixedLatency::default(),
        );
        let start = tokio::time::Instant::now();
        let outcome = session.submit(&uber_form()).await.unwrap();

        assert!(matches!(outcome, Submission::Completed { .. }));
        assert!(start.elapsed() >= FixedLatency::DEFAULT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submission_returns_to_idle() {
        let session = EstimationSession::with_latency(
            FareEstimator::global().clone(),
            FixedLatency::default(),
        );

        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), session.submit(&uber_form())).await;
        assert!(timed_out.is_err());
        assert!(!session.is_pending());
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.history().await.is_empty());

        let outcome = session.submit(&uber_form()).await.unwrap();
        assert!(matches!(outcome, Submission::Completed { .. }));
        assert_eq!(session.phase(), SessionPhase::Done);
    }

    #[tokio::test]
    async fn test_overflowing_trip_is_not_recorded() {
        let session = instant_session();
        let err = session.submit(&TripForm::new("1e307", "10")).await.unwrap_err();

        assert!(matches!(
            err,
            SessionError::Estimate(EstimateError::Contract(ContractViolation::NonFiniteFare(_)))
        ));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_reuse_round_trips_fare() {
        let session = instant_session();
        let form = TripForm::new("12.7", "0.4")
            .with_distance_unit(DistanceUnit::Miles)
            .with_duration_unit(DurationUnit::Hours)
            .with_surge(1.7)
            .with_provider(Provider::NammaYatri);
        let Submission::Completed { record, .. } = session.submit(&form).await.unwrap() else {
            panic!("expected completed submission");
        };

        let reused = session.reuse(record.id()).await.unwrap();
        assert_eq!(reused.distance_unit, DistanceUnit::Miles);
        assert_eq!(reused.duration_unit, DurationUnit::Hours);
        assert_eq!(reused.provider, Provider::NammaYatri);

        let trip = validate(&reused).unwrap();
        let profile = FareEstimator::global()
            .pricing()
            .profile(Provider::NammaYatri)
            .unwrap();
        let again = estimate(&trip, profile).unwrap();
        assert_eq!(again.fare, record.fare());
        assert_eq!(session.history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_reuse_unknown_record() {
        let session = instant_session();
        let err = session.reuse(RecordId::new(42)).await.unwrap_err();
        assert!(matches!(err, SessionError::UnknownRecord(id) if id == RecordId::new(42)));
    }

    #[tokio::test]
    async fn test_missing_profile_is_an_error() {
        let pricing = PricingTable::from_profiles([(
            Provider::Ola,
            PricingProfile::new("Ola", 20.0, 58.76, 2.0),
        )])
        .unwrap();
        let session = EstimationSession::with_latency(FareEstimator::new(pricing), NoLatency);

        let err = session.submit(&uber_form()).await.unwrap_err();
        assert!(matches!(err, SessionError::Estimate(_)));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(!session.is_pending());
        assert!(session.history().await.is_empty());
    }
}
