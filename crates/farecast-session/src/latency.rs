//! Simulated latency before an estimate resolves.

use async_trait::async_trait;
use std::time::Duration;

/// Delay applied between validation and computing a fare.
#[async_trait]
pub trait LatencySimulator: Send + Sync + std::fmt::Debug {
    /// Waits until the estimate may resolve.
    async fn wait(&self);
}

/// Sleeps for a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLatency {
    delay: Duration,
}

impl FixedLatency {
    /// Default delay (2 seconds).
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

    /// Creates a latency that sleeps for `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixedLatency {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl LatencySimulator for FixedLatency {
    async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoLatency;

#[async_trait]
impl LatencySimulator for NoLatency {
    async fn wait(&self) {}
}
