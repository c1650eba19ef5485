//! Poll-until-ready — the asynchronous-operation waiting primitive.
//!
//! Remote mutations (instance creation, instance stop, image creation) only
//! start a state transition; completion is observed by re-querying the
//! resource at a fixed interval. [`Poller`] bounds that loop and fails with a
//! distinguishable [`PollError::Timeout`] instead of waiting forever.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;

use crate::domain::error::PollError;

/// Interval between probes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Probe cap: 90 probes at 10 s is roughly 15 minutes.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 90;

/// Outcome of [`Poller::ensure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T> {
    /// The resource was already in the terminal state; the trigger never ran.
    Already(T),
    /// The trigger ran and the resource reached the terminal state.
    Transitioned(T),
}

impl<T> Settled<T> {
    /// The observed resource snapshot, whichever way it settled.
    pub fn into_inner(self) -> T {
        match self {
            Self::Already(found) | Self::Transitioned(found) => found,
        }
    }

    /// `true` when the trigger ran.
    #[must_use]
    pub fn transitioned(&self) -> bool {
        matches!(self, Self::Transitioned(_))
    }
}

/// Bounded fixed-interval poller.
#[derive(Debug, Clone, Copy)]
pub struct Poller {
    interval: Duration,
    max_attempts: u32,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, DEFAULT_MAX_ATTEMPTS)
    }
}

impl Poller {
    #[must_use]
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Probe until the terminal condition is observed.
    ///
    /// The probe reports `Some(snapshot)` once the resource is terminal; the
    /// first such snapshot is returned, not a later one. Probe errors
    /// propagate immediately and end the wait.
    ///
    /// # Errors
    ///
    /// Fails with [`PollError::Timeout`] after `max_attempts` probes without
    /// the condition holding, or with the probe's own error.
    pub async fn wait_for<T, P, Fut>(&self, what: &str, mut probe: P) -> Result<T>
    where
        P: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        for attempt in 1..=self.max_attempts {
            if let Some(found) = probe().await? {
                return Ok(found);
            }
            if attempt < self.max_attempts {
                tokio::time::sleep(self.interval).await;
            }
        }
        Err(PollError::Timeout {
            what: what.to_string(),
            attempts: self.max_attempts,
        }
        .into())
    }

    /// Trigger an asynchronous transition unless it already happened.
    ///
    /// When the first probe already reports the terminal state the trigger is
    /// never invoked. Otherwise the trigger runs exactly once (`FnOnce`) and
    /// the poller waits for the transition to land.
    ///
    /// # Errors
    ///
    /// Fails if the probe or the trigger fails, or if the wait times out.
    pub async fn ensure<T, P, Fut, Tr, TrFut>(
        &self,
        what: &str,
        mut probe: P,
        trigger: Tr,
    ) -> Result<Settled<T>>
    where
        P: FnMut() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
        Tr: FnOnce() -> TrFut,
        TrFut: Future<Output = Result<()>>,
    {
        if let Some(found) = probe().await? {
            return Ok(Settled::Already(found));
        }
        trigger().await?;
        Ok(Settled::Transitioned(self.wait_for(what, probe).await?))
    }
}
