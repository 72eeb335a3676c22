//! Contact form transport.
//!
//! There is no contact backend: `SimulatedSubmitter` waits out a fixed
//! delay and then succeeds or fails on a random roll, so both the success
//! and the error paths of the form get exercised.
//!
//! Client-side (hydrate): the delay is a `gloo-timers` future and the roll
//! comes from `Math.random()`. Elsewhere the delay is skipped.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::config::SiteConfig;
use crate::state::contact::ContactMessage;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("simulated submission failure")]
    Simulated,
}

/// Something that can deliver a contact message.
#[allow(async_fn_in_trait)]
pub trait Submitter {
    /// Deliver `message`, resolving exactly once.
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Decide a simulated outcome from a roll in `[0, 1)`.
///
/// # Errors
///
/// Returns `SubmitError::Simulated` when the roll lands outside the success band.
pub fn outcome_for_roll(roll: f64, success_rate: f64) -> Result<(), SubmitError> {
    if roll < success_rate { Ok(()) } else { Err(SubmitError::Simulated) }
}

pub struct SimulatedSubmitter<R> {
    delay_ms: u32,
    success_rate: f64,
    roll: R,
}

impl<R: Fn() -> f64> SimulatedSubmitter<R> {
    pub fn new(delay_ms: u32, success_rate: f64, roll: R) -> Self {
        Self { delay_ms, success_rate: success_rate.clamp(0.0, 1.0), roll }
    }

    pub fn from_config(config: &SiteConfig, roll: R) -> Self {
        Self::new(config.submit_delay_ms, config.submit_success_rate, roll)
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    #[must_use]
    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

impl<R: Fn() -> f64> Submitter for SimulatedSubmitter<R> {
    async fn submit(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        outcome_for_roll((self.roll)(), self.success_rate)
    }
}

/// Uniform roll in `[0, 1)` from the browser's RNG.
#[must_use]
pub fn browser_roll() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
