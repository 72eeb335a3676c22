//! Clock-driven throttle and debounce gates.
//!
//! Callers pass the current time in milliseconds (`Date.now()` in the
//! browser), which keeps the gates deterministic under test.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Lets the first call through, then drops calls for `limit_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throttle {
    limit_ms: f64,
    open_at: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: u32) -> Self {
        Self { limit_ms: f64::from(limit_ms), open_at: None }
    }

    /// Whether a call at `now_ms` should run.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.open_at {
            Some(open_at) if now_ms < open_at => false,
            _ => {
                self.open_at = Some(now_ms + self.limit_ms);
                true
            }
        }
    }
}

/// Fires once `wait_ms` have passed since the most recent call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Debounce {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    #[must_use]
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms: f64::from(wait_ms), deadline: None }
    }

    #[must_use]
    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }

    /// Record a call, pushing the deadline out.
    pub fn call(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    /// Whether the quiet period has elapsed. Consumes the pending call.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
