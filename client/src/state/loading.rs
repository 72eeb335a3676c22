//! Loading splash state.
//!
//! Two triggers race to hide the splash: a fixed minimum duration and the
//! window `load` event plus a short grace period. Whichever fires first
//! wins; the other is a no-op.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingTrigger {
    Timer,
    WindowLoad,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    hidden_by: Option<LoadingTrigger>,
}

impl LoadingState {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden_by.is_some()
    }

    #[must_use]
    pub fn hidden_by(&self) -> Option<LoadingTrigger> {
        self.hidden_by
    }

    /// Hide the splash. Returns `true` if this call hid it.
    pub fn hide(&mut self, trigger: LoadingTrigger) -> bool {
        if self.hidden_by.is_some() {
            return false;
        }
        self.hidden_by = Some(trigger);
        true
    }
}
