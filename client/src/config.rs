//! Timing and geometry constants shared by every page controller.
//!
//! DESIGN
//! ======
//! One `SiteConfig` value is provided through Leptos context by `App`, so
//! components read timings from context instead of scattering literals.
//! Defaults match the behavior the stylesheet transitions are tuned for.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default fade/slide transition length, mirrored by the stylesheet.
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 300;
/// Height of the fixed navbar that scroll targets must clear.
pub const DEFAULT_SCROLL_OFFSET_PX: f64 = 70.0;
/// Minimum time the loading splash stays on screen.
pub const DEFAULT_LOADING_DURATION_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub animation_duration_ms: u32,
    pub scroll_offset_px: f64,
    pub loading_duration_ms: u32,
    /// Delay between the window `load` event and hiding the splash.
    pub load_grace_ms: u32,
    /// Scroll distance after which the navbar gets `.scrolled`.
    pub scrolled_threshold_px: f64,
    /// Extra slack subtracted from section tops when picking the active link.
    pub active_link_slack_px: f64,
    pub scroll_throttle_ms: u32,
    pub typing_interval_ms: u32,
    pub parallax_rate: f64,
    pub submit_delay_ms: u32,
    /// Probability in `[0, 1]` that the simulated submission succeeds.
    pub submit_success_rate: f64,
    pub notification_show_delay_ms: u32,
    pub notification_dismiss_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            scroll_offset_px: DEFAULT_SCROLL_OFFSET_PX,
            loading_duration_ms: DEFAULT_LOADING_DURATION_MS,
            load_grace_ms: 500,
            scrolled_threshold_px: 50.0,
            active_link_slack_px: 50.0,
            scroll_throttle_ms: 10,
            typing_interval_ms: 50,
            parallax_rate: -0.5,
            submit_delay_ms: 2000,
            submit_success_rate: 0.9,
            notification_show_delay_ms: 100,
            notification_dismiss_ms: 5000,
        }
    }
}

impl SiteConfig {
    /// The typing effect starts once the splash has had time to fade out.
    #[must_use]
    pub fn typing_start_delay_ms(&self) -> u32 {
        self.loading_duration_ms.saturating_add(self.load_grace_ms)
    }

    /// How long a dismissed notification keeps its exit transition.
    #[must_use]
    pub fn notification_exit_ms(&self) -> u32 {
        self.animation_duration_ms
    }
}
