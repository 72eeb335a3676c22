//! Navigation bar state: mobile menu, scrolled styling, active link.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::SiteConfig;

/// Layout of one `section[id]` as measured in the document.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    /// Id of the section whose link carries `.active`.
    pub active: Option<String>,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A click anywhere outside both the toggle and the menu closes the menu.
    pub fn document_click(&mut self, inside_toggle: bool, inside_menu: bool) {
        if !inside_toggle && !inside_menu {
            self.close_menu();
        }
    }

    /// Recompute scroll-driven styling for the current scroll position.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds], config: &SiteConfig) {
        self.scrolled = is_scrolled(scroll_y, config.scrolled_threshold_px);
        self.active = active_section(sections, scroll_y, config.scroll_offset_px + config.active_link_slack_px)
            .map(str::to_owned);
    }

    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.as_deref() == Some(section_id)
    }
}

#[must_use]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// The last section (in document order) whose shifted band contains
/// `scroll_y`. Each band is `[top - lead, top - lead + height)`.
#[must_use]
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let start = s.top - lead;
            scroll_y >= start && scroll_y < start + s.height
        })
        .map(|s| s.id.as_str())
}

/// Scroll position that puts a section's top just below the fixed navbar.
#[must_use]
pub fn scroll_target(section_top: f64, offset: f64) -> f64 {
    section_top - offset
}
