//! Decorative effects: card hover lift, hero parallax, subtitle typing.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

/// Inline transform applied to a card while the pointer is over it.
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";

/// Hero transform for the current scroll position, or `None` once the hero
/// has scrolled out of the viewport (the last transform is kept).
#[must_use]
pub fn parallax_transform(scroll_y: f64, viewport_height: f64, rate: f64) -> Option<String> {
    if scroll_y >= viewport_height {
        return None;
    }
    // Adding 0.0 turns -0.0 into 0.0 so the top of the page renders "0px".
    let offset = scroll_y * rate + 0.0;
    Some(format!("translateY({offset}px)"))
}

#[must_use]
pub fn card_transform(hovered: bool) -> &'static str {
    if hovered { CARD_HOVER_TRANSFORM } else { "" }
}

/// Reveals a piece of text one character per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), shown: 0 }
    }

    /// Show one more character. Returns `false` once the text is complete.
    pub fn advance(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    #[must_use]
    pub fn visible_text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }
}
