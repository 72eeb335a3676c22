use super::*;

#[test]
fn reveal_options_match_stylesheet_timing() {
    assert!((ObserverOptions::REVEAL.threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(ObserverOptions::REVEAL.root_margin, "0px 0px -50px 0px");
}

#[test]
fn lazy_options_fire_on_first_pixel() {
    assert!(ObserverOptions::LAZY.threshold.abs() < f64::EPSILON);
}

#[test]
fn reveal_selector_covers_card_kinds() {
    for class in [".fade-in", ".skill-category", ".project-card", ".service-card", ".stat-item"] {
        assert!(REVEAL_SELECTOR.contains(class), "{class}");
    }
}

#[test]
fn deferred_source_trims() {
    assert_eq!(deferred_source("  /images/a.webp "), Some("/images/a.webp"));
}

#[test]
fn blank_deferred_source_is_ignored() {
    assert_eq!(deferred_source(""), None);
    assert_eq!(deferred_source("   "), None);
}
