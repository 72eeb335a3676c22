use super::*;

#[test]
fn missing_element_names_the_selector() {
    let err = DomError::MissingElement("#nav-menu".to_owned());
    assert_eq!(err.to_string(), "element not found: #nav-menu");
}

#[test]
fn report_init_passes_success_through() {
    assert!(report_init("navigation", Ok(())));
}

#[test]
fn report_init_swallows_failure() {
    assert!(!report_init("navigation", Err(DomError::NoDocument)));
}
