use super::*;

#[test]
fn starts_visible() {
    let state = LoadingState::default();
    assert!(!state.is_hidden());
    assert_eq!(state.hidden_by(), None);
}

#[test]
fn first_trigger_wins() {
    let mut state = LoadingState::default();
    assert!(state.hide(LoadingTrigger::WindowLoad));
    assert!(!state.hide(LoadingTrigger::Timer));
    assert!(state.is_hidden());
    assert_eq!(state.hidden_by(), Some(LoadingTrigger::WindowLoad));
}

#[test]
fn hide_is_idempotent() {
    let mut state = LoadingState::default();
    assert!(state.hide(LoadingTrigger::Timer));
    assert!(!state.hide(LoadingTrigger::Timer));
    assert_eq!(state.hidden_by(), Some(LoadingTrigger::Timer));
}
