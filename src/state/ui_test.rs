use super::*;

#[test]
fn ui_state_defaults_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert!(!state.dropdown_open);
}

#[test]
fn toggling_menu_closes_dropdown() {
    let mut state = UiState::default();
    state.toggle_dropdown();
    state.toggle_menu();
    assert!(state.menu_open);
    assert!(!state.dropdown_open);
}

#[test]
fn toggling_dropdown_closes_menu() {
    let mut state = UiState::default();
    state.toggle_menu();
    state.toggle_dropdown();
    assert!(state.dropdown_open);
    assert!(!state.menu_open);
}

#[test]
fn close_all_resets_both() {
    let mut state = UiState::default();
    state.toggle_menu();
    state.close_all();
    assert_eq!(state, UiState::default());
}
