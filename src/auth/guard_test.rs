use super::*;
use crate::net::types::{TokenPair, UserProfile};
use crate::state::session::SessionStatus;

fn authenticated() -> SessionState {
    let mut state = SessionState::default();
    state.start();
    state.succeed(
        UserProfile {
            id: "u-1".to_owned(),
            email: "a@b.com".to_owned(),
            ..UserProfile::default()
        },
        &TokenPair {
            access: "T1".to_owned(),
            refresh: "T2".to_owned(),
        },
    );
    state
}

#[test]
fn idle_session_cannot_enter_protected() {
    let state = SessionState::default();
    assert!(!can_enter_protected(&state));
    assert!(can_enter_public_only(&state));
}

#[test]
fn pending_session_cannot_enter_protected() {
    let mut state = SessionState::default();
    state.start();
    assert_eq!(state.status, SessionStatus::Pending);
    assert!(!can_enter_protected(&state));
}

#[test]
fn failed_session_cannot_enter_protected() {
    let mut state = SessionState::default();
    state.start();
    state.fail("denied");
    assert!(!can_enter_protected(&state));
    assert!(can_enter_public_only(&state));
}

#[test]
fn authenticated_session_cannot_enter_public_only() {
    let state = authenticated();
    assert!(can_enter_protected(&state));
    assert!(!can_enter_public_only(&state));
}

#[test]
fn guards_flip_after_sign_out() {
    let mut state = authenticated();
    state.sign_out();
    assert!(!can_enter_protected(&state));
    assert!(can_enter_public_only(&state));
}
