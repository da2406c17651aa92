use super::*;

fn profile(complete: bool) -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        name: Some("Ada".to_owned()),
        email: "a@b.com".to_owned(),
        profile_picture: None,
        is_profile_complete: complete,
        points: 42,
    }
}

fn tokens() -> TokenPair {
    TokenPair {
        access: "T1".to_owned(),
        refresh: "T2".to_owned(),
    }
}

// =============================================================
// Defaults and restore
// =============================================================

#[test]
fn default_session_is_idle_and_empty() {
    let state = SessionState::default();
    assert_eq!(state.status, SessionStatus::Idle);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

#[test]
fn restore_without_snapshot_is_idle() {
    let state = SessionState::restore();
    assert_eq!(state.status, SessionStatus::Idle);
    assert!(state.user.is_none());
}

#[test]
fn restore_after_succeed_round_trips_the_profile() {
    let mut state = SessionState::default();
    state.start();
    state.succeed(profile(true), &tokens());

    let restored = SessionState::restore();
    assert_eq!(restored.status, SessionStatus::Authenticated);
    assert_eq!(restored.user, Some(profile(true)));
    assert!(restored.error.is_none());
}

#[test]
fn restore_discards_a_corrupt_snapshot() {
    crate::util::storage::set(crate::util::storage::SESSION_SNAPSHOT, "not json");
    let state = SessionState::restore();
    assert_eq!(state.status, SessionStatus::Idle);
    assert_eq!(
        crate::util::storage::get(crate::util::storage::SESSION_SNAPSHOT),
        None
    );
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn start_enters_pending_and_clears_stale_error() {
    let mut state = SessionState::default();
    state.start();
    state.fail("nope");
    state.start();
    assert_eq!(state.status, SessionStatus::Pending);
    assert!(state.error.is_none());
}

#[test]
fn succeed_sets_user_and_persists_both_tokens() {
    let mut state = SessionState::default();
    state.start();
    state.succeed(profile(false), &tokens());

    assert_eq!(state.status, SessionStatus::Authenticated);
    assert_eq!(state.user, Some(profile(false)));
    assert!(state.error.is_none());
    assert_eq!(
        crate::util::storage::get(crate::util::storage::ACCESS_TOKEN),
        Some("T1".to_owned())
    );
    assert_eq!(
        crate::util::storage::get(crate::util::storage::REFRESH_TOKEN),
        Some("T2".to_owned())
    );
}

#[test]
fn fail_keeps_user_empty_and_records_the_message() {
    let mut state = SessionState::default();
    state.start();
    state.fail("Email already registered");
    assert_eq!(state.status, SessionStatus::Failed);
    assert!(state.user.is_none());
    assert_eq!(state.error.as_deref(), Some("Email already registered"));
    assert_eq!(
        crate::util::storage::get(crate::util::storage::ACCESS_TOKEN),
        None
    );
}

#[test]
fn repeated_fail_is_last_write_wins() {
    let mut state = SessionState::default();
    state.start();
    state.fail("first");
    state.fail("second");
    assert_eq!(state.status, SessionStatus::Failed);
    assert_eq!(state.error.as_deref(), Some("second"));
}

#[test]
fn sign_out_clears_state_and_storage() {
    let mut state = SessionState::default();
    state.start();
    state.succeed(profile(true), &tokens());
    state.sign_out();

    assert_eq!(state.status, SessionStatus::Idle);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
    assert_eq!(
        crate::util::storage::get(crate::util::storage::ACCESS_TOKEN),
        None
    );
    assert_eq!(
        crate::util::storage::get(crate::util::storage::REFRESH_TOKEN),
        None
    );
    assert_eq!(
        crate::util::storage::get(crate::util::storage::SESSION_SNAPSHOT),
        None
    );
}

#[test]
fn resubmission_restarts_from_failed() {
    let mut state = SessionState::default();
    state.start();
    state.fail("rejected");
    state.start();
    assert_eq!(state.status, SessionStatus::Pending);
    assert!(state.user.is_none());
}

// =============================================================
// Invariant: user is Some iff Authenticated
// =============================================================

#[test]
fn user_is_present_only_while_authenticated() {
    let mut state = SessionState::default();
    assert!(state.user.is_none());

    state.start();
    assert!(state.user.is_none());

    state.succeed(profile(true), &tokens());
    assert!(state.user.is_some());
    assert!(state.is_authenticated());

    state.start();
    state.fail("denied");
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn start_from_authenticated_drops_the_user() {
    let mut state = SessionState::default();
    state.start();
    state.succeed(profile(true), &tokens());

    state.start();
    assert_eq!(state.status, SessionStatus::Pending);
    assert!(state.user.is_none());
}
