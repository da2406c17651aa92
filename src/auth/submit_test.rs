use super::*;
use crate::state::session::SessionStatus;
use leptos::prelude::{GetUntracked, RwSignal};

// These run natively, where the API stubs refuse to make calls. That is
// enough to pin down the ordering contract: validation rejects before any
// transition, and a remote failure lands in the fail-transition.

#[tokio::test]
async fn login_validation_failure_leaves_session_untouched() {
    let session = RwSignal::new(SessionState::default());
    let result = submit_login(session, "", "secret1").await;

    assert_eq!(
        result,
        Err(AuthError::Validation(CredentialError::MissingFields))
    );
    let state = session.get_untracked();
    assert_eq!(state.status, SessionStatus::Idle);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn signup_mismatch_is_reported_before_any_transition() {
    let session = RwSignal::new(SessionState::default());
    let result = submit_signup(session, "a@b.com", "secret1", "secret2").await;

    assert_eq!(
        result,
        Err(AuthError::Validation(CredentialError::PasswordMismatch))
    );
    assert_eq!(session.get_untracked().status, SessionStatus::Idle);
}

#[tokio::test]
async fn remote_failure_drives_the_fail_transition() {
    let session = RwSignal::new(SessionState::default());
    let result = submit_login(session, "a@b.com", "secret1").await;

    assert!(matches!(result, Err(AuthError::Remote(_))));
    let state = session.get_untracked();
    assert_eq!(state.status, SessionStatus::Failed);
    assert!(state.error.is_some());
    assert!(state.user.is_none());
}

#[tokio::test]
async fn signup_remote_failure_uses_the_generic_message() {
    let session = RwSignal::new(SessionState::default());
    let result = submit_signup(session, "a@b.com", "secret1", "secret1").await;

    // Native stub failure is not a conflict, so the generic message shows.
    assert_eq!(
        result,
        Err(AuthError::Remote("Signup failed. Please try again.".to_owned()))
    );
    assert_eq!(
        session.get_untracked().error.as_deref(),
        Some("Signup failed. Please try again.")
    );
}

#[test]
fn destinations_map_to_their_routes() {
    assert_eq!(AuthDestination::ProfileDashboard.path(), "/dashboard/profile");
    assert_eq!(AuthDestination::CompleteProfile.path(), "/auth/userdetails");
}

// =============================================================
// Success routing and conflict messaging
// =============================================================

fn payload(picture: Option<&str>) -> AuthPayload {
    AuthPayload {
        id: "u-1".to_owned(),
        access_token: "T1".to_owned(),
        refresh_token: "T2".to_owned(),
        name: Some("Ada".to_owned()),
        email: "a@b.com".to_owned(),
        profile_picture: picture.map(str::to_owned),
        points: 0,
    }
}

#[test]
fn login_with_picture_routes_to_the_dashboard() {
    assert_eq!(
        login_destination(&payload(Some("https://cdn/p.png"))),
        AuthDestination::ProfileDashboard
    );
}

#[test]
fn login_without_picture_routes_to_profile_completion() {
    assert_eq!(
        login_destination(&payload(None)),
        AuthDestination::CompleteProfile
    );
}

#[test]
fn conflict_rejection_passes_the_server_message_through() {
    let err = ApiError::Rejected {
        status: 409,
        message: "Email already registered".to_owned(),
    };
    assert_eq!(signup_failure_message(&err), "Email already registered");
}

#[test]
fn non_conflict_rejections_get_the_generic_message() {
    let rejected = ApiError::Rejected {
        status: 500,
        message: "internal error".to_owned(),
    };
    assert_eq!(
        signup_failure_message(&rejected),
        "Signup failed. Please try again."
    );
    assert_eq!(
        signup_failure_message(&ApiError::Unavailable),
        "Signup failed. Please try again."
    );
}
