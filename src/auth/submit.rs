//! Login and signup submission: validate, transition, one remote call.
//!
//! The session signal is passed in rather than pulled from context so the
//! flow can be driven (and tested) without a component tree.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use leptos::prelude::{RwSignal, Update};

use super::credentials::{CredentialError, Credentials};
use crate::net::api::{self, ApiError};
use crate::net::types::AuthPayload;
use crate::state::session::SessionState;

/// Message shown for signup rejections that are not the duplicate-account
/// conflict; those pass the server's message through verbatim.
const GENERIC_SIGNUP_FAILURE: &str = "Signup failed. Please try again.";

/// Where to send the user after a successful submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthDestination {
    /// The default authenticated landing view.
    ProfileDashboard,
    /// The mandatory profile-completion view.
    CompleteProfile,
}

impl AuthDestination {
    pub const fn path(self) -> &'static str {
        match self {
            Self::ProfileDashboard => "/dashboard/profile",
            Self::CompleteProfile => "/auth/userdetails",
        }
    }
}

/// A successful submission: where to navigate and what to toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub destination: AuthDestination,
    pub message: String,
}

/// Why a submission did not authenticate the user. The display string is
/// exactly what the toast shows.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Rejected locally before any network traffic.
    #[error(transparent)]
    Validation(#[from] CredentialError),
    /// Rejected by the server, or the request never completed.
    #[error("{0}")]
    Remote(String),
}

/// The login payload carries a picture only for completed profiles; its
/// absence routes through profile completion.
fn login_destination(payload: &AuthPayload) -> AuthDestination {
    if payload.profile_picture.is_some() {
        AuthDestination::ProfileDashboard
    } else {
        AuthDestination::CompleteProfile
    }
}

/// The duplicate-account conflict passes the server's message through
/// verbatim; every other rejection gets the generic one.
fn signup_failure_message(err: &ApiError) -> String {
    if err.is_conflict() {
        err.to_string()
    } else {
        GENERIC_SIGNUP_FAILURE.to_owned()
    }
}

/// Submit a login attempt.
///
/// Validation failures return before the session leaves its current state
/// and before any network call. A remote outcome drives exactly one
/// succeed- or fail-transition.
pub async fn submit_login(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<SubmitOutcome, AuthError> {
    let creds = Credentials::for_login(email, password);
    creds.validate_login()?;

    session.update(SessionState::start);
    match api::login(creds.email.trim(), &creds.password).await {
        Ok(ok) => {
            let destination = login_destination(&ok.data);
            let complete = destination == AuthDestination::ProfileDashboard;
            let tokens = ok.data.token_pair();
            let profile = ok.data.into_profile(complete);
            session.update(|s| s.succeed(profile, &tokens));

            Ok(SubmitOutcome {
                destination,
                message: ok.message,
            })
        }
        Err(err) => {
            let message = err.to_string();
            session.update(|s| s.fail(message.clone()));
            Err(AuthError::Remote(message))
        }
    }
}

/// Submit a signup attempt. A fresh account never has a complete profile,
/// so success always routes to profile completion.
pub async fn submit_signup(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<SubmitOutcome, AuthError> {
    let creds = Credentials::for_signup(email, password, confirm_password);
    creds.validate_signup()?;

    session.update(SessionState::start);
    let confirm = creds.confirm_password.as_deref().unwrap_or_default();
    match api::signup(creds.email.trim(), &creds.password, confirm).await {
        Ok(ok) => {
            let tokens = ok.data.token_pair();
            let profile = ok.data.into_profile(false);
            session.update(|s| s.succeed(profile, &tokens));
            Ok(SubmitOutcome {
                destination: AuthDestination::CompleteProfile,
                message: ok.message,
            })
        }
        Err(err) => {
            let message = signup_failure_message(&err);
            session.update(|s| s.fail(message.clone()));
            Err(AuthError::Remote(message))
        }
    }
}
