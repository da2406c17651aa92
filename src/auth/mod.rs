//! The authentication flow: local credential validation, the login/signup
//! submitters, and the route guards.
//!
//! The flow is strictly one network call per submission. Validation runs
//! first and rejects locally; only then does the session store enter
//! `Pending` and the remote call go out. Both outcomes land back in the
//! session store through its named transitions.

pub mod credentials;
pub mod guard;
pub mod submit;

pub use credentials::{CredentialError, Credentials};
pub use guard::{can_enter_protected, can_enter_public_only};
pub use submit::{AuthDestination, AuthError, SubmitOutcome, submit_login, submit_signup};
