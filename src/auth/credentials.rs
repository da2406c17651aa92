//! Transient credential envelope and its local validation.
//!
//! Credentials live only for the duration of one submission; they are
//! never persisted or logged.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

/// Local precondition failure. Never reaches the network; the user fixes
/// the form and resubmits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Please fill out all the fields.")]
    MissingFields,
    #[error("Passwords do not match!")]
    PasswordMismatch,
}

/// Email/password input for one login or signup attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Present only for signup.
    pub confirm_password: Option<String>,
}

impl Credentials {
    pub fn for_login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: None,
        }
    }

    pub fn for_signup(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: Some(confirm_password.into()),
        }
    }

    /// Login precondition: both fields non-empty.
    pub fn validate_login(&self) -> Result<(), CredentialError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(CredentialError::MissingFields);
        }
        Ok(())
    }

    /// Signup precondition: all three fields non-empty and the passwords
    /// agree. Missing fields win over a mismatch so the user fills the form
    /// before being told about typos.
    pub fn validate_signup(&self) -> Result<(), CredentialError> {
        let confirm = self.confirm_password.as_deref().unwrap_or_default();
        if self.email.trim().is_empty() || self.password.is_empty() || confirm.is_empty() {
            return Err(CredentialError::MissingFields);
        }
        if self.password != confirm {
            return Err(CredentialError::PasswordMismatch);
        }
        Ok(())
    }
}
