use super::*;

// =============================================================
// Login validation
// =============================================================

#[test]
fn login_rejects_empty_email() {
    let creds = Credentials::for_login("", "secret1");
    assert_eq!(creds.validate_login(), Err(CredentialError::MissingFields));
}

#[test]
fn login_rejects_empty_password() {
    let creds = Credentials::for_login("a@b.com", "");
    assert_eq!(creds.validate_login(), Err(CredentialError::MissingFields));
}

#[test]
fn login_rejects_whitespace_only_email() {
    let creds = Credentials::for_login("   ", "secret1");
    assert_eq!(creds.validate_login(), Err(CredentialError::MissingFields));
}

#[test]
fn login_accepts_filled_fields() {
    let creds = Credentials::for_login("a@b.com", "secret1");
    assert_eq!(creds.validate_login(), Ok(()));
}

// =============================================================
// Signup validation
// =============================================================

#[test]
fn signup_rejects_missing_confirmation() {
    let creds = Credentials::for_signup("a@b.com", "secret1", "");
    assert_eq!(creds.validate_signup(), Err(CredentialError::MissingFields));
}

#[test]
fn signup_rejects_mismatched_passwords() {
    let creds = Credentials::for_signup("a@b.com", "secret1", "secret2");
    assert_eq!(
        creds.validate_signup(),
        Err(CredentialError::PasswordMismatch)
    );
}

#[test]
fn signup_messages_distinguish_missing_from_mismatch() {
    let missing = CredentialError::MissingFields.to_string();
    let mismatch = CredentialError::PasswordMismatch.to_string();
    assert_ne!(missing, mismatch);
    assert!(mismatch.contains("match"));
}

#[test]
fn signup_accepts_matching_passwords() {
    let creds = Credentials::for_signup("a@b.com", "secret1", "secret1");
    assert_eq!(creds.validate_signup(), Ok(()));
}
