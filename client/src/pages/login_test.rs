use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  a@b.com  ", "secret"),
        Ok(("a@b.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_credentials_requires_at_sign() {
    assert_eq!(validate_credentials("ab.com", "secret"), Err("Enter a valid email address."));
}

#[test]
fn validate_credentials_enforces_minimum_password_length() {
    assert_eq!(
        validate_credentials("a@b.com", "12345"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_credentials("a@b.com", "123456").is_ok());
}

#[test]
fn password_is_not_trimmed() {
    assert_eq!(
        validate_credentials("a@b.com", " pass  "),
        Ok(("a@b.com".to_owned(), " pass  ".to_owned()))
    );
}

#[test]
fn submit_label_reflects_mode_and_busy() {
    assert_eq!(submit_label(AuthMode::Login, false), "Login");
    assert_eq!(submit_label(AuthMode::Register, false), "Create Account");
    assert_eq!(submit_label(AuthMode::Register, true), "Processing...");
}

#[test]
fn optional_name_drops_blank_input() {
    assert_eq!(optional_name("  "), None);
    assert_eq!(optional_name(" Ada "), Some("Ada".to_owned()));
}
