use super::*;

#[test]
fn unknown_mode_display_quotes_token() {
    let err = ThemeError::UnknownMode("purple".into());
    assert_eq!(err.to_string(), "unknown theme mode: \"purple\"");
}

#[test]
fn identity_status_display_includes_code() {
    assert_eq!(IdentityError::Status(401).to_string(), "identity service responded with status 401");
}

#[test]
fn identity_request_display_includes_detail() {
    let err = IdentityError::Request("connection reset".into());
    assert!(err.to_string().contains("connection reset"));
}

#[test]
fn store_write_display_includes_detail() {
    let err = StoreError::Write("QuotaExceededError".into());
    assert_eq!(err.to_string(), "storage write failed: QuotaExceededError");
}
