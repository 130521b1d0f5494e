use super::*;

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("u123"), "/api/users/u123");
}

#[test]
fn theme_preference_payload_uses_wire_token() {
    assert_eq!(
        theme_preference_payload(ThemeMode::System),
        serde_json::json!({ "theme_preference": "system" })
    );
}

#[test]
fn auth_statuses_map_to_unauthenticated() {
    assert_eq!(status_error(401), IdentityError::Unauthenticated);
    assert_eq!(status_error(403), IdentityError::Unauthenticated);
}

#[test]
fn other_statuses_keep_their_code() {
    assert_eq!(status_error(500), IdentityError::Status(500));
    assert_eq!(status_error(404), IdentityError::Status(404));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn server_side_identity_is_unavailable() {
    assert_eq!(fetch_current_user().await, Err(IdentityError::Unavailable));
    assert_eq!(
        update_theme_preference("u1", ThemeMode::Dark).await,
        Err(IdentityError::Unavailable)
    );
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn server_side_session_load_is_anonymous() {
    assert!(theme::SessionLoader::new(BrowserIdentity).load().await.is_none());
}
