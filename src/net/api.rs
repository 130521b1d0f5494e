//! REST API helpers for the identity service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call reports `IdentityError::Unavailable`, so the
//! shell renders anonymously and skips remote writes.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth/profile failures
//! degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use theme::{IdentityClient, IdentityError, ThemeMode, UserSession};

pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn theme_preference_payload(mode: ThemeMode) -> serde_json::Value {
    serde_json::json!({ "theme_preference": mode.as_str() })
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> IdentityError {
    if status == 401 || status == 403 {
        IdentityError::Unauthenticated
    } else {
        IdentityError::Status(status)
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// # Errors
///
/// Returns an [`IdentityError`] when not signed in, when the request fails,
/// or on the server.
pub async fn fetch_current_user() -> Result<UserSession, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        resp.json::<UserSession>()
            .await
            .map_err(|e| IdentityError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(IdentityError::Unavailable)
    }
}

/// Store the theme preference on the user's profile via `PATCH /api/users/{user_id}`.
///
/// # Errors
///
/// Returns an [`IdentityError`] if the request fails or is rejected.
pub async fn update_theme_preference(user_id: &str, mode: ThemeMode) -> Result<(), IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_endpoint(user_id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&theme_preference_payload(mode))
            .map_err(|e| IdentityError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(status_error(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, mode);
        Err(IdentityError::Unavailable)
    }
}

/// [`IdentityClient`] backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserIdentity;

#[async_trait::async_trait(?Send)]
impl IdentityClient for BrowserIdentity {
    async fn fetch_current_user(&self) -> Result<UserSession, IdentityError> {
        fetch_current_user().await
    }

    async fn update_theme_preference(&self, user_id: &str, mode: ThemeMode) -> Result<(), IdentityError> {
        update_theme_preference(user_id, mode).await
    }
}
