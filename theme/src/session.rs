//! Authenticated user session and the identity collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell asks the identity service for the current user once per mount.
//! Having no session is a normal outcome: the shell runs anonymously and the
//! resolver skips the remote-write step.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::IdentityError;
use crate::mode::ThemeMode;

/// The signed-in user as returned by the identity service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Unique user identifier.
    pub id: String,
    /// Handle, if the user picked one.
    #[serde(default)]
    pub username: Option<String>,
    /// Full display name, if known.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    /// Theme mode stored on the profile. Unknown tokens decode as `None`.
    #[serde(default, deserialize_with = "deserialize_theme_preference")]
    pub theme_preference: Option<ThemeMode>,
}

impl UserSession {
    /// Name shown in the header: full name, then username, then `"User"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.full_name.as_deref())
            .or_else(|| non_empty(self.username.as_deref()))
            .unwrap_or("User")
    }

    /// Avatar fallback letter: first letter of username, then full name, then `U`.
    #[must_use]
    pub fn avatar_initial(&self) -> char {
        [self.username.as_deref(), self.full_name.as_deref()]
            .into_iter()
            .flatten()
            .find_map(|s| s.chars().next())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn deserialize_theme_preference<'de, D>(deserializer: D) -> Result<Option<ThemeMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|token| token.parse().ok()))
}

/// Remote identity service: current-user lookup and profile preference writes.
///
/// Futures are `?Send` because the browser implementation runs on the
/// single-threaded WASM executor.
#[async_trait::async_trait(?Send)]
pub trait IdentityClient {
    /// Fetch the currently authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] when there is no session or the request fails.
    async fn fetch_current_user(&self) -> Result<UserSession, IdentityError>;

    /// Store `mode` as the user's profile theme preference.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the update is not accepted.
    async fn update_theme_preference(&self, user_id: &str, mode: ThemeMode) -> Result<(), IdentityError>;
}

#[async_trait::async_trait(?Send)]
impl<T: IdentityClient + ?Sized> IdentityClient for &T {
    async fn fetch_current_user(&self) -> Result<UserSession, IdentityError> {
        (**self).fetch_current_user().await
    }

    async fn update_theme_preference(&self, user_id: &str, mode: ThemeMode) -> Result<(), IdentityError> {
        (**self).update_theme_preference(user_id, mode).await
    }
}

/// Loads the current session, mapping every failure to "anonymous".
#[derive(Clone, Debug)]
pub struct SessionLoader<C> {
    client: C,
}

impl<C: IdentityClient> SessionLoader<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Ask the identity service for the current user exactly once.
    ///
    /// No retries. Failures are expected and only logged at debug level.
    pub async fn load(&self) -> Option<UserSession> {
        match self.client.fetch_current_user().await {
            Ok(session) => {
                tracing::debug!(user_id = %session.id, "session loaded");
                Some(session)
            }
            Err(e) => {
                tracing::debug!(error = %e, "no session; continuing anonymously");
                None
            }
        }
    }
}
