//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Starts pending on every shell mount, server render included, and is
//! filled once by the session load. Header components read it to decide what
//! the avatar slot shows.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use theme::UserSession;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserSession>,
    pub loading: bool,
}

/// What the header avatar slot renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarSlot {
    /// Session load still in flight; the slot keeps its size.
    Pending,
    /// Anonymous visitor.
    Hidden,
    Picture { src: String, label: String },
    Initial { initial: char, label: String },
}

impl AuthState {
    /// State for a freshly mounted shell whose session load has not finished.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// State once the session load has settled.
    pub fn loaded(user: Option<UserSession>) -> Self {
        Self { user, loading: false }
    }

    /// Resolve the avatar slot for the current state.
    pub fn avatar(&self) -> AvatarSlot {
        if self.loading {
            return AvatarSlot::Pending;
        }
        let Some(user) = &self.user else {
            return AvatarSlot::Hidden;
        };
        let label = user.display_name().to_owned();
        match user.profile_picture_url.as_deref().filter(|src| !src.is_empty()) {
            Some(src) => AvatarSlot::Picture { src: src.to_owned(), label },
            None => AvatarSlot::Initial { initial: user.avatar_initial(), label },
        }
    }
}
