//! Theme resolver: the single owner of the current mode.
//!
//! DESIGN
//! ======
//! The resolver is explicit state owned by one shell instance. Consumers
//! read it through whatever context the host provides; there is no global.
//!
//! Every mutation commits synchronously: mode, local store and visual root
//! are consistent before the mutator returns. The remote profile write is
//! handed back as a [`PreferenceSync`] value for the caller to spawn, so no
//! await ever sits between a user action and the state commit.
//!
//! TRADE-OFFS
//! ==========
//! Remote writes are best-effort and unordered. Two quick changes produce two
//! independent syncs that may land in either order; the remote copy can lag
//! or end on the earlier choice while this device keeps the latest one.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::mode::{Appearance, ThemeMode};
use crate::root::VisualRoot;
use crate::session::{IdentityClient, UserSession};
use crate::signal::ColorSchemeSignal;
use crate::store::{KeyValueStore, PreferenceStore};

/// Reconciles profile, local and OS theme sources into one appearance.
#[derive(Debug)]
pub struct ThemeResolver<S, O, R> {
    prefs: PreferenceStore<S>,
    signal: O,
    root: R,
    mode: ThemeMode,
    session: Option<UserSession>,
    applied: Option<Appearance>,
}

impl<S, O, R> ThemeResolver<S, O, R>
where
    S: KeyValueStore,
    O: ColorSchemeSignal,
    R: VisualRoot,
{
    /// Create a resolver and apply the locally persisted mode right away.
    ///
    /// The local read is synchronous so the first paint already reflects the
    /// device preference while the session fetch is still in flight.
    pub fn new(prefs: PreferenceStore<S>, signal: O, root: R) -> Self {
        let mode = prefs.read();
        let mut resolver = Self { prefs, signal, root, mode, session: None, applied: None };
        resolver.apply();
        resolver
    }

    /// Seed the mode from the loaded session and apply it.
    ///
    /// A session preference wins over the local value. Without one, the
    /// local value is re-read. The local store is not written here.
    pub fn initialize(&mut self, session: Option<UserSession>) -> Appearance {
        let seed = session
            .as_ref()
            .and_then(|s| s.theme_preference)
            .unwrap_or_else(|| self.prefs.read());
        let from_session = session.as_ref().is_some_and(|s| s.theme_preference.is_some());
        tracing::debug!(mode = %seed, from_session, "theme seeded");
        self.mode = seed;
        self.session = session;
        self.apply()
    }

    /// Switch to `mode` on an explicit user selection.
    ///
    /// Commits the mode, persists it locally and applies it before returning.
    /// When a session exists the returned [`PreferenceSync`] carries the remote
    /// update; dispatching it is the caller's job and its outcome never
    /// affects local state.
    pub fn change_mode(&mut self, mode: ThemeMode) -> Option<PreferenceSync> {
        self.mode = mode;
        self.prefs.write(mode);
        let appearance = self.apply();
        tracing::debug!(%mode, dark = appearance.is_dark(), "theme changed");
        self.session
            .as_ref()
            .map(|s| PreferenceSync { user_id: s.id.clone(), mode })
    }

    /// [`change_mode`](Self::change_mode) for a raw token from the UI.
    ///
    /// Unrecognized tokens are a no-op: nothing is written or applied.
    pub fn request_mode(&mut self, token: &str) -> Option<PreferenceSync> {
        match token.parse() {
            Ok(mode) => self.change_mode(mode),
            Err(e) => {
                tracing::warn!(error = %e, current = %self.mode, "rejected theme change");
                None
            }
        }
    }

    /// Recompute the appearance without changing mode.
    ///
    /// In `System` mode this re-queries the OS signal.
    pub fn refresh(&mut self) -> Appearance {
        self.apply()
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Appearance the current mode resolves to at this instant.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.mode.appearance(&self.signal)
    }

    /// Whether the appearance last applied to the visual root is dark.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.applied.is_some_and(Appearance::is_dark)
    }

    #[must_use]
    pub fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    /// Push the effective appearance to the root if it changed.
    fn apply(&mut self) -> Appearance {
        let next = self.appearance();
        if self.applied != Some(next) {
            self.root.set_appearance(next);
            self.applied = Some(next);
        }
        next
    }
}

/// A pending best-effort write of the theme preference to the user profile.
#[must_use = "a preference sync does nothing until dispatched"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceSync {
    pub user_id: String,
    pub mode: ThemeMode,
}

impl PreferenceSync {
    /// Send the update once. Failures are logged and dropped; no retry.
    pub async fn dispatch<C: IdentityClient>(self, client: C) {
        match client.update_theme_preference(&self.user_id, self.mode).await {
            Ok(()) => tracing::debug!(user_id = %self.user_id, mode = %self.mode, "profile theme synced"),
            Err(e) => {
                tracing::warn!(user_id = %self.user_id, mode = %self.mode, error = %e, "profile theme sync failed");
            }
        }
    }
}
