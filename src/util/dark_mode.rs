//! Browser-backed theme collaborators.
//!
//! `BrowserStorage` persists the mode in `localStorage`, `PrefersDarkQuery`
//! answers `(prefers-color-scheme: dark)`, and `DocumentRoot` toggles the
//! `dark` class on the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside `hydrate` every collaborator no-ops: storage is empty, the OS is
//! reported light and the root ignores writes, which keeps server rendering
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use theme::{Appearance, ColorSchemeSignal, KeyValueStore, PreferenceStore, StoreError, ThemeConfig, ThemeResolver, VisualRoot};

#[cfg(feature = "hydrate")]
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class toggled on `<html>` while the dark appearance is applied.
pub const DARK_CLASS: &str = "dark";

/// The resolver type the shell runs with.
pub type BrowserResolver = ThemeResolver<BrowserStorage, PrefersDarkQuery, DocumentRoot>;

/// Build the shell's resolver, applying the stored mode immediately.
pub fn browser_resolver(config: &ThemeConfig) -> BrowserResolver {
    ThemeResolver::new(PreferenceStore::new(BrowserStorage, config), PrefersDarkQuery, DocumentRoot)
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`, queried on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrefersDarkQuery;

impl ColorSchemeSignal for PrefersDarkQuery {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// The document's `<html>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl VisualRoot for DocumentRoot {
    fn set_appearance(&self, appearance: Appearance) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, appearance.is_dark());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = appearance;
        }
    }
}
