//! Theme configuration.
//!
//! The shell runs with [`ThemeConfig::default`]; tests and embedders that
//! share a storage namespace set their own key.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Key the persisted [`ThemeMode`](crate::ThemeMode) lives under.
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned() }
    }
}
