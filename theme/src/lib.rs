//! Theme-preference reconciliation for the SocialConnect page shell.
//!
//! This crate owns the logic that decides whether the shell renders light or
//! dark. Three sources compete: the signed-in user's profile, the preference
//! persisted on this device, and the OS color-scheme signal. [`ThemeResolver`]
//! folds them into one effective [`Appearance`] and is the only thing that
//! writes to the [`VisualRoot`].
//!
//! Every collaborator sits behind a trait so the crate stays free of browser
//! APIs. The `socialconnect` client crate supplies `localStorage`,
//! `matchMedia` and `<html>`-backed implementations; tests use the in-memory
//! ones exported here.

pub mod config;
pub mod error;
pub mod mode;
pub mod resolver;
pub mod root;
pub mod session;
pub mod signal;
pub mod store;

pub use config::{DEFAULT_STORAGE_KEY, ThemeConfig};
pub use error::{IdentityError, StoreError, ThemeError};
pub use mode::{Appearance, ThemeMode};
pub use resolver::{PreferenceSync, ThemeResolver};
pub use root::{AppearanceFlag, VisualRoot};
pub use session::{IdentityClient, SessionLoader, UserSession};
pub use signal::{ColorSchemeSignal, FixedScheme};
pub use store::{KeyValueStore, MemoryStore, PreferenceStore};
