//! Theme state mirrored into the reactive graph.
//!
//! DESIGN
//! ======
//! The resolver owns the mode; this is the snapshot components render from.
//! The layout refreshes it in the same callback that mutates the resolver,
//! so the menu and the `<html>` class never disagree after an update.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use ::theme::{ColorSchemeSignal, KeyValueStore, ThemeMode, ThemeResolver, VisualRoot};

/// Current mode and the appearance applied for it.
///
/// The default matches a freshly loaded document: `System` mode, light root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub dark: bool,
}

impl ThemeState {
    /// Snapshot a resolver after a mutation.
    pub fn of<S, O, R>(resolver: &ThemeResolver<S, O, R>) -> Self
    where
        S: KeyValueStore,
        O: ColorSchemeSignal,
        R: VisualRoot,
    {
        Self { mode: resolver.mode(), dark: resolver.is_dark() }
    }
}
