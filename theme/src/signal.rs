//! OS color-scheme signal.
//!
//! The resolver polls the signal whenever it recomputes a `System` mode
//! appearance. There is no change subscription: an OS switch is picked up at
//! the next recomputation trigger (`ThemeResolver::refresh` or a mode change).

#[cfg(test)]
#[path = "signal_test.rs"]
mod signal_test;

use std::cell::Cell;
use std::rc::Rc;

/// Synchronous "is a dark color scheme preferred" query.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

impl<T: ColorSchemeSignal + ?Sized> ColorSchemeSignal for Rc<T> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

/// A signal whose answer is set by hand.
///
/// Used by hosts that cannot detect the scheme (SSR) and by tests that flip
/// the OS preference between recomputations.
#[derive(Debug, Default)]
pub struct FixedScheme {
    dark: Cell<bool>,
}

impl FixedScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self { dark: Cell::new(dark) }
    }

    pub fn set(&self, dark: bool) {
        self.dark.set(dark);
    }
}

impl ColorSchemeSignal for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }
}
