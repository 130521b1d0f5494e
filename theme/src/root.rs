//! The visual root the effective appearance is applied to.

#[cfg(test)]
#[path = "root_test.rs"]
mod root_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::mode::Appearance;

/// Target of the single presentation flag (e.g. the `dark` class on `<html>`).
///
/// Implementations must be idempotent: setting the current appearance again
/// changes nothing observable.
pub trait VisualRoot {
    fn set_appearance(&self, appearance: Appearance);
}

impl<T: VisualRoot + ?Sized> VisualRoot for Rc<T> {
    fn set_appearance(&self, appearance: Appearance) {
        (**self).set_appearance(appearance);
    }
}

/// In-process visual root holding one boolean flag.
///
/// Starts light, like a freshly loaded document. Counts how many calls
/// actually flipped the flag so callers can observe redundant writes.
#[derive(Debug, Default)]
pub struct AppearanceFlag {
    dark: Cell<bool>,
    flips: Cell<u32>,
}

impl AppearanceFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn appearance(&self) -> Appearance {
        Appearance::from_dark(self.dark.get())
    }

    /// Number of times the flag actually changed value.
    #[must_use]
    pub fn flips(&self) -> u32 {
        self.flips.get()
    }
}

impl VisualRoot for AppearanceFlag {
    fn set_appearance(&self, appearance: Appearance) {
        let dark = appearance.is_dark();
        if self.dark.replace(dark) != dark {
            self.flips.set(self.flips.get() + 1);
        }
    }
}
