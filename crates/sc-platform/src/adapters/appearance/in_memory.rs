use std::sync::{Mutex, PoisonError};

use sc_core::ports::AppearanceSourcePort;
use sc_core::ColorPreference;

/// In-memory appearance source for tests and headless environments.
pub struct InMemoryAppearanceSource {
    value: Mutex<ColorPreference>,
}

impl InMemoryAppearanceSource {
    pub fn new(initial: ColorPreference) -> Self {
        Self {
            value: Mutex::new(initial),
        }
    }

    /// Simulate the OS reporting a (possibly unchanged) preference.
    pub fn set(&self, preference: ColorPreference) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = preference;
    }
}

impl Default for InMemoryAppearanceSource {
    fn default() -> Self {
        Self::new(ColorPreference::NoPreference)
    }
}

impl AppearanceSourcePort for InMemoryAppearanceSource {
    fn current(&self) -> ColorPreference {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
