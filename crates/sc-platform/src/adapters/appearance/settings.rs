//! Settings-fed appearance source.
//!
//! The corpus this service targets has no portable channel to the OS
//! appearance setting, so the native feed stays outside: whichever shell
//! embeds the service forwards raw setting reports through a
//! [`SettingsFeed`], and this source normalizes them. Reports use either
//! the freedesktop `color-scheme` integer encoding or the Windows
//! `AppsUseLightTheme` boolean.

use std::sync::{Arc, Mutex, PoisonError};

use sc_core::ports::AppearanceSourcePort;
use sc_core::ColorPreference;

pub struct SettingsAppearanceSource {
    value: Arc<Mutex<ColorPreference>>,
}

impl SettingsAppearanceSource {
    /// A source with no report yet, answering `NoPreference` until the
    /// feed speaks.
    pub fn new() -> (Self, SettingsFeed) {
        Self::with_initial(ColorPreference::NoPreference)
    }

    pub fn with_initial(initial: ColorPreference) -> (Self, SettingsFeed) {
        let value = Arc::new(Mutex::new(initial));
        (
            Self {
                value: value.clone(),
            },
            SettingsFeed { value },
        )
    }
}

impl AppearanceSourcePort for SettingsAppearanceSource {
    fn current(&self) -> ColorPreference {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Write half handed to the native integration layer.
#[derive(Clone)]
pub struct SettingsFeed {
    value: Arc<Mutex<ColorPreference>>,
}

impl SettingsFeed {
    /// Report an `org.freedesktop.appearance` `color-scheme` value.
    pub fn report_color_scheme(&self, value: u32) {
        self.report(ColorPreference::from_fdo(value));
    }

    /// Report the Windows `AppsUseLightTheme` flag.
    pub fn report_light_theme(&self, light: bool) {
        self.report(ColorPreference::from_light_flag(light));
    }

    pub fn report(&self, preference: ColorPreference) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = preference;
    }
}
