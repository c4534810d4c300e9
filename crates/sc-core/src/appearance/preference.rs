use serde::{Deserialize, Serialize};
use std::fmt;

/// The system-wide color scheme preference.
///
/// Exactly one value is current at any time. Sources that cannot determine
/// a preference report [`NoPreference`]; sources that only distinguish
/// light from dark never report it.
///
/// [`NoPreference`]: ColorPreference::NoPreference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPreference {
    #[default]
    NoPreference,
    PreferDark,
    PreferLight,
    PreferHighContrast,
}

impl ColorPreference {
    /// Map the `org.freedesktop.appearance` `color-scheme` setting value.
    ///
    /// Unknown values map to `NoPreference`.
    pub fn from_fdo(value: u32) -> Self {
        match value {
            0 => ColorPreference::NoPreference,
            1 => ColorPreference::PreferDark,
            2 => ColorPreference::PreferLight,
            _other => {
                #[cfg(feature = "tracing")]
                tracing::warn!(value = _other, "unhandled color-scheme setting value");
                ColorPreference::NoPreference
            }
        }
    }

    /// Map a light-theme boolean, the shape Windows exposes through the
    /// `AppsUseLightTheme` registry value.
    pub fn from_light_flag(light: bool) -> Self {
        if light {
            ColorPreference::PreferLight
        } else {
            ColorPreference::PreferDark
        }
    }
}

impl fmt::Display for ColorPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorPreference::NoPreference => "no-preference",
            ColorPreference::PreferDark => "prefer-dark",
            ColorPreference::PreferLight => "prefer-light",
            ColorPreference::PreferHighContrast => "prefer-high-contrast",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fdo_mapping() {
        assert_eq!(ColorPreference::from_fdo(0), ColorPreference::NoPreference);
        assert_eq!(ColorPreference::from_fdo(1), ColorPreference::PreferDark);
        assert_eq!(ColorPreference::from_fdo(2), ColorPreference::PreferLight);
        assert_eq!(ColorPreference::from_fdo(7), ColorPreference::NoPreference);
    }

    #[test]
    fn light_flag_never_maps_to_no_preference() {
        assert_eq!(
            ColorPreference::from_light_flag(true),
            ColorPreference::PreferLight
        );
        assert_eq!(
            ColorPreference::from_light_flag(false),
            ColorPreference::PreferDark
        );
    }
}
