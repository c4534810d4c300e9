//! Appearance preference domain model.

mod preference;

pub use preference::ColorPreference;
