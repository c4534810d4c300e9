mod in_memory;
mod settings;

pub use in_memory::InMemoryAppearanceSource;
pub use settings::{SettingsAppearanceSource, SettingsFeed};
