use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clipboard::ClipboardMode;

/// Configuration for the watch service.
///
/// Nothing here is persisted by the service itself; the embedding
/// application owns where (and whether) this is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Interval between clipboard/preference polls, in milliseconds.
    pub poll_interval_ms: u64,

    /// Buffer size of event channels and subscriber streams.
    pub channel_capacity: usize,

    /// Clipboard modes to watch. Unsupported modes are skipped at runtime.
    pub modes: Vec<ClipboardMode>,
}

impl WatchConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 500,
            channel_capacity: 64,
            modes: vec![ClipboardMode::Clipboard],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_watches_the_main_clipboard() {
        let config = WatchConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.modes, vec![ClipboardMode::Clipboard]);
    }

    #[test]
    fn parses_partial_toml() {
        let config = WatchConfig::from_toml_str(
            r#"
            poll_interval_ms = 100
            modes = ["clipboard", "selection"]
            "#,
        )
        .unwrap();
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.channel_capacity, 64);
        assert_eq!(
            config.modes,
            vec![ClipboardMode::Clipboard, ClipboardMode::Selection]
        );
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(WatchConfig::from_toml_str(r#"modes = ["pasteboard"]"#).is_err());
    }
}
