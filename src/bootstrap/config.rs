//! Configuration loading.
//!
//! sysclip persists nothing itself; the embedding application decides
//! where (and whether) a config file lives and hands the path down.

use std::path::Path;

use anyhow::Context;
use tracing::warn;

use sc_core::WatchConfig;

/// Load a [`WatchConfig`] from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<WatchConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    WatchConfig::from_toml_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Like [`load_config`], but a missing or unreadable file falls back to
/// defaults with a warning instead of failing startup.
pub fn load_config_or_default(path: impl AsRef<Path>) -> WatchConfig {
    match load_config(path.as_ref()) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, path = %path.as_ref().display(), "using default watch config");
            WatchConfig::default()
        }
    }
}
