//! Watch service configuration domain model.

mod watch_config;

pub use watch_config::WatchConfig;
