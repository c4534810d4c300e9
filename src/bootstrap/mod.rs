//! Process-level composition: tracing setup, configuration loading and
//! service wiring.

pub mod config;
pub mod tracing;
mod wiring;

pub use config::{load_config, load_config_or_default};
pub use tracing::init_tracing_subscriber;
pub use wiring::{build, build_with, Sysclip};
