//! Tracing configuration for sysclip.
//!
//! Structured logging through `tracing-subscriber`, with environment-aware
//! defaults and a `RUST_LOG` override.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Check if running in a development build.
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives: debug level for the workspace crates in
/// development, info in production.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let workspace_level = if is_dev { "debug" } else { "info" };
    vec![
        "info".to_string(),
        format!("sysclip={workspace_level}"),
        format!("sc_core={workspace_level}"),
        format!("sc_platform={workspace_level}"),
        format!("sc_app={workspace_level}"),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Call once from the embedding application's entry point, before any
/// service is built. A second call is a no-op, so library consumers that
/// already installed their own subscriber keep it.
///
/// # Errors
///
/// Returns `Err` when a filter directive in `RUST_LOG` is invalid or a
/// conflicting global subscriber registration fails mid-flight.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    if INITIALIZED.set(()).is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(build_filter_directives(is_development()).join(","))
    });

    registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_workspace_crates() {
        let directives = build_filter_directives(true);
        assert!(directives.iter().any(|d| d == "sc_platform=debug"));

        let directives = build_filter_directives(false);
        assert!(directives.iter().any(|d| d == "sc_platform=info"));
    }
}
