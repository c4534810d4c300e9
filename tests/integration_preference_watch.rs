//! Integration test for the appearance preference watch flow.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, timeout};

use sc_platform::adapters::appearance::{InMemoryAppearanceSource, SettingsAppearanceSource};
use sc_platform::adapters::clipboard::InMemoryClipboard;
use sysclip::{bootstrap, ColorPreference, Sysclip, WatchConfig};

fn fast_config() -> WatchConfig {
    WatchConfig {
        poll_interval_ms: 10,
        ..WatchConfig::default()
    }
}

fn wire(source: Arc<dyn sc_core::ports::AppearanceSourcePort>) -> Sysclip {
    bootstrap::build_with(
        &fast_config(),
        Arc::new(InMemoryClipboard::new()),
        source,
        None,
    )
}

async fn settle() {
    sleep(Duration::from_millis(100)).await;
}

#[tokio::test]
async fn initial_subscription_synchronously_yields_current_value() {
    let source = Arc::new(InMemoryAppearanceSource::new(ColorPreference::PreferDark));
    let sysclip = wire(source);

    // Before the watchers even run, the starting state is delivered.
    let mut stream = sysclip.appearance.on_preference_change();
    assert_eq!(stream.try_recv(), Some(ColorPreference::PreferDark));
    assert_eq!(stream.try_recv(), None);

    assert_eq!(
        sysclip.appearance.system_preference(),
        ColorPreference::PreferDark
    );

    sysclip.shutdown().await;
}

#[tokio::test]
async fn repeated_identical_reports_emit_once() {
    let source = Arc::new(InMemoryAppearanceSource::new(ColorPreference::NoPreference));
    let sysclip = wire(source.clone());

    let mut stream = sysclip.appearance.on_preference_change();
    assert_eq!(stream.try_recv(), Some(ColorPreference::NoPreference));

    sysclip.start().await.unwrap();
    settle().await;

    // The OS reports dark, then dark again with no change in between.
    source.set(ColorPreference::PreferDark);
    let value = timeout(Duration::from_secs(2), stream.recv())
        .await
        .expect("transition must arrive")
        .unwrap();
    assert_eq!(value, ColorPreference::PreferDark);

    source.set(ColorPreference::PreferDark);
    settle().await;
    assert_eq!(stream.try_recv(), None, "duplicate report must not re-emit");

    sysclip.shutdown().await;
}

#[tokio::test]
async fn transitions_arrive_in_order() {
    let source = Arc::new(InMemoryAppearanceSource::new(ColorPreference::PreferLight));
    let sysclip = wire(source.clone());

    let mut stream = sysclip.appearance.on_preference_change();
    assert_eq!(stream.try_recv(), Some(ColorPreference::PreferLight));

    sysclip.start().await.unwrap();
    settle().await;

    source.set(ColorPreference::PreferDark);
    let first = timeout(Duration::from_secs(2), stream.recv()).await.unwrap();
    assert_eq!(first, Some(ColorPreference::PreferDark));

    source.set(ColorPreference::PreferHighContrast);
    let second = timeout(Duration::from_secs(2), stream.recv()).await.unwrap();
    assert_eq!(second, Some(ColorPreference::PreferHighContrast));

    sysclip.shutdown().await;
}

#[tokio::test]
async fn settings_feed_reports_flow_end_to_end() {
    let (source, feed) = SettingsAppearanceSource::new();
    let sysclip = wire(Arc::new(source));

    let mut stream = sysclip.appearance.on_preference_change();
    assert_eq!(stream.try_recv(), Some(ColorPreference::NoPreference));

    sysclip.start().await.unwrap();
    settle().await;

    // freedesktop encoding: 1 means prefer-dark.
    feed.report_color_scheme(1);
    let value = timeout(Duration::from_secs(2), stream.recv()).await.unwrap();
    assert_eq!(value, Some(ColorPreference::PreferDark));

    // Windows-style boolean: light theme on.
    feed.report_light_theme(true);
    let value = timeout(Duration::from_secs(2), stream.recv()).await.unwrap();
    assert_eq!(value, Some(ColorPreference::PreferLight));

    sysclip.shutdown().await;
}
