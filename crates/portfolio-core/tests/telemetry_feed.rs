//! Timing tests for the simulated coordinate feed
//!
//! Run on a paused tokio clock so periods elapse instantly.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use portfolio_core::telemetry::{run_feed, Coordinates, TelemetryConfig};

type Updates = Arc<Mutex<Vec<Coordinates>>>;

/// Spawn the feed and let it arm its first timer.
async fn spawn_feed(config: TelemetryConfig) -> (tokio::task::JoinHandle<()>, Updates) {
    let updates = Arc::new(Mutex::new(Vec::new()));
    let sink = updates.clone();
    let handle = tokio::spawn(run_feed(config, move |coords| {
        sink.lock().unwrap().push(coords);
    }));
    settle_tasks().await;
    (handle, updates)
}

async fn settle_tasks() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

/// Let the spawned feed observe the advanced clock.
async fn advance(duration: Duration) {
    tokio::time::advance(duration).await;
    settle_tasks().await;
}

#[tokio::test(start_paused = true)]
async fn no_update_before_first_period() {
    let config = TelemetryConfig::default();
    let (handle, updates) = spawn_feed(config).await;

    advance(Duration::from_millis(1_999)).await;
    assert!(updates.lock().unwrap().is_empty());

    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn updates_once_per_period_within_bounds() {
    let config = TelemetryConfig::default();
    let (handle, updates) = spawn_feed(config).await;

    for _ in 0..5 {
        advance(config.period).await;
    }

    let seen = updates.lock().unwrap().clone();
    assert_eq!(seen.len(), 5);
    assert!(seen.iter().all(|c| config.bounds.contains(c)));
    // Chance of every sample landing on the initial pair is negligible
    assert!(seen.iter().any(|c| *c != config.initial));

    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn no_updates_after_teardown() {
    let config = TelemetryConfig::default();
    let (handle, updates) = spawn_feed(config).await;

    advance(config.period).await;
    assert_eq!(updates.lock().unwrap().len(), 1);

    handle.abort();
    let _ = handle.await;

    advance(config.period * 10).await;
    assert_eq!(updates.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn custom_period_is_honoured() {
    let config = TelemetryConfig {
        period: Duration::from_millis(250),
        ..TelemetryConfig::default()
    };
    let (handle, updates) = spawn_feed(config).await;

    for _ in 0..4 {
        advance(config.period).await;
    }
    assert_eq!(updates.lock().unwrap().len(), 4);

    handle.abort();
}
