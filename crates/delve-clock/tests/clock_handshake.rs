//! Integration tests for the clock publisher and baton handshake.
//!
//! Uses `start_paused = true` so sleeps resolve as soon as the runtime
//! goes idle and the handoff timing is deterministic.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use delve_clock::{ClockConfig, ClockError, ClockService, FixedTime, LocalTime};

// =========================================================================
// Helpers
// =========================================================================

fn july_18_2017_3_07pm() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 7, 18)
        .unwrap()
        .and_hms_opt(15, 7, 0)
        .unwrap()
}

const EXPECTED: &str = "3:07pm, Tuesday, July 18, 2017";

// =========================================================================
// Lock ownership
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_foreground_holds_lock_from_start() {
    let baton = ClockService::start(ClockConfig::default(), FixedTime(july_18_2017_3_07pm())).await;
    assert!(baton.is_held());

    // Plenty of publish intervals pass, but the publisher can't get in.
    tokio::time::sleep(Duration::from_secs(30)).await;

    let record = baton.current().unwrap();
    assert_eq!(record.publishes, 0);
    assert_eq!(record.text, None);
}

// =========================================================================
// Handshake
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_refresh_and_read_returns_published_time() {
    let mut baton =
        ClockService::start(ClockConfig::default(), FixedTime(july_18_2017_3_07pm())).await;

    let text = baton.refresh_and_read().await.unwrap();
    assert_eq!(text, EXPECTED);
    assert!(baton.is_held());
}

#[tokio::test(start_paused = true)]
async fn test_each_request_sees_a_fresh_publish() {
    let mut baton =
        ClockService::start(ClockConfig::default(), FixedTime(july_18_2017_3_07pm())).await;

    let first = baton.refresh().await.unwrap();
    assert!(first.publishes >= 1);

    // Between requests the foreground owns the lock again.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(baton.current().unwrap().publishes, first.publishes);

    let second = baton.refresh().await.unwrap();
    assert!(second.publishes > first.publishes);
    assert_eq!(second.text.as_deref(), Some(EXPECTED));
}

#[tokio::test(start_paused = true)]
async fn test_handoff_takes_the_configured_delay() {
    let config = ClockConfig {
        handoff_delay: Duration::from_millis(500),
        ..ClockConfig::default()
    };
    let mut baton = ClockService::start(config, FixedTime(july_18_2017_3_07pm())).await;

    let before = tokio::time::Instant::now();
    baton.refresh_and_read().await.unwrap();
    assert!(before.elapsed() >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn test_local_time_source_publishes_something() {
    let mut baton = ClockService::start(ClockConfig::default(), LocalTime).await;
    let text = baton.refresh_and_read().await.unwrap();
    assert!(text.ends_with(&chrono::Local::now().format("%Y").to_string()));
    assert!(text.contains("am, ") || text.contains("pm, "));
}

// =========================================================================
// Publisher
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_mirror_file_overwritten_on_publish() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currentTime.txt");
    let config = ClockConfig {
        mirror_path: Some(path.clone()),
        ..ClockConfig::default()
    };
    let mut baton = ClockService::start(config, FixedTime(july_18_2017_3_07pm())).await;

    assert!(!path.exists());
    baton.refresh_and_read().await.unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), format!("{EXPECTED}\n"));
}

#[tokio::test(start_paused = true)]
async fn test_mirror_failure_does_not_stop_publisher() {
    let dir = tempfile::tempdir().unwrap();
    let config = ClockConfig {
        mirror_path: Some(dir.path().join("missing").join("currentTime.txt")),
        ..ClockConfig::default()
    };
    let mut baton = ClockService::start(config, FixedTime(july_18_2017_3_07pm())).await;
    assert_eq!(baton.refresh_and_read().await.unwrap(), EXPECTED);
    assert_eq!(baton.refresh_and_read().await.unwrap(), EXPECTED);
}

#[tokio::test(start_paused = true)]
async fn test_baton_debug_output() {
    let baton = ClockService::start(ClockConfig::default(), FixedTime(july_18_2017_3_07pm())).await;
    let debug = format!("{baton:?}");
    assert!(debug.starts_with("ClockBaton"));
    assert!(debug.contains("handoff_delay"));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_completes() {
    let mut baton =
        ClockService::start(ClockConfig::default(), FixedTime(july_18_2017_3_07pm())).await;
    baton.refresh_and_read().await.unwrap();
    baton.shutdown().await;
}

#[test]
fn test_default_config_matches_two_second_cadence() {
    let config = ClockConfig::default();
    assert_eq!(config.publish_interval, Duration::from_secs(2));
    assert_eq!(config.handoff_delay, Duration::from_secs(2));
    assert!(config.mirror_path.is_none());
}

#[test]
fn test_error_messages() {
    assert_eq!(ClockError::NotPublished.to_string(), "no time has been published yet");
    assert_eq!(ClockError::PublisherStopped.to_string(), "clock publisher has stopped");
}
