//! Background clock publisher for Delve.
//!
//! A publisher task repeatedly formats the local time into a shared
//! [`ClockRecord`] guarded by a single Tokio mutex. The foreground game
//! loop owns that mutex for almost the whole session and lends it out
//! only when the player asks for the time.
//!
//! # Baton handshake
//!
//! The foreground takes the lock *before* the publisher is spawned, so
//! the publisher can't write anything until the first request. A request
//! then runs a fixed-delay baton pass:
//!
//! ```text
//! foreground: release ─── sleep(handoff_delay) ─── reacquire ── read
//! publisher:         lock ── format ── write ── release ── sleep(interval)
//! ```
//!
//! This is a timing contract, not a signal: the handoff delay must cover
//! one lock-format-write-release cycle of the publisher. Tokio's mutex
//! is fair, so a publisher already queued on the lock is always served
//! before the foreground's reacquire.

mod error;
mod format;

pub use error::ClockError;
pub use format::{FixedTime, LocalTime, TimeSource, format_clock};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Clock timing and output settings.
#[derive(Debug, Clone)]
pub struct ClockConfig {
    /// Pause between publishes.
    pub publish_interval: Duration,
    /// How long the foreground sleeps after releasing the lock.
    /// Must be long enough for one publish.
    pub handoff_delay: Duration,
    /// Sleep before aborting the publisher on shutdown, so an in-flight
    /// write can finish.
    pub shutdown_grace: Duration,
    /// When set, every publish also overwrites this file with the
    /// formatted time and a trailing newline.
    pub mirror_path: Option<PathBuf>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            publish_interval: Duration::from_secs(2),
            handoff_delay: Duration::from_secs(2),
            shutdown_grace: Duration::from_millis(50),
            mirror_path: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared record
// ---------------------------------------------------------------------------

/// The single shared clock value. Each publish overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockRecord {
    /// Formatted time, `None` until the first publish.
    pub text: Option<String>,
    /// Number of publishes so far.
    pub publishes: u64,
}

// ---------------------------------------------------------------------------
// Publisher
// ---------------------------------------------------------------------------

/// The background side: formats the time and writes it into the shared
/// record.
pub struct ClockService<S: TimeSource> {
    shared: Arc<Mutex<ClockRecord>>,
    source: S,
    config: ClockConfig,
}

impl<S: TimeSource> ClockService<S> {
    /// Takes the shared lock for the foreground, then spawns the
    /// publisher loop. The returned baton holds the lock.
    pub async fn start(config: ClockConfig, source: S) -> ClockBaton {
        let shared = Arc::new(Mutex::new(ClockRecord::default()));
        let guard = Arc::clone(&shared).lock_owned().await;

        let service = ClockService {
            shared: Arc::clone(&shared),
            source,
            config: config.clone(),
        };
        let publisher = tokio::spawn(service.run());

        debug!(
            interval_ms = config.publish_interval.as_millis() as u64,
            handoff_ms = config.handoff_delay.as_millis() as u64,
            "clock publisher started"
        );

        ClockBaton {
            shared,
            guard: Some(guard),
            publisher,
            config,
        }
    }

    /// Acquire, format, write, release. Returns the new record.
    pub async fn publish(&self) -> ClockRecord {
        let mut record = self.shared.lock().await;
        let text = format_clock(&self.source.now());

        if let Some(path) = &self.config.mirror_path {
            if let Err(e) = tokio::fs::write(path, format!("{text}\n")).await {
                warn!(path = %path.display(), error = %e, "clock mirror write failed");
            }
        }

        record.text = Some(text);
        record.publishes += 1;
        trace!(publishes = record.publishes, "clock published");
        record.clone()
    }

    async fn run(self) {
        loop {
            self.publish().await;
            tokio::time::sleep(self.config.publish_interval).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Foreground baton
// ---------------------------------------------------------------------------

/// The foreground side of the clock: holds the shared lock between
/// requests and runs the baton handshake on demand.
#[derive(Debug)]
pub struct ClockBaton {
    shared: Arc<Mutex<ClockRecord>>,
    guard: Option<OwnedMutexGuard<ClockRecord>>,
    publisher: JoinHandle<()>,
    config: ClockConfig,
}

impl ClockBaton {
    /// Lends the lock to the publisher for one handoff window, takes it
    /// back, and returns the record as it stands.
    ///
    /// # Errors
    /// [`ClockError::PublisherStopped`] if the publisher task has exited.
    pub async fn refresh(&mut self) -> Result<ClockRecord, ClockError> {
        if self.publisher.is_finished() {
            return Err(ClockError::PublisherStopped);
        }

        drop(self.guard.take());
        tokio::time::sleep(self.config.handoff_delay).await;
        let guard = Arc::clone(&self.shared).lock_owned().await;

        let record = guard.clone();
        self.guard = Some(guard);
        debug!(publishes = record.publishes, "clock handoff complete");
        Ok(record)
    }

    /// Runs the handshake and returns just the formatted time.
    ///
    /// # Errors
    /// - [`ClockError::PublisherStopped`] if the publisher task has exited
    /// - [`ClockError::NotPublished`] if nothing was published during
    ///   the handoff window
    pub async fn refresh_and_read(&mut self) -> Result<String, ClockError> {
        self.refresh().await?.text.ok_or(ClockError::NotPublished)
    }

    /// The record as seen through the held lock, without a handoff.
    pub fn current(&self) -> Option<&ClockRecord> {
        self.guard.as_deref()
    }

    /// Whether the foreground currently holds the lock.
    pub fn is_held(&self) -> bool {
        self.guard.is_some()
    }

    /// Stops the publisher after a short grace sleep.
    pub async fn shutdown(mut self) {
        tokio::time::sleep(self.config.shutdown_grace).await;
        self.publisher.abort();
        self.guard.take();
        info!("clock publisher stopped");
    }
}

impl Drop for ClockBaton {
    fn drop(&mut self) {
        self.publisher.abort();
    }
}
