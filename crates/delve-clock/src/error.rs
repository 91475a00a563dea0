//! Error types for the clock.

/// Errors returned by [`ClockBaton`](crate::ClockBaton).
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The handoff window closed before the publisher wrote anything.
    /// Means the handoff delay is shorter than one publish.
    #[error("no time has been published yet")]
    NotPublished,

    /// The publisher task is no longer running.
    #[error("clock publisher has stopped")]
    PublisherStopped,
}
