//! Error types for the graph layer.

use crate::RoomId;

/// Errors that can occur while configuring, building, or checking a
/// dungeon graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The configuration can never produce a valid graph.
    /// Caught before generation starts.
    #[error("invalid graph config: {0}")]
    InvalidConfig(String),

    /// Every name in the pool has already been handed out.
    #[error("name pool exhausted: {used} of {size} names used")]
    NamePoolExhausted { used: usize, size: usize },

    /// A rejection-sampling loop ran out of attempts.
    #[error("{phase}: gave up after {attempts} attempts")]
    AttemptsExhausted { phase: &'static str, attempts: u32 },

    /// A room ended up with more connections than allowed.
    ///
    /// This is a logic error in the builder, never a user error.
    #[error("room {room} has {degree} connections (max {max})")]
    DegreeOverflow {
        room: String,
        degree: usize,
        max: usize,
    },

    /// The room ID does not point into the arena.
    #[error("room {0} not found")]
    UnknownRoom(RoomId),

    /// A room cannot be connected to itself.
    #[error("room {0} cannot connect to itself")]
    SelfLoop(String),

    /// A finished graph failed a structural check.
    #[error("graph invariant violated: {0}")]
    Invariant(String),
}
