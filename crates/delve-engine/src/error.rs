//! Error types for the traversal engine.

use delve_clock::ClockError;

/// Errors from building or driving a [`TraversalEngine`](crate::TraversalEngine).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The dungeon doesn't have exactly one start room. Fatal at startup.
    #[error("expected exactly one start room, found {0}")]
    StartRooms(usize),

    /// The dungeon doesn't have exactly one end room. Fatal at startup.
    #[error("expected exactly one end room, found {0}")]
    EndRooms(usize),

    /// The command isn't the time keyword or a connection of the
    /// current room.
    #[error("HUH? I DON'T UNDERSTAND THAT ROOM. TRY AGAIN.")]
    UnknownRoom(String),

    /// The player asked for the time but no clock is attached.
    #[error("the clock is not running")]
    ClockUnavailable,

    /// The clock handshake failed.
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// The player already reached the end room.
    #[error("the game is already over")]
    GameOver,
}

impl EngineError {
    /// Returns `true` for errors the play loop reports inline and then
    /// keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownRoom(_) | Self::ClockUnavailable | Self::Clock(_)
        )
    }
}
