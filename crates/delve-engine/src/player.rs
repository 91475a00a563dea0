//! The player's position and path.

use delve_graph::RoomId;

/// Where the player is and every room they have stepped into.
///
/// The start room is not part of the history; each successful move
/// appends exactly one entry, repeats included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    current: RoomId,
    history: Vec<String>,
}

impl Player {
    /// A fresh player standing in `start` with an empty history.
    pub fn new(start: RoomId) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    /// Room names visited, in order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Number of moves made. Always equal to `history().len()`.
    pub fn visited_count(&self) -> usize {
        self.history.len()
    }

    pub(crate) fn move_to(&mut self, room: RoomId, name: &str) {
        self.current = room;
        self.history.push(name.to_string());
    }
}
