//! The traversal engine: prompt, execute, win detection.

use std::fmt;

use delve_clock::ClockBaton;
use delve_graph::{DungeonGraph, Room, RoomType};
use tracing::{debug, info};

use crate::{EngineError, Player};

/// The command that asks the clock for the time instead of moving.
pub const TIME_COMMAND: &str = "time";

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player moved into a start or mid room.
    Moved { room: String },
    /// The player moved into the end room. The game is over.
    Won { room: String },
    /// The player asked for the time. Nothing moved.
    Time(String),
}

/// The current room and where the player can go from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub location: String,
    pub connections: Vec<String>,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CURRENT LOCATION: {}", self.location)?;
        writeln!(f, "POSSIBLE CONNECTIONS: {}.", self.connections.join(", "))?;
        write!(f, "WHERE TO? >")
    }
}

/// End-of-game report: how many steps, and the path taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub steps: usize,
    pub path: Vec<String>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "YOU HAVE FOUND THE END ROOM. CONGRATULATIONS!")?;
        writeln!(
            f,
            "YOU TOOK {} STEPS. YOUR PATH TO VICTORY WAS:",
            self.steps
        )?;
        for room in &self.path {
            writeln!(f, "{room}")?;
        }
        Ok(())
    }
}

/// Drives one player through a loaded dungeon.
///
/// Room state never changes during play; only the [`Player`] moves.
#[derive(Debug)]
pub struct TraversalEngine {
    graph: DungeonGraph,
    player: Player,
    clock: Option<ClockBaton>,
}

impl TraversalEngine {
    /// Validates the dungeon and places a new player in the start room.
    ///
    /// # Errors
    /// [`EngineError::StartRooms`] / [`EngineError::EndRooms`] unless the
    /// graph has exactly one of each. Rooms whose type tag failed to
    /// parse count as neither.
    pub fn new(graph: DungeonGraph) -> Result<Self, EngineError> {
        let starts = graph.count_of(RoomType::Start);
        if starts != 1 {
            return Err(EngineError::StartRooms(starts));
        }
        let ends = graph.count_of(RoomType::End);
        if ends != 1 {
            return Err(EngineError::EndRooms(ends));
        }
        let start = graph.start().ok_or(EngineError::StartRooms(0))?;

        info!(start = %start.name, rooms = graph.len(), "game started");
        let player = Player::new(start.id);
        Ok(Self {
            graph,
            player,
            clock: None,
        })
    }

    /// Attaches the clock used by the time command.
    pub fn with_clock(mut self, clock: ClockBaton) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Detaches the clock, e.g. to shut it down once the game ends.
    pub fn take_clock(&mut self) -> Option<ClockBaton> {
        self.clock.take()
    }

    pub fn graph(&self) -> &DungeonGraph {
        &self.graph
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn current_room(&self) -> &Room {
        &self.graph.rooms()[self.player.current().0]
    }

    /// Whether the player is standing in the end room.
    pub fn is_won(&self) -> bool {
        self.current_room().is_type(RoomType::End)
    }

    /// The current room's name and its connections, in order.
    pub fn prompt(&self) -> Prompt {
        let room = self.current_room();
        Prompt {
            location: room.name.clone(),
            connections: self
                .graph
                .neighbor_names(room.id)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Runs one command.
    ///
    /// [`TIME_COMMAND`] runs the clock handshake and leaves the player
    /// where they are. Anything else is matched case-sensitively against
    /// the current room's connection names, first match wins. A match
    /// moves the player and appends one history entry; no match changes
    /// nothing.
    ///
    /// # Errors
    /// - [`EngineError::UnknownRoom`] for an unmatched command
    /// - [`EngineError::ClockUnavailable`] / [`EngineError::Clock`] if the
    ///   time can't be read
    /// - [`EngineError::GameOver`] once the end room has been reached
    pub async fn execute(&mut self, command: &str) -> Result<Outcome, EngineError> {
        if self.is_won() {
            return Err(EngineError::GameOver);
        }

        if command == TIME_COMMAND {
            let clock = self.clock.as_mut().ok_or(EngineError::ClockUnavailable)?;
            let text = clock.refresh_and_read().await?;
            return Ok(Outcome::Time(text));
        }

        let here = self.current_room();
        let target = here
            .connections
            .iter()
            .filter_map(|id| self.graph.room(*id))
            .find(|room| room.name == command)
            .map(|room| (room.id, room.name.clone()));

        let Some((id, name)) = target else {
            debug!(room = %here.name, command, "unknown room");
            return Err(EngineError::UnknownRoom(command.to_string()));
        };

        self.player.move_to(id, &name);
        debug!(room = %name, steps = self.player.visited_count(), "moved");

        if self.is_won() {
            info!(steps = self.player.visited_count(), "end room reached");
            Ok(Outcome::Won { room: name })
        } else {
            Ok(Outcome::Moved { room: name })
        }
    }

    /// Step count and path so far.
    pub fn summary(&self) -> Summary {
        Summary {
            steps: self.player.visited_count(),
            path: self.player.history().to_vec(),
        }
    }
}
