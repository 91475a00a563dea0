//! The room arena: rooms addressed by index, edges stored as index lists.
//!
//! Rooms reference each other in both directions, so they live in one
//! `Vec` owned by [`DungeonGraph`] and point at each other through
//! [`RoomId`]s instead of references.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{GraphConfig, GraphError, RoomType};

/// Stable index of a room inside its [`DungeonGraph`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomId(pub usize);

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// `None` only when a loaded descriptor carried an unrecognized tag.
    pub room_type: Option<RoomType>,
    /// Connected rooms, in the order the edges were added.
    pub connections: Vec<RoomId>,
}

impl Room {
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.connections.contains(&other)
    }

    pub fn is_type(&self, ty: RoomType) -> bool {
        self.room_type == Some(ty)
    }
}

/// A set of rooms and their connections.
///
/// Built once per generation run and not mutated after it is written
/// out. The play run rehydrates its own copy from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonGraph {
    rooms: Vec<Room>,
}

impl DungeonGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Appends a room with no connections and returns its ID.
    pub fn add_room(
        &mut self,
        name: impl Into<String>,
        room_type: Option<RoomType>,
    ) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            id,
            name: name.into(),
            room_type,
            connections: Vec::new(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Looks up a room by exact (case-sensitive) name.
    pub fn find(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// The first room typed `Start`, if any.
    pub fn start(&self) -> Option<&Room> {
        self.rooms.iter().find(|r| r.is_type(RoomType::Start))
    }

    /// The first room typed `End`, if any.
    pub fn end(&self) -> Option<&Room> {
        self.rooms.iter().find(|r| r.is_type(RoomType::End))
    }

    /// Number of rooms carrying the given type.
    pub fn count_of(&self, ty: RoomType) -> usize {
        self.rooms.iter().filter(|r| r.is_type(ty)).count()
    }

    pub fn set_room_type(
        &mut self,
        id: RoomId,
        room_type: Option<RoomType>,
    ) -> Result<(), GraphError> {
        let room = self
            .rooms
            .get_mut(id.0)
            .ok_or(GraphError::UnknownRoom(id))?;
        room.room_type = room_type;
        Ok(())
    }

    /// Returns `true` if either room lists the other.
    pub fn are_connected(&self, a: RoomId, b: RoomId) -> bool {
        let forward = self.room(a).is_some_and(|r| r.is_connected_to(b));
        let backward = self.room(b).is_some_and(|r| r.is_connected_to(a));
        forward || backward
    }

    /// Adds the symmetric edge `a <-> b` as a single step.
    ///
    /// Returns `Ok(false)` and changes nothing if the rooms are already
    /// connected in either direction.
    pub fn connect(&mut self, a: RoomId, b: RoomId) -> Result<bool, GraphError> {
        let name_a = self.room(a).ok_or(GraphError::UnknownRoom(a))?.name.clone();
        if self.room(b).is_none() {
            return Err(GraphError::UnknownRoom(b));
        }
        if a == b {
            return Err(GraphError::SelfLoop(name_a));
        }
        if self.are_connected(a, b) {
            return Ok(false);
        }
        self.rooms[a.0].connections.push(b);
        self.rooms[b.0].connections.push(a);
        Ok(true)
    }

    /// Appends a one-way link `from -> to`.
    ///
    /// Used when rehydrating a dungeon, where each file lists only its
    /// own side of every edge. [`validate`](Self::validate) catches any
    /// asymmetry this leaves behind.
    pub fn link(&mut self, from: RoomId, to: RoomId) -> Result<(), GraphError> {
        if self.room(to).is_none() {
            return Err(GraphError::UnknownRoom(to));
        }
        let room = self
            .rooms
            .get_mut(from.0)
            .ok_or(GraphError::UnknownRoom(from))?;
        room.connections.push(to);
        Ok(())
    }

    /// Names of a room's connections, in order.
    pub fn neighbor_names(&self, id: RoomId) -> Vec<&str> {
        self.room(id)
            .map(|room| {
                room.connections
                    .iter()
                    .filter_map(|c| self.room(*c))
                    .map(|r| r.name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Breadth-first search from `from`. A room is reachable from itself.
    pub fn is_reachable(&self, from: RoomId, to: RoomId) -> bool {
        if self.room(from).is_none() || self.room(to).is_none() {
            return false;
        }
        let mut seen = vec![false; self.rooms.len()];
        let mut queue = VecDeque::from([from]);
        seen[from.0] = true;
        while let Some(id) = queue.pop_front() {
            if id == to {
                return true;
            }
            for next in &self.rooms[id.0].connections {
                if let Some(flag) = seen.get_mut(next.0) {
                    if !*flag {
                        *flag = true;
                        queue.push_back(*next);
                    }
                }
            }
        }
        false
    }

    /// Returns `true` once every room has at least `min_connections`.
    ///
    /// # Errors
    /// [`GraphError::DegreeOverflow`] if any room is above
    /// `max_connections`. That can only happen through a builder bug.
    pub fn is_full(&self, config: &GraphConfig) -> Result<bool, GraphError> {
        let mut full = true;
        for room in &self.rooms {
            if room.degree() > config.max_connections {
                return Err(GraphError::DegreeOverflow {
                    room: room.name.clone(),
                    degree: room.degree(),
                    max: config.max_connections,
                });
            }
            if room.degree() < config.min_connections {
                full = false;
            }
        }
        Ok(full)
    }

    /// Checks every structural invariant of a finished dungeon:
    /// room count, unique names, one start, one end, the rest mid,
    /// degree bounds, no self loops, no duplicate edges, and symmetry.
    pub fn validate(&self, config: &GraphConfig) -> Result<(), GraphError> {
        if self.rooms.len() != config.num_rooms {
            return Err(GraphError::Invariant(format!(
                "expected {} rooms, found {}",
                config.num_rooms,
                self.rooms.len()
            )));
        }

        for (i, room) in self.rooms.iter().enumerate() {
            if self.rooms[..i].iter().any(|r| r.name == room.name) {
                return Err(GraphError::Invariant(format!(
                    "duplicate room name {}",
                    room.name
                )));
            }
        }

        let starts = self.count_of(RoomType::Start);
        let ends = self.count_of(RoomType::End);
        let mids = self.count_of(RoomType::Mid);
        let expected_mids = self.rooms.len().saturating_sub(2);
        if starts != 1 || ends != 1 || mids != expected_mids {
            return Err(GraphError::Invariant(format!(
                "expected 1 start, 1 end, {expected_mids} mid; found {starts}, {ends}, {mids}"
            )));
        }

        self.is_full(config)?;

        for room in &self.rooms {
            if room.degree() < config.min_connections {
                return Err(GraphError::Invariant(format!(
                    "room {} has {} connections (min {})",
                    room.name,
                    room.degree(),
                    config.min_connections
                )));
            }
            for (i, other) in room.connections.iter().enumerate() {
                if *other == room.id {
                    return Err(GraphError::SelfLoop(room.name.clone()));
                }
                if room.connections[..i].contains(other) {
                    return Err(GraphError::Invariant(format!(
                        "room {} lists {other} twice",
                        room.name
                    )));
                }
                let back = self
                    .room(*other)
                    .ok_or(GraphError::UnknownRoom(*other))?;
                if !back.is_connected_to(room.id) {
                    return Err(GraphError::Invariant(format!(
                        "{} -> {} has no reverse edge",
                        room.name, back.name
                    )));
                }
            }
        }
        Ok(())
    }
}
