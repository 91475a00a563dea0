//! The textual view of one room.

use delve_graph::{DungeonGraph, Room, RoomType};
use serde::{Deserialize, Serialize};

/// One room as it appears in a descriptor file.
///
/// Connections are stored by name, in the order the edges were added.
/// `None` entries exist only so that damaged files round-trip: a
/// nameless room prints as `NULL`, a missing connection as
/// `NULL CONNECTION`, and an unknown type as `UNASSIGNED_ROOM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDescriptor {
    pub name: Option<String>,
    pub connections: Vec<Option<String>>,
    pub room_type: Option<RoomType>,
}

impl RoomDescriptor {
    /// Describes `room`, resolving its connection IDs through `graph`.
    pub fn from_room(graph: &DungeonGraph, room: &Room) -> Self {
        Self {
            name: Some(room.name.clone()),
            connections: room
                .connections
                .iter()
                .map(|id| graph.room(*id).map(|r| r.name.clone()))
                .collect(),
            room_type: room.room_type,
        }
    }
}
