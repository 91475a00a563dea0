//! Generation settings and the room type tag.

use serde::{Deserialize, Serialize};

use crate::GraphError;

// ---------------------------------------------------------------------------
// GraphConfig
// ---------------------------------------------------------------------------

/// Configuration for a generation run.
///
/// The defaults describe the stock dungeon: seven rooms, each with
/// three to six connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of rooms to generate.
    pub num_rooms: usize,

    /// Every room must end with at least this many connections.
    pub min_connections: usize,

    /// No room may ever hold more than this many connections.
    pub max_connections: usize,

    /// Upper bound on every rejection-sampling loop in the builder
    /// (name draws, start/end draws, room picks, and fill iterations).
    pub max_attempts: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            num_rooms: 7,
            min_connections: 3,
            max_connections: 6,
            max_attempts: 100_000,
        }
    }
}

impl GraphConfig {
    /// Checks that a graph with these bounds can exist at all.
    ///
    /// Rules:
    /// - at least two rooms (one start, one end)
    /// - `min_connections <= max_connections <= num_rooms - 1`
    /// - the name pool holds at least `num_rooms` names
    /// - `max_attempts > 0`
    pub fn validate(&self, pool_size: usize) -> Result<(), GraphError> {
        if self.num_rooms < 2 {
            return Err(GraphError::InvalidConfig(format!(
                "need at least 2 rooms, got {}",
                self.num_rooms
            )));
        }
        if self.min_connections > self.max_connections {
            return Err(GraphError::InvalidConfig(format!(
                "min_connections {} exceeds max_connections {}",
                self.min_connections, self.max_connections
            )));
        }
        if self.max_connections > self.num_rooms - 1 {
            return Err(GraphError::InvalidConfig(format!(
                "max_connections {} exceeds num_rooms - 1 ({})",
                self.max_connections,
                self.num_rooms - 1
            )));
        }
        if pool_size < self.num_rooms {
            return Err(GraphError::InvalidConfig(format!(
                "name pool holds {} names but {} rooms are needed",
                pool_size, self.num_rooms
            )));
        }
        if self.max_attempts == 0 {
            return Err(GraphError::InvalidConfig(
                "max_attempts must be positive".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RoomType
// ---------------------------------------------------------------------------

/// The role a room plays in the dungeon.
///
/// A finished graph has exactly one `Start`, exactly one `End`, and the
/// rest are `Mid`. Reaching the `End` room wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Start,
    Mid,
    End,
}

impl RoomType {
    /// The tag written into room descriptor files.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Start => "START_ROOM",
            Self::Mid => "MID_ROOM",
            Self::End => "END_ROOM",
        }
    }

    /// Parses a descriptor tag. Returns `None` for anything unrecognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "START_ROOM" => Some(Self::Start),
            "MID_ROOM" => Some(Self::Mid),
            "END_ROOM" => Some(Self::End),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_stock_dungeon() {
        let config = GraphConfig::default();
        assert_eq!(config.num_rooms, 7);
        assert_eq!(config.min_connections, 3);
        assert_eq!(config.max_connections, 6);
        assert!(config.validate(10).is_ok());
    }

    #[test]
    fn test_validate_rejects_min_above_max() {
        let config = GraphConfig {
            min_connections: 5,
            max_connections: 4,
            ..GraphConfig::default()
        };
        assert!(matches!(
            config.validate(10),
            Err(GraphError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_max_above_room_count() {
        let config = GraphConfig {
            max_connections: 7,
            ..GraphConfig::default()
        };
        let err = config.validate(10).unwrap_err();
        assert!(err.to_string().contains("num_rooms - 1"));
    }

    #[test]
    fn test_validate_rejects_small_pool() {
        let err = GraphConfig::default().validate(6).unwrap_err();
        assert!(err.to_string().contains("name pool"));
    }

    #[test]
    fn test_validate_rejects_single_room() {
        let config = GraphConfig {
            num_rooms: 1,
            min_connections: 0,
            max_connections: 0,
            ..GraphConfig::default()
        };
        assert!(config.validate(10).is_err());
    }

    #[test]
    fn test_room_type_tags() {
        for ty in [RoomType::Start, RoomType::Mid, RoomType::End] {
            assert_eq!(RoomType::from_tag(ty.tag()), Some(ty));
        }
        assert_eq!(RoomType::from_tag("UNASSIGNED_ROOM"), None);
        assert_eq!(RoomType::from_tag("start_room"), None);
        assert_eq!(RoomType::End.to_string(), "END_ROOM");
    }

    #[test]
    fn test_config_serializes_with_field_names() {
        let json = serde_json::to_string(&GraphConfig::default()).unwrap();
        assert!(json.contains("\"min_connections\":3"));
        let back: GraphConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GraphConfig::default());
    }
}
