//! Directory naming and loading settings.

use serde::{Deserialize, Serialize};

/// Settings shared by [`DungeonWriter`](crate::DungeonWriter) and
/// [`DungeonReader`](crate::DungeonReader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Run directories are named `<dir_prefix><run id>`.
    pub dir_prefix: String,

    /// How many room files a run directory must contain.
    pub expected_rooms: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            dir_prefix: "delve.rooms.".to_string(),
            expected_rooms: 7,
        }
    }
}
