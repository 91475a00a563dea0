//! Error types for the format layer.

use std::path::PathBuf;

use delve_graph::GraphError;

/// Errors that can occur while writing, finding, or reading dungeon
/// files.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A filesystem call failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No run directory with the expected prefix exists.
    #[error("no dungeon directory matching {prefix:?} in {}", root.display())]
    NoDungeon { root: PathBuf, prefix: String },

    /// A required line is absent from a descriptor.
    #[error("missing {0} line")]
    MissingField(&'static str),

    /// A descriptor line doesn't match any known shape.
    #[error("line {line}: unexpected {content:?}")]
    Malformed { line: usize, content: String },

    /// A descriptor failed to parse; wraps the cause with the file path.
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<FormatError>,
    },

    /// The run directory holds the wrong number of room files.
    #[error("{}: expected {expected} rooms, found {found}", dir.display())]
    RoomCount {
        dir: PathBuf,
        expected: usize,
        found: usize,
    },

    /// Two descriptors claim the same room name.
    #[error("room {0} is described twice")]
    DuplicateRoom(String),

    /// A connection names a room that has no descriptor.
    #[error("room {room} connects to unknown room {connection}")]
    UnknownConnection { room: String, connection: String },

    /// Graph construction rejected the loaded data.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// JSON encode/decode failed.
    #[cfg(feature = "json")]
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
