//! Codec trait and implementations for room descriptor files.
//!
//! The directory layer doesn't care how a descriptor is laid out in a
//! file, only that something implements [`RoomCodec`]. [`TextCodec`] is
//! the line format every dungeon directory uses; [`JsonCodec`] is handy
//! for debugging dumps.

use delve_graph::RoomType;
use tracing::warn;

use crate::{FormatError, RoomDescriptor};

const NAME_PREFIX: &str = "ROOM NAME: ";
const CONNECTION_PREFIX: &str = "CONNECTION ";
const TYPE_PREFIX: &str = "ROOM TYPE: ";
const NULL_NAME: &str = "NULL";
const NULL_CONNECTION: &str = "NULL CONNECTION";
const UNASSIGNED_TYPE: &str = "UNASSIGNED_ROOM";

/// Converts a [`RoomDescriptor`] to file contents and back.
///
/// `Send + Sync + 'static` so a writer or reader holding a codec can be
/// moved into a spawned task.
pub trait RoomCodec: Send + Sync + 'static {
    /// Renders a descriptor as file contents.
    fn encode(&self, room: &RoomDescriptor) -> Result<String, FormatError>;

    /// Parses file contents into a descriptor.
    fn decode(&self, text: &str) -> Result<RoomDescriptor, FormatError>;
}

// ---------------------------------------------------------------------------
// TextCodec
// ---------------------------------------------------------------------------

/// The line-oriented descriptor format:
///
/// ```text
/// ROOM NAME: <NAME>
/// CONNECTION 1: <NAME>
/// CONNECTION 2: <NAME>
/// ROOM TYPE: <START_ROOM|MID_ROOM|END_ROOM>
/// ```
///
/// Connection lines are numbered from 1 and kept in order. Decoding an
/// unknown type tag is not an error: it is logged and the descriptor's
/// `room_type` is left as `None`.
///
/// ```rust
/// use delve_format::{RoomCodec, RoomDescriptor, TextCodec};
/// use delve_graph::RoomType;
///
/// let room = RoomDescriptor {
///     name: Some("FOYER".into()),
///     connections: vec![Some("KITCHEN".into())],
///     room_type: Some(RoomType::Start),
/// };
/// let text = TextCodec.encode(&room).unwrap();
/// assert_eq!(
///     text,
///     "ROOM NAME: FOYER\nCONNECTION 1: KITCHEN\nROOM TYPE: START_ROOM\n"
/// );
/// assert_eq!(TextCodec.decode(&text).unwrap(), room);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl RoomCodec for TextCodec {
    fn encode(&self, room: &RoomDescriptor) -> Result<String, FormatError> {
        let mut out = String::new();

        match &room.name {
            Some(name) => out.push_str(&format!("{NAME_PREFIX}{name}\n")),
            None => out.push_str(&format!("{NULL_NAME}\n")),
        }

        for (i, connection) in room.connections.iter().enumerate() {
            match connection {
                Some(name) => {
                    out.push_str(&format!("{CONNECTION_PREFIX}{}: {name}\n", i + 1))
                }
                None => out.push_str(&format!("{NULL_CONNECTION}\n")),
            }
        }

        let tag = room.room_type.map(RoomType::tag).unwrap_or(UNASSIGNED_TYPE);
        out.push_str(&format!("{TYPE_PREFIX}{tag}\n"));
        Ok(out)
    }

    fn decode(&self, text: &str) -> Result<RoomDescriptor, FormatError> {
        let mut lines = text
            .lines()
            .map(str::trim_end)
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.is_empty());

        let name = match lines.next() {
            Some((_, NULL_NAME)) => None,
            Some((number, line)) => match line.strip_prefix(NAME_PREFIX) {
                Some(name) => Some(name.to_string()),
                None => return Err(malformed(number, line)),
            },
            None => return Err(FormatError::MissingField("ROOM NAME")),
        };

        let mut connections = Vec::new();
        for (number, line) in lines {
            if line == NULL_CONNECTION {
                connections.push(None);
            } else if let Some(rest) = line.strip_prefix(CONNECTION_PREFIX) {
                connections.push(Some(parse_connection(number, line, rest)?));
            } else if let Some(tag) = line.strip_prefix(TYPE_PREFIX) {
                let room_type = RoomType::from_tag(tag);
                if room_type.is_none() {
                    warn!(
                        room = name.as_deref().unwrap_or(NULL_NAME),
                        tag,
                        "unrecognized room type, leaving it unresolved"
                    );
                }
                return Ok(RoomDescriptor {
                    name,
                    connections,
                    room_type,
                });
            } else {
                return Err(malformed(number, line));
            }
        }

        Err(FormatError::MissingField("ROOM TYPE"))
    }
}

/// Parses the `<n>: <NAME>` tail of a connection line.
fn parse_connection(number: usize, line: &str, rest: &str) -> Result<String, FormatError> {
    let (index, name) = rest.split_once(": ").ok_or_else(|| malformed(number, line))?;
    if index.parse::<usize>().is_err() || name.is_empty() {
        return Err(malformed(number, line));
    }
    Ok(name.to_string())
}

fn malformed(line: usize, content: &str) -> FormatError {
    FormatError::Malformed {
        line,
        content: content.to_string(),
    }
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`RoomCodec`] that stores each descriptor as pretty-printed JSON.
///
/// Behind the `json` feature (enabled by default).
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl RoomCodec for JsonCodec {
    fn encode(&self, room: &RoomDescriptor) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(room)?)
    }

    fn decode(&self, text: &str) -> Result<RoomDescriptor, FormatError> {
        Ok(serde_json::from_str(text)?)
    }
}
