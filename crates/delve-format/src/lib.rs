//! On-disk format for Delve dungeons.
//!
//! A generation run writes one plain-text descriptor per room into a
//! fresh directory named `<prefix><pid>`. A play run finds the newest
//! such directory and rehydrates the graph from it.
//!
//! - **Descriptors** ([`RoomDescriptor`]) — the textual view of a room:
//!   its name, its connections by name, and its type tag.
//! - **Codecs** ([`RoomCodec`], [`TextCodec`]) — how descriptors become
//!   file contents and back.
//! - **Directories** ([`DungeonWriter`], [`DungeonReader`],
//!   [`latest_run_dir`]) — where the files live.
//!
//! ```text
//! DungeonGraph → RoomDescriptor → TextCodec → <prefix><pid>/<ROOM NAME>
//! ```

mod codec;
mod config;
mod descriptor;
mod discover;
mod error;
mod reader;
mod writer;

pub use codec::{RoomCodec, TextCodec};
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use config::FormatConfig;
pub use descriptor::RoomDescriptor;
pub use discover::latest_run_dir;
pub use error::FormatError;
pub use reader::DungeonReader;
pub use writer::DungeonWriter;
