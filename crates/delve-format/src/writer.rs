//! Writes a dungeon graph out as a run directory.

use std::fs;
use std::path::{Path, PathBuf};

use delve_graph::DungeonGraph;
use tracing::{debug, info};

use crate::{FormatConfig, FormatError, RoomCodec, RoomDescriptor, TextCodec};

/// Writes one descriptor file per room into a new run directory.
///
/// Each file is named after its room. The directory is created with
/// [`fs::create_dir`], so writing never reuses or merges into an
/// existing run.
#[derive(Debug, Clone)]
pub struct DungeonWriter<C: RoomCodec = TextCodec> {
    config: FormatConfig,
    codec: C,
}

impl DungeonWriter<TextCodec> {
    /// Creates a writer using the standard line format.
    pub fn new(config: FormatConfig) -> Self {
        Self::with_codec(config, TextCodec)
    }
}

impl Default for DungeonWriter<TextCodec> {
    fn default() -> Self {
        Self::new(FormatConfig::default())
    }
}

impl<C: RoomCodec> DungeonWriter<C> {
    pub fn with_codec(config: FormatConfig, codec: C) -> Self {
        Self { config, codec }
    }

    /// Writes `graph` into `<root>/<prefix><pid>` using this process's ID.
    pub fn write(&self, graph: &DungeonGraph, root: &Path) -> Result<PathBuf, FormatError> {
        self.write_run(graph, root, std::process::id())
    }

    /// Writes `graph` into `<root>/<prefix><run_id>` and returns that path.
    ///
    /// # Errors
    /// [`FormatError::Io`] if the directory already exists or any file
    /// can't be created.
    pub fn write_run(
        &self,
        graph: &DungeonGraph,
        root: &Path,
        run_id: u32,
    ) -> Result<PathBuf, FormatError> {
        let dir = root.join(format!("{}{}", self.config.dir_prefix, run_id));
        fs::create_dir(&dir).map_err(|e| FormatError::io(&dir, e))?;

        for room in graph.rooms() {
            let descriptor = RoomDescriptor::from_room(graph, room);
            let text = self.codec.encode(&descriptor)?;
            let path = dir.join(&room.name);
            fs::write(&path, text).map_err(|e| FormatError::io(&path, e))?;
            debug!(room = %room.name, degree = room.degree(), "room file written");
        }

        info!(dir = %dir.display(), rooms = graph.len(), "dungeon written");
        Ok(dir)
    }
}
