//! Rehydrates a dungeon graph from a run directory.

use std::fs;
use std::path::{Path, PathBuf};

use delve_graph::{DungeonGraph, RoomId};
use tracing::{debug, info, warn};

use crate::{FormatConfig, FormatError, RoomCodec, RoomDescriptor, TextCodec, latest_run_dir};

/// Loads dungeons written by [`DungeonWriter`](crate::DungeonWriter).
///
/// Loading happens in two passes. The first creates every room with no
/// connections; the second resolves each room's connection names to
/// [`RoomId`]s by exact name match. Each file only lists its own side of
/// an edge, so the second pass adds one-way links.
#[derive(Debug, Clone)]
pub struct DungeonReader<C: RoomCodec = TextCodec> {
    config: FormatConfig,
    codec: C,
}

impl DungeonReader<TextCodec> {
    pub fn new(config: FormatConfig) -> Self {
        Self::with_codec(config, TextCodec)
    }
}

impl Default for DungeonReader<TextCodec> {
    fn default() -> Self {
        Self::new(FormatConfig::default())
    }
}

impl<C: RoomCodec> DungeonReader<C> {
    pub fn with_codec(config: FormatConfig, codec: C) -> Self {
        Self { config, codec }
    }

    /// Finds the newest run directory under `root` and loads it.
    ///
    /// Returns the directory alongside the graph.
    pub fn load_latest(&self, root: &Path) -> Result<(PathBuf, DungeonGraph), FormatError> {
        let dir = latest_run_dir(root, &self.config.dir_prefix)?;
        let graph = self.load_dir(&dir)?;
        Ok((dir, graph))
    }

    /// Loads every room file in `dir`.
    ///
    /// # Errors
    /// - [`FormatError::Io`] on any read failure
    /// - [`FormatError::InFile`] if a descriptor doesn't parse
    /// - [`FormatError::RoomCount`] unless exactly `expected_rooms` files exist
    /// - [`FormatError::DuplicateRoom`] / [`FormatError::UnknownConnection`]
    ///   if the names don't line up
    ///
    /// An unrecognized type tag is *not* an error here. The room loads
    /// with `room_type: None` and start/end validation happens later.
    pub fn load_dir(&self, dir: &Path) -> Result<DungeonGraph, FormatError> {
        let descriptors = self.read_descriptors(dir)?;
        if descriptors.len() != self.config.expected_rooms {
            return Err(FormatError::RoomCount {
                dir: dir.to_path_buf(),
                expected: self.config.expected_rooms,
                found: descriptors.len(),
            });
        }

        let mut graph = DungeonGraph::new();
        let mut names = Vec::with_capacity(descriptors.len());
        for (path, descriptor) in &descriptors {
            let name = descriptor.name.clone().ok_or_else(|| FormatError::InFile {
                path: path.clone(),
                source: Box::new(FormatError::MissingField("ROOM NAME")),
            })?;
            if graph.find(&name).is_some() {
                return Err(FormatError::DuplicateRoom(name));
            }
            graph.add_room(name.clone(), descriptor.room_type);
            names.push(name);
        }

        for (index, (_, descriptor)) in descriptors.iter().enumerate() {
            let from = RoomId(index);
            for connection in &descriptor.connections {
                let Some(target) = connection else {
                    warn!(room = %names[index], "null connection skipped");
                    continue;
                };
                let to = graph
                    .find(target)
                    .map(|r| r.id)
                    .ok_or_else(|| FormatError::UnknownConnection {
                        room: names[index].clone(),
                        connection: target.clone(),
                    })?;
                graph.link(from, to)?;
            }
        }

        info!(dir = %dir.display(), rooms = graph.len(), "dungeon loaded");
        Ok(graph)
    }

    /// Parses every regular file in `dir`, sorted by file name.
    fn read_descriptors(&self, dir: &Path) -> Result<Vec<(PathBuf, RoomDescriptor)>, FormatError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| FormatError::io(dir, e))? {
            let entry = entry.map_err(|e| FormatError::io(dir, e))?;
            let file_type = entry.file_type().map_err(|e| FormatError::io(entry.path(), e))?;
            if file_type.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();

        let mut descriptors = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs::read_to_string(&path).map_err(|e| FormatError::io(&path, e))?;
            let descriptor = self.codec.decode(&text).map_err(|e| FormatError::InFile {
                path: path.clone(),
                source: Box::new(e),
            })?;
            debug!(file = %path.display(), "room file parsed");
            descriptors.push((path, descriptor));
        }
        Ok(descriptors)
    }
}
