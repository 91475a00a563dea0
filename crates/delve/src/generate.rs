//! The generation run.

use std::path::{Path, PathBuf};

use delve_format::{DungeonWriter, FormatConfig};
use delve_graph::{GraphBuilder, GraphConfig, NamePool};
use rand::Rng;
use tracing::info;

use crate::DelveError;

/// Builds a dungeon from the stock name pool and writes it under `root`
/// as `<prefix><pid>`. Returns the new directory.
pub fn generate_into<R: Rng + ?Sized>(
    root: &Path,
    graph_config: &GraphConfig,
    format_config: &FormatConfig,
    rng: &mut R,
) -> Result<PathBuf, DelveError> {
    let mut pool = NamePool::default();
    let graph = GraphBuilder::new(graph_config.clone()).build(rng, &mut pool)?;
    let dir = DungeonWriter::new(format_config.clone()).write(&graph, root)?;
    info!(dir = %dir.display(), "generation run complete");
    Ok(dir)
}
