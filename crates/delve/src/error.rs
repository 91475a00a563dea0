//! Unified error type for the Delve binaries.

use delve_engine::EngineError;
use delve_format::FormatError;
use delve_graph::GraphError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant lets `?` convert sub-crate
/// errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum DelveError {
    /// Generation failed (bad config, exhausted attempts, broken graph).
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A run directory couldn't be written, found, or parsed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The engine refused the dungeon or a command.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Terminal I/O failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the end room was reached.
    #[error("input closed before the end room was reached")]
    InputClosed,
}
