//! Finding the newest run directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::FormatError;

/// Returns the newest directory in `root` whose name starts with `prefix`.
///
/// "Newest" means the latest modification time. Directories with the
/// same timestamp are ordered by run id, the numeric suffix after the
/// prefix, so `delve.rooms.100` beats `delve.rooms.99`. Names with a
/// non-numeric suffix lose to numbered ones and fall back to text order
/// among themselves.
///
/// # Errors
/// - [`FormatError::Io`] if `root` can't be listed
/// - [`FormatError::NoDungeon`] if nothing matches
pub fn latest_run_dir(root: &Path, prefix: &str) -> Result<PathBuf, FormatError> {
    let entries = fs::read_dir(root).map_err(|e| FormatError::io(root, e))?;

    let mut newest: Option<(SystemTime, RunOrder)> = None;
    for entry in entries {
        let entry = entry.map_err(|e| FormatError::io(root, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !name.starts_with(prefix) {
            continue;
        }
        let metadata = entry.metadata().map_err(|e| FormatError::io(entry.path(), e))?;
        if !metadata.is_dir() {
            continue;
        }
        let modified = metadata
            .modified()
            .map_err(|e| FormatError::io(entry.path(), e))?;

        let candidate = (modified, RunOrder::new(name, prefix));
        if newest.as_ref().is_none_or(|best| candidate > *best) {
            newest = Some(candidate);
        }
    }

    match newest {
        Some((_, order)) => {
            debug!(dir = %order.name, run_id = ?order.run_id, "newest run directory");
            Ok(root.join(order.name))
        }
        None => Err(FormatError::NoDungeon {
            root: root.to_path_buf(),
            prefix: prefix.to_string(),
        }),
    }
}

/// Tie-break order for run directories with equal timestamps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RunOrder {
    run_id: Option<u64>,
    name: String,
}

impl RunOrder {
    fn new(name: String, prefix: &str) -> Self {
        let run_id = name
            .strip_prefix(prefix)
            .and_then(|suffix| suffix.parse().ok());
        Self { run_id, name }
    }
}
