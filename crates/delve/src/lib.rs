//! # Delve
//!
//! A small text adventure over a randomly generated dungeon.
//!
//! Delve runs in two phases, each its own binary:
//!
//! - **`delve-build`** generates a connected graph of seven named rooms
//!   and writes it to a fresh `delve.rooms.<pid>` directory.
//! - **`delve-play`** loads the newest such directory, drops the player
//!   in the start room and reads room names from stdin until the end
//!   room is reached. Typing `time` asks a background clock for the
//!   local time.
//!
//! The library side exposes both phases so they can be driven without a
//! terminal:
//!
//! ```rust,no_run
//! use delve::prelude::*;
//!
//! # async fn demo() -> Result<(), DelveError> {
//! let root = std::path::Path::new(".");
//! generate_into(root, &GraphConfig::default(), &FormatConfig::default(), &mut rand::rng())?;
//!
//! let engine = start_play(root, &FormatConfig::default(), ClockConfig::default()).await?;
//! let input = tokio::io::BufReader::new(tokio::io::stdin());
//! let summary = run_session(engine, input, tokio::io::stdout()).await?;
//! println!("{} steps", summary.steps);
//! # Ok(())
//! # }
//! ```

mod error;
pub mod generate;
pub mod play;

pub use error::DelveError;

pub mod prelude {
    pub use crate::DelveError;
    pub use crate::generate::generate_into;
    pub use crate::play::{run_session, start_play};
    pub use delve_clock::{ClockConfig, LocalTime};
    pub use delve_engine::{Outcome, Summary, TraversalEngine};
    pub use delve_format::{DungeonReader, DungeonWriter, FormatConfig};
    pub use delve_graph::{GraphBuilder, GraphConfig, NamePool};
}
