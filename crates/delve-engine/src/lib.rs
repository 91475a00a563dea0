//! Dungeon traversal for Delve.
//!
//! The [`TraversalEngine`] owns a loaded [`DungeonGraph`](delve_graph::DungeonGraph)
//! and a single [`Player`]. It is driven by an outer read-eval loop:
//!
//! ```text
//! loop {
//!     show engine.prompt()
//!     read a line
//!     engine.execute(line).await
//!     if engine.is_won() { show engine.summary(); break }
//! }
//! ```
//!
//! The engine moves through two states: playing (the player is in a
//! start or mid room) and won (the player reached the end room). Won is
//! terminal.

mod engine;
mod error;
mod player;

pub use engine::{Outcome, Prompt, Summary, TIME_COMMAND, TraversalEngine};
pub use error::EngineError;
pub use player::Player;
