//! Dungeon graph generation for Delve.
//!
//! A dungeon is a small undirected graph of named rooms. Exactly one room
//! is the start, exactly one is the end, and every room has a degree
//! inside the configured bounds.
//!
//! # Key types
//!
//! - [`GraphBuilder`] — runs a generation pass (names, types, edges)
//! - [`DungeonGraph`] — the room arena; edges are [`RoomId`] lists
//! - [`NamePool`] — hands out unique room names without replacement
//! - [`GraphConfig`] — room count, degree bounds, retry budget
//!
//! # Example
//!
//! ```rust
//! use delve_graph::{GraphBuilder, GraphConfig, NamePool};
//!
//! let mut pool = NamePool::default();
//! let graph = GraphBuilder::new(GraphConfig::default())
//!     .build(&mut rand::rng(), &mut pool)
//!     .unwrap();
//! assert_eq!(graph.len(), 7);
//! ```

mod builder;
mod config;
mod error;
mod names;
mod room;

pub use builder::GraphBuilder;
pub use config::{GraphConfig, RoomType};
pub use error::GraphError;
pub use names::NamePool;
pub use room::{DungeonGraph, Room, RoomId};
