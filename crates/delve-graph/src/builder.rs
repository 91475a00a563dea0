//! Random dungeon generation.
//!
//! A build runs three phases in order:
//!
//! 1. **Names** — one unique name per room, drawn from a [`NamePool`].
//! 2. **Types** — everything `Mid`, then one random `Start` and a
//!    different random `End`.
//! 3. **Edges** — keep picking two distinct rooms that still have spare
//!    degree and connect them, until every room reaches the minimum.
//!    Picking an already-connected pair wastes the iteration.
//!
//! Every sampling loop is bounded by [`GraphConfig::max_attempts`].
//! Termination of the edge phase is probabilistic; the bound turns a
//! stuck generation into [`GraphError::AttemptsExhausted`].

use rand::Rng;
use tracing::{debug, info, trace};

use crate::{DungeonGraph, GraphConfig, GraphError, NamePool, RoomId, RoomType};

/// Builds dungeon graphs from a [`GraphConfig`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Generates a complete dungeon.
    ///
    /// The config is checked against the pool size before any sampling
    /// happens, and the finished graph is validated before it is
    /// returned.
    pub fn build<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pool: &mut NamePool,
    ) -> Result<DungeonGraph, GraphError> {
        self.config.validate(pool.remaining())?;

        let mut graph = DungeonGraph::new();
        self.assign_names(rng, pool, &mut graph)?;
        self.assign_types(rng, &mut graph)?;
        let iterations = self.fill_edges(rng, &mut graph)?;

        graph.validate(&self.config)?;

        info!(
            rooms = graph.len(),
            iterations,
            start = graph.start().map(|r| r.name.as_str()).unwrap_or_default(),
            end = graph.end().map(|r| r.name.as_str()).unwrap_or_default(),
            "dungeon generated"
        );
        Ok(graph)
    }

    fn assign_names<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        pool: &mut NamePool,
        graph: &mut DungeonGraph,
    ) -> Result<(), GraphError> {
        for _ in 0..self.config.num_rooms {
            let name = pool.draw(rng, self.config.max_attempts)?;
            let id = graph.add_room(name, Some(RoomType::Mid));
            trace!(room = %id, "name assigned");
        }
        Ok(())
    }

    fn assign_types<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        graph: &mut DungeonGraph,
    ) -> Result<(), GraphError> {
        let count = graph.len();
        let start = RoomId(rng.random_range(0..count));

        let mut end = None;
        for _ in 0..self.config.max_attempts {
            let candidate = RoomId(rng.random_range(0..count));
            if candidate != start {
                end = Some(candidate);
                break;
            }
        }
        let end = end.ok_or(GraphError::AttemptsExhausted {
            phase: "end room draw",
            attempts: self.config.max_attempts,
        })?;

        graph.set_room_type(start, Some(RoomType::Start))?;
        graph.set_room_type(end, Some(RoomType::End))?;
        debug!(%start, %end, "room types assigned");
        Ok(())
    }

    /// Returns the number of loop iterations it took to fill the graph.
    fn fill_edges<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        graph: &mut DungeonGraph,
    ) -> Result<u32, GraphError> {
        let mut iterations = 0u32;
        while !graph.is_full(&self.config)? {
            if iterations >= self.config.max_attempts {
                return Err(GraphError::AttemptsExhausted {
                    phase: "edge fill",
                    attempts: iterations,
                });
            }
            iterations += 1;
            self.add_random_connection(rng, graph)?;
        }
        Ok(iterations)
    }

    fn add_random_connection<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        graph: &mut DungeonGraph,
    ) -> Result<(), GraphError> {
        let x = self.pick_open_room(rng, graph, None)?;
        let y = self.pick_open_room(rng, graph, Some(x))?;

        if graph.connect(x, y)? {
            trace!(%x, %y, "connected");
        }
        Ok(())
    }

    /// Uniformly samples a room that still has spare degree, skipping
    /// `exclude`.
    fn pick_open_room<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        graph: &DungeonGraph,
        exclude: Option<RoomId>,
    ) -> Result<RoomId, GraphError> {
        for _ in 0..self.config.max_attempts {
            let id = RoomId(rng.random_range(0..graph.len()));
            if Some(id) == exclude {
                continue;
            }
            let open = graph
                .room(id)
                .is_some_and(|r| r.degree() < self.config.max_connections);
            if open {
                return Ok(id);
            }
        }
        Err(GraphError::AttemptsExhausted {
            phase: "room pick",
            attempts: self.config.max_attempts,
        })
    }
}
