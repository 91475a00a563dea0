//! Integration tests for dungeon generation.
//!
//! Each property is checked over a spread of seeds so the random
//! choices in the builder are exercised from many starting points.

use std::collections::HashSet;

use delve_graph::{DungeonGraph, GraphBuilder, GraphConfig, NamePool, RoomType};
use rand::SeedableRng;
use rand::rngs::StdRng;

// =========================================================================
// Helpers
// =========================================================================

const SEEDS: u64 = 200;

fn generate(seed: u64) -> DungeonGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pool = NamePool::default();
    GraphBuilder::new(GraphConfig::default())
        .build(&mut rng, &mut pool)
        .unwrap_or_else(|e| panic!("seed {seed}: {e}"))
}

// =========================================================================
// Room types
// =========================================================================

#[test]
fn test_exactly_one_start_and_one_end() {
    for seed in 0..SEEDS {
        let g = generate(seed);
        assert_eq!(g.count_of(RoomType::Start), 1, "seed {seed}");
        assert_eq!(g.count_of(RoomType::End), 1, "seed {seed}");
        assert_eq!(g.count_of(RoomType::Mid), g.len() - 2, "seed {seed}");
    }
}

#[test]
fn test_start_and_end_are_different_rooms() {
    for seed in 0..SEEDS {
        let g = generate(seed);
        assert_ne!(g.start().unwrap().id, g.end().unwrap().id);
    }
}

// =========================================================================
// Names
// =========================================================================

#[test]
fn test_seven_unique_names_from_pool() {
    let stock: HashSet<String> = NamePool::default().names().iter().cloned().collect();
    for seed in 0..SEEDS {
        let g = generate(seed);
        assert_eq!(g.len(), 7);
        let names: HashSet<&str> = g.rooms().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), 7, "seed {seed}: duplicate name");
        assert!(names.iter().all(|n| stock.contains(*n)));
    }
}

// =========================================================================
// Edges
// =========================================================================

#[test]
fn test_degree_within_bounds() {
    let config = GraphConfig::default();
    for seed in 0..SEEDS {
        let g = generate(seed);
        for room in g.rooms() {
            assert!(
                (config.min_connections..=config.max_connections).contains(&room.degree()),
                "seed {seed}: {} has degree {}",
                room.name,
                room.degree()
            );
        }
    }
}

#[test]
fn test_edges_symmetric_irreflexive_and_unique() {
    for seed in 0..SEEDS {
        let g = generate(seed);
        for room in g.rooms() {
            let unique: HashSet<_> = room.connections.iter().collect();
            assert_eq!(unique.len(), room.degree(), "seed {seed}: duplicate edge");
            for other in &room.connections {
                assert_ne!(*other, room.id, "seed {seed}: self loop");
                assert!(
                    g.room(*other).unwrap().is_connected_to(room.id),
                    "seed {seed}: {} -> {other} not mirrored",
                    room.name
                );
            }
        }
    }
}

#[test]
fn test_end_reachable_from_start() {
    for seed in 0..SEEDS {
        let g = generate(seed);
        let start = g.start().unwrap().id;
        let end = g.end().unwrap().id;
        assert!(g.is_reachable(start, end), "seed {seed}");
    }
}

#[test]
fn test_every_room_reachable_from_start() {
    for seed in 0..SEEDS {
        let g = generate(seed);
        let start = g.start().unwrap().id;
        for room in g.rooms() {
            assert!(g.is_reachable(start, room.id), "seed {seed}: {}", room.name);
        }
    }
}

#[test]
fn test_generated_graph_passes_validation() {
    let config = GraphConfig::default();
    for seed in 0..SEEDS {
        assert!(generate(seed).validate(&config).is_ok());
    }
}

// =========================================================================
// Non-default configs
// =========================================================================

#[test]
fn test_custom_pool_and_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pool = NamePool::new(["NORTH", "SOUTH", "EAST", "WEST", "UP"]);
    let config = GraphConfig {
        num_rooms: 5,
        min_connections: 2,
        max_connections: 4,
        ..GraphConfig::default()
    };
    let g = GraphBuilder::new(config.clone())
        .build(&mut rng, &mut pool)
        .unwrap();
    assert_eq!(g.len(), 5);
    assert_eq!(pool.remaining(), 0);
    assert!(g.validate(&config).is_ok());
}

#[test]
fn test_thread_rng_build() {
    let mut pool = NamePool::default();
    let g = GraphBuilder::default()
        .build(&mut rand::rng(), &mut pool)
        .unwrap();
    assert!(g.validate(&GraphConfig::default()).is_ok());
}
