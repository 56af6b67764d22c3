//! Test utilities and mock types for Labrys development.
//!
//! Provides seeded grid fixtures, full-recompute oracles for the grid's
//! incrementally maintained state, a [`RecordingLoader`] that logs every
//! call it receives, and an idempotent tracing initialiser.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{dense_grid, random_grid, random_section, random_walk_grid};

use std::collections::BTreeSet;
use std::sync::Once;

use labrys_core::{Coord, Direction};
use labrys_grid::Grid;
use labrys_tiles::{ParentId, Placement, Tile, TileLoader};
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Install a test-friendly tracing subscriber. Safe to call repeatedly;
/// the first call wins. Honours `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Full-recompute boundary: occupied cells with any empty or out-of-range
/// cardinal neighbour.
pub fn boundary_oracle(grid: &Grid) -> BTreeSet<Coord> {
    grid.occupied_cells()
        .into_iter()
        .filter(|pos| {
            Direction::CARDINALS.iter().any(|&dir| {
                pos.checked_offset(dir)
                    .map_or(true, |n| !grid.contains(n))
            })
        })
        .collect()
}

/// One call observed by a [`RecordingLoader`].
#[derive(Clone, Debug, PartialEq)]
pub enum LoaderEvent {
    Load {
        prefab: String,
        placement: Placement,
        parent: Option<ParentId>,
    },
    LastTileSent,
}

/// Mock [`TileLoader`] that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingLoader {
    pub events: Vec<LoaderEvent>,
}

impl RecordingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `load` calls received.
    pub fn load_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, LoaderEvent::Load { .. }))
            .count()
    }

    /// Number of `last_tile_sent` calls received.
    pub fn completion_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, LoaderEvent::LastTileSent))
            .count()
    }
}

impl TileLoader for RecordingLoader {
    fn load(&mut self, tile: &Tile, placement: Placement, parent: Option<ParentId>) {
        self.events.push(LoaderEvent::Load {
            prefab: tile.prefab.clone(),
            placement,
            parent,
        });
    }

    fn last_tile_sent(&mut self) {
        self.events.push(LoaderEvent::LastTileSent);
    }
}
