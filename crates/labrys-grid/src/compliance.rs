//! Grid invariant checks shared by the unit test modules.
//!
//! Each helper recomputes a derived property from scratch and compares it
//! against what the grid maintains incrementally.

use crate::grid::Grid;
use labrys_core::{Coord, Direction};
use std::collections::BTreeSet;

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

/// Assert the incremental boundary equals the full recompute.
pub fn assert_boundary_matches_oracle(grid: &Grid) {
    let incremental: BTreeSet<Coord> = grid.boundary_cells().into_iter().collect();
    let oracle = boundary_oracle(grid);
    assert_eq!(
        incremental, oracle,
        "incremental boundary diverged from full recompute"
    );
    assert_eq!(
        grid.boundary_len(),
        oracle.len(),
        "boundary holds duplicates"
    );
}

/// Assert reference and cached adjacency agree for every occupied cell,
/// on both a cold and a warm pass through the cache.
pub fn assert_strategies_agree(grid: &mut Grid) {
    for pass in ["cold", "warm"] {
        for pos in grid.occupied_cells() {
            let reference = grid.reference_adjacency(pos);
            let cached = grid.cached_adjacency(pos);
            assert_eq!(
                reference, cached,
                "{pass} pass: adjacency mismatch at {pos}"
            );
        }
    }
}
