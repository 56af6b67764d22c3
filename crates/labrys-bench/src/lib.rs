//! Benchmark profiles for the Labrys section grid.
//!
//! - [`reference_profile`]: dense 100x100 open grid (10K cells)
//! - [`corridor_profile`]: seeded branching walk, the sparse shape real
//!   layouts tend to have
//! - [`stress_profile`]: dense 316x316 grid (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use labrys_core::Section;
use labrys_grid::{AdjacencyStrategy, Grid, GridConfig};
use labrys_test_utils::{dense_grid, random_walk_grid};

/// Side length of [`reference_profile`].
pub const REFERENCE_SIDE: i32 = 100;

/// Side length of [`stress_profile`].
pub const STRESS_SIDE: i32 = 316;

/// Dense `100 x 100` grid of open sections, cache sized for a row-major walk.
pub fn reference_profile(strategy: AdjacencyStrategy) -> Grid {
    dense(REFERENCE_SIDE, strategy)
}

/// Dense `316 x 316` grid of open sections.
pub fn stress_profile(strategy: AdjacencyStrategy) -> Grid {
    dense(STRESS_SIDE, strategy)
}

/// Branching corridor walk of `steps` moves with the default cache.
pub fn corridor_profile(seed: u64, steps: usize, strategy: AdjacencyStrategy) -> Grid {
    let config = GridConfig {
        strategy,
        ..GridConfig::default()
    };
    random_walk_grid(seed, steps, config)
}

fn dense(side: i32, strategy: AdjacencyStrategy) -> Grid {
    let config = GridConfig {
        strategy,
        ..GridConfig::for_dense_walk(side as usize)
    };
    dense_grid(side, Section::open(), config)
}
