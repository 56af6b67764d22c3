//! Labrys: a sparse section grid for procedurally generated dungeons.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Labrys sub-crates. For most users, adding `labrys` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use labrys::prelude::*;
//!
//! let mut grid = Grid::new();
//! for (x, y) in [(0, 0), (1, 0), (1, 1)] {
//!     grid.insert(Coord::new(x, y), Section::open());
//! }
//! // An L of three cells has no full 2x2 block, so no diagonals survive.
//! assert_eq!(grid.adjacency(Coord::new(1, 0)).unwrap(), Connection::WEST | Connection::NORTH);
//!
//! let mut tiles = TileSet::new();
//! tiles
//!     .insert(Tile::new(
//!         TileType::new("corner"),
//!         "stone",
//!         Section::new(Connection::EAST | Connection::NORTH),
//!         "corner_stone",
//!     ))
//!     .unwrap();
//!
//! let mut loader = BasicLoader::new();
//! let report = realize(
//!     &mut grid,
//!     |_, connected| tiles.find_fitting(connected),
//!     &mut loader,
//!     4.0,
//!     None,
//! );
//! // Only (1,0) is a corner; the two ends are dead ends with no tile.
//! assert_eq!(report.placed, 1);
//! assert_eq!(report.skipped, 2);
//! assert_eq!(loader.batches_completed(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `labrys-core` | Coordinates, directions, connection masks, sections, errors |
//! | [`grid`] | `labrys-grid` | Sparse grid, boundary tracking, adjacency, section cache |
//! | [`tiles`] | `labrys-tiles` | Tiles, tile sets, the loader contract, realization |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`labrys-core`).
///
/// [`types::Coord`], [`types::Direction`], the [`types::Connection`]
/// bitmask, and [`types::Section`].
pub use labrys_core as types;

/// The sparse section grid (`labrys-grid`).
///
/// [`grid::Grid`] stores sections, tracks its boundary incrementally and
/// resolves connectivity through either adjacency strategy.
pub use labrys_grid as grid;

/// Tile descriptors and placement (`labrys-tiles`).
///
/// Register tiles in a [`tiles::TileSet`] and hand a resolved grid to a
/// [`tiles::TileLoader`] with [`tiles::realize`].
pub use labrys_tiles as tiles;

/// Common imports for typical Labrys usage.
///
/// ```rust
/// use labrys::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use labrys_core::{Connection, Coord, Direction, Section};

    // Errors
    pub use labrys_core::{ConfigError, GridError};
    pub use labrys_tiles::TileSetError;

    // Grid
    pub use labrys_grid::{AdjacencyStrategy, Grid, GridConfig};

    // Tiles
    pub use labrys_tiles::{
        realize, BasicLoader, ParentId, Placement, Tile, TileLoader, TileSet, TileType,
    };
}
