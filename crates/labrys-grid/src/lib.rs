//! Sparse section grid for dungeon generation.
//!
//! This crate provides [`Grid`], a sparse `Coord -> Section` map that
//! tracks its own boundary incrementally and resolves which of a cell's
//! permitted connections are physically realised by its neighbours.
//!
//! # Adjacency
//!
//! Two algorithms compute the same mask:
//!
//! - [`Grid::reference_adjacency`]: direct lookups, one rule per
//!   direction. Takes `&self`.
//! - [`Grid::cached_adjacency`]: a single pass through a bounded
//!   [`SectionCache`], then a 2x2 block check per candidate diagonal.
//!
//! [`Grid::adjacency`] dispatches on the configured [`AdjacencyStrategy`].
//!
//! # Example
//!
//! ```
//! use labrys_core::{Connection, Coord, Section};
//! use labrys_grid::Grid;
//!
//! let mut grid = Grid::new();
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     grid.insert(Coord::new(x, y), Section::open());
//! }
//! let mask = grid.adjacency(Coord::new(0, 0)).unwrap();
//! assert_eq!(mask, Connection::EAST | Connection::NORTH | Connection::NORTHEAST);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod adjacency;
pub mod cache;
pub mod config;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use cache::{CacheStats, SectionCache, DEFAULT_CACHE_CAPACITY};
pub use config::{AdjacencyStrategy, GridConfig};
pub use grid::Grid;
