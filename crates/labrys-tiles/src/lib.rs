//! Tiles and tile placement for Labrys grids.
//!
//! A [`Tile`] is a placeable prefab described by a type name, a variant,
//! and the [`Section`](labrys_core::Section) it contributes to the grid.
//! A [`TileSet`] indexes tiles by `(type, variant)`.
//!
//! Placing tiles in a world is the job of a [`TileLoader`]. [`realize`]
//! walks a resolved grid, asks a selector which tile fits each cell, and
//! hands every choice to the loader, finishing with a single
//! [`last_tile_sent`](TileLoader::last_tile_sent).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod realize;
pub mod tile;
pub mod tileset;

pub use error::TileSetError;
pub use loader::{BasicLoader, ParentId, PlacedTile, Placement, TileLoader};
pub use realize::{realize, RealizeReport};
pub use tile::{Tile, TileType};
pub use tileset::TileSet;
