//! The tile placement contract.
//!
//! A [`TileLoader`] turns a chosen [`Tile`] plus a world transform into a
//! placed world object. How (and when) objects appear is the loader's
//! business; errors during placement are the loader's concern too, which
//! is why `load` returns nothing.

use crate::tile::Tile;
use labrys_core::Coord;
use std::f32::consts::FRAC_PI_4;
use tracing::info;

/// Opaque handle of a parent object placed tiles are attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParentId(pub u64);

/// World transform for one placed tile.
///
/// World space is y-up: grid `x` maps to world `x` and grid `y` to world
/// `z`. `rotation` is a unit quaternion `[x, y, z, w]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// World position.
    pub position: [f32; 3],
    /// Orientation quaternion, `[x, y, z, w]`.
    pub rotation: [f32; 4],
    /// Per-axis scale.
    pub scale: [f32; 3],
}

impl Placement {
    /// Origin, no rotation, unit scale.
    pub const IDENTITY: Placement = Placement {
        position: [0.0; 3],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0; 3],
    };

    /// Transform for a tile at grid cell `pos`, with cells `cell_size`
    /// world units apart, turned `quarter_turns` times counter-clockwise as
    /// seen from above.
    ///
    /// Turns follow [`Section::rotated`](labrys_core::Section::rotated):
    /// one turn carries the tile's east opening (world +x) to grid north
    /// (world +z). With +z standing in for north that is a negative angle
    /// about +Y.
    pub fn at_cell(pos: Coord, cell_size: f32, quarter_turns: u8) -> Self {
        // Half-angle of a quarter turn is pi/4.
        let half = -FRAC_PI_4 * f32::from(quarter_turns % 4);
        Self {
            position: [pos.x as f32 * cell_size, 0.0, pos.y as f32 * cell_size],
            rotation: [0.0, half.sin(), 0.0, half.cos()],
            scale: [1.0; 3],
        }
    }

    /// The same placement with a different scale.
    pub fn with_scale(self, scale: [f32; 3]) -> Self {
        Self { scale, ..self }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Places tiles in the world.
pub trait TileLoader {
    /// Place `tile` with the given transform, optionally under `parent`.
    fn load(&mut self, tile: &Tile, placement: Placement, parent: Option<ParentId>);

    /// Called once after the final [`load`](Self::load) of a batch.
    fn last_tile_sent(&mut self) {}
}

/// Record of one tile placed by a [`BasicLoader`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTile {
    /// Prefab that was instantiated.
    pub prefab: String,
    /// Transform it was placed with.
    pub placement: Placement,
    /// Parent it was attached to.
    pub parent: Option<ParentId>,
}

/// Loader that places each tile as soon as it is received.
///
/// Placed objects are kept in arrival order. A batch is complete once
/// [`last_tile_sent`](TileLoader::last_tile_sent) has been called; loading
/// again afterwards starts a new batch.
#[derive(Clone, Debug, Default)]
pub struct BasicLoader {
    placed: Vec<PlacedTile>,
    batches_completed: usize,
    batch_open: bool,
}

impl BasicLoader {
    /// An empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything placed so far, in arrival order.
    pub fn placed(&self) -> &[PlacedTile] {
        &self.placed
    }

    /// Number of batches closed by `last_tile_sent`.
    pub fn batches_completed(&self) -> usize {
        self.batches_completed
    }

    /// Whether tiles have arrived since the last completed batch.
    pub fn is_batch_open(&self) -> bool {
        self.batch_open
    }
}

impl TileLoader for BasicLoader {
    fn load(&mut self, tile: &Tile, placement: Placement, parent: Option<ParentId>) {
        self.batch_open = true;
        self.placed.push(PlacedTile {
            prefab: tile.prefab.clone(),
            placement,
            parent,
        });
    }

    fn last_tile_sent(&mut self) {
        self.batch_open = false;
        self.batches_completed += 1;
        info!(
            placed = self.placed.len(),
            batch = self.batches_completed,
            "tile batch complete"
        );
    }
}
