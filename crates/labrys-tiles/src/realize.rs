//! Turning a populated grid into placed tiles.

use crate::loader::{ParentId, Placement, TileLoader};
use crate::tile::Tile;
use labrys_core::{Connection, Coord};
use labrys_grid::Grid;
use tracing::debug;

/// Outcome of one [`realize`] batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RealizeReport {
    /// Cells handed to the loader.
    pub placed: usize,
    /// Cells the selector had no tile for.
    pub skipped: usize,
}

/// Resolve every occupied cell of `grid` and place a tile for it.
///
/// Cells are visited in insertion order. For each one, `select` receives
/// the cell and its resolved connections and returns the tile to place
/// and its quarter turns, or `None` to leave the cell empty. The loader
/// sees exactly one [`last_tile_sent`](TileLoader::last_tile_sent) when the
/// batch is done, even if nothing was placed.
pub fn realize<'t, F, L>(
    grid: &mut Grid,
    mut select: F,
    loader: &mut L,
    cell_size: f32,
    parent: Option<ParentId>,
) -> RealizeReport
where
    F: FnMut(Coord, Connection) -> Option<(&'t Tile, u8)>,
    L: TileLoader + ?Sized,
{
    let mut report = RealizeReport::default();

    for (pos, connected) in grid.resolve_all() {
        match select(pos, connected) {
            Some((tile, turns)) => {
                loader.load(tile, Placement::at_cell(pos, cell_size, turns), parent);
                report.placed += 1;
            }
            None => {
                debug!(%pos, %connected, "no tile selected");
                report.skipped += 1;
            }
        }
    }

    loader.last_tile_sent();
    debug!(
        placed = report.placed,
        skipped = report.skipped,
        "grid realized"
    );
    report
}
