//! The sparse section grid.

use crate::adjacency;
use crate::cache::{CacheStats, SectionCache};
use crate::config::{AdjacencyStrategy, GridConfig};
use indexmap::{IndexMap, IndexSet};
use labrys_core::{ConfigError, Connection, Coord, Direction, GridError, Section};
use tracing::debug;

/// A sparse mapping from grid coordinates to [`Section`]s.
///
/// Alongside the cells, the grid maintains:
///
/// - the **boundary**: occupied cells with at least one unoccupied
///   cardinal neighbour, updated incrementally on every first-time
///   insertion by re-examining only the new cell and its four cardinal
///   neighbours;
/// - the inclusive **bounds** of all occupied cells;
/// - a [`SectionCache`] that accelerates [`cached_adjacency`].
///
/// Cells are never removed individually. One grid serves one generation
/// run; [`clear`](Self::clear) resets it for the next.
///
/// Snapshots ([`occupied_cells`], [`boundary_cells`], [`iter`]) come back
/// in a deterministic order derived from insertion order.
///
/// [`cached_adjacency`]: Self::cached_adjacency
/// [`occupied_cells`]: Self::occupied_cells
/// [`boundary_cells`]: Self::boundary_cells
/// [`iter`]: Self::iter
#[derive(Debug, Clone)]
pub struct Grid {
    cells: IndexMap<Coord, Section>,
    boundary: IndexSet<Coord>,
    bounds: Option<(Coord, Coord)>,
    cache: SectionCache,
    strategy: AdjacencyStrategy,
}

impl Grid {
    /// Create an empty grid with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(&GridConfig::default())
    }

    /// Create an empty grid after validating `config`.
    pub fn with_config(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(&config))
    }

    fn from_valid_config(config: &GridConfig) -> Self {
        debug!(
            cache_capacity = config.cache_capacity,
            strategy = ?config.strategy,
            "grid created"
        );
        Self {
            cells: IndexMap::new(),
            boundary: IndexSet::new(),
            bounds: None,
            cache: SectionCache::new(config.cache_capacity),
            strategy: config.strategy,
        }
    }

    // ── Storage ────────────────────────────────────────────────

    /// Place `section` at `pos`. `None` is ignored.
    ///
    /// Overwriting an occupied cell replaces its section but leaves the
    /// cell count and boundary untouched: occupancy has not changed.
    pub fn set(&mut self, pos: Coord, section: Option<Section>) {
        let Some(section) = section else {
            return;
        };

        if let Some(existing) = self.cells.get_mut(&pos) {
            debug!(%pos, old = %existing, new = %section, "overwriting section");
            *existing = section;
            self.cache.replace(pos, section);
            return;
        }

        self.cells.insert(pos, section);
        self.bounds = Some(match self.bounds {
            None => (pos, pos),
            Some((lo, hi)) => (lo.component_min(pos), hi.component_max(pos)),
        });

        if !self.neighbours_full(pos) {
            self.boundary.insert(pos);
        }
        for neighbour in pos.cardinal_neighbours() {
            if self.boundary.contains(&neighbour) && self.neighbours_full(neighbour) {
                self.boundary.swap_remove(&neighbour);
            }
        }
    }

    /// Place `section` at `pos`.
    pub fn insert(&mut self, pos: Coord, section: Section) {
        self.set(pos, Some(section));
    }

    /// The section at `pos`, if any.
    pub fn get(&self, pos: Coord) -> Option<Section> {
        self.cells.get(&pos).copied()
    }

    /// Whether `pos` holds a section.
    pub fn contains(&self, pos: Coord) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Number of distinct occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(position, section)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Section)> + '_ {
        self.cells.iter().map(|(&pos, &section)| (pos, section))
    }

    /// Snapshot of every occupied coordinate.
    pub fn occupied_cells(&self) -> Vec<Coord> {
        self.cells.keys().copied().collect()
    }

    /// Snapshot of the boundary set.
    pub fn boundary_cells(&self) -> Vec<Coord> {
        self.boundary.iter().copied().collect()
    }

    /// Number of boundary cells.
    pub fn boundary_len(&self) -> usize {
        self.boundary.len()
    }

    /// Whether `pos` is occupied with at least one empty cardinal neighbour.
    pub fn is_boundary(&self, pos: Coord) -> bool {
        self.boundary.contains(&pos)
    }

    /// Whether `pos` is occupied and all four of its cardinal neighbours
    /// are too. A cell on the edge of the `i32` range is never internal.
    pub fn is_internal(&self, pos: Coord) -> bool {
        self.cells.contains_key(&pos) && self.neighbours_full(pos)
    }

    fn neighbours_full(&self, pos: Coord) -> bool {
        Direction::CARDINALS.iter().all(|&dir| {
            pos.checked_offset(dir)
                .is_some_and(|n| self.cells.contains_key(&n))
        })
    }

    /// Inclusive `(min, max)` corners of the occupied region.
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        self.bounds
    }

    /// Remove every cell and cached entry, keeping the configuration.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.boundary.clear();
        self.bounds = None;
        self.cache.clear();
    }

    // ── Adjacency ──────────────────────────────────────────────

    /// The connections at `pos` that are physically realised by its
    /// neighbours, using the configured [`AdjacencyStrategy`].
    ///
    /// Returns [`GridError::Unoccupied`] if `pos` holds no section.
    pub fn adjacency(&mut self, pos: Coord) -> Result<Connection, GridError> {
        match self.strategy {
            AdjacencyStrategy::Reference => self.reference_adjacency(pos),
            AdjacencyStrategy::Cached => self.cached_adjacency(pos),
        }
    }

    /// Adjacency by direct lookups. Never touches the cache, so it can be
    /// called through a shared reference.
    pub fn reference_adjacency(&self, pos: Coord) -> Result<Connection, GridError> {
        let origin = self.occupied(pos)?;
        Ok(adjacency::resolve_reference(&self.cells, pos, origin))
    }

    /// Adjacency through the section cache. Same result as
    /// [`reference_adjacency`](Self::reference_adjacency).
    pub fn cached_adjacency(&mut self, pos: Coord) -> Result<Connection, GridError> {
        let origin = self.occupied(pos)?;
        Ok(adjacency::resolve_cached(
            &self.cells,
            &mut self.cache,
            pos,
            origin,
        ))
    }

    /// Resolve adjacency for every occupied cell, in insertion order.
    pub fn resolve_all(&mut self) -> IndexMap<Coord, Connection> {
        let mut resolved = IndexMap::with_capacity(self.cells.len());
        for (&pos, &origin) in &self.cells {
            let connected = match self.strategy {
                AdjacencyStrategy::Reference => {
                    adjacency::resolve_reference(&self.cells, pos, origin)
                }
                AdjacencyStrategy::Cached => {
                    adjacency::resolve_cached(&self.cells, &mut self.cache, pos, origin)
                }
            };
            resolved.insert(pos, connected);
        }
        resolved
    }

    fn occupied(&self, pos: Coord) -> Result<Section, GridError> {
        self.cells
            .get(&pos)
            .copied()
            .ok_or(GridError::Unoccupied { pos })
    }

    // ── Configuration / diagnostics ────────────────────────────

    /// The algorithm [`adjacency`](Self::adjacency) runs.
    pub fn strategy(&self) -> AdjacencyStrategy {
        self.strategy
    }

    /// Switch the algorithm [`adjacency`](Self::adjacency) runs.
    pub fn set_strategy(&mut self, strategy: AdjacencyStrategy) {
        self.strategy = strategy;
    }

    /// Read-only view of the section cache.
    pub fn cache(&self) -> &SectionCache {
        &self.cache
    }

    /// Hit/miss counters of the section cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<(Coord, Section)> for Grid {
    fn extend<I: IntoIterator<Item = (Coord, Section)>>(&mut self, iter: I) {
        for (pos, section) in iter {
            self.insert(pos, section);
        }
    }
}

impl FromIterator<(Coord, Section)> for Grid {
    fn from_iter<I: IntoIterator<Item = (Coord, Section)>>(iter: I) -> Self {
        let mut grid = Grid::new();
        grid.extend(iter);
        grid
    }
}
