//! Grid configuration and validation.

use crate::cache::DEFAULT_CACHE_CAPACITY;
use labrys_core::ConfigError;

/// Which algorithm [`Grid::adjacency`](crate::Grid::adjacency) runs.
///
/// Both produce identical masks for every grid state; the choice only
/// affects throughput.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdjacencyStrategy {
    /// Direct map lookups, one readable rule per direction.
    Reference,
    /// One canonical-order pass through the section cache, followed by
    /// a 2x2 block check for each candidate diagonal.
    #[default]
    Cached,
}

/// Construction parameters for a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Maximum entries held by the section cache. Default: 5000.
    pub cache_capacity: usize,
    /// Algorithm used by `Grid::adjacency`. Default: `Cached`.
    pub strategy: AdjacencyStrategy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            strategy: AdjacencyStrategy::default(),
        }
    }
}

impl GridConfig {
    /// Config sized for resolving a dense `side x side` region in
    /// row-major order: capacity `3 * side + 3`.
    pub fn for_dense_walk(side: usize) -> Self {
        Self {
            cache_capacity: side.saturating_mul(3).saturating_add(3),
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::CacheCapacityZero);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.cache_capacity, 5000);
        assert_eq!(cfg.strategy, AdjacencyStrategy::Cached);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = GridConfig {
            cache_capacity: 0,
            ..GridConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::CacheCapacityZero));
    }

    #[test]
    fn dense_walk_capacity() {
        assert_eq!(GridConfig::for_dense_walk(100).cache_capacity, 303);
        assert_eq!(GridConfig::for_dense_walk(0).cache_capacity, 3);
        assert_eq!(
            GridConfig::for_dense_walk(usize::MAX).cache_capacity,
            usize::MAX
        );
    }
}
