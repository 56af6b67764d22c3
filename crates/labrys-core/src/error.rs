//! Error types for grid queries and grid configuration.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors from querying a section grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Adjacency was requested for a cell that holds no section.
    ///
    /// Callers should check occupancy first.
    Unoccupied {
        /// The empty coordinate.
        pos: Coord,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unoccupied { pos } => write!(f, "no section at {pos}"),
        }
    }
}

impl Error for GridError {}

/// Errors detected while validating a grid configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The section cache must hold at least one entry.
    CacheCapacityZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CacheCapacityZero => write!(f, "cache_capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_coordinate() {
        let e = GridError::Unoccupied {
            pos: Coord::new(2, -7),
        };
        assert_eq!(e.to_string(), "no section at (2, -7)");
        assert_eq!(
            ConfigError::CacheCapacityZero.to_string(),
            "cache_capacity must be at least 1"
        );
    }
}
