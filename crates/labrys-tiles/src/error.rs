//! Error types for tile registration.

use std::error::Error;
use std::fmt;

/// Errors from building a [`TileSet`](crate::TileSet).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileSetError {
    /// A tile with the same type and variant is already registered.
    Duplicate {
        /// Type name of the rejected tile.
        tile_type: String,
        /// Variant of the rejected tile.
        variant: String,
    },
}

impl fmt::Display for TileSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { tile_type, variant } => {
                write!(f, "tile '{tile_type}' variant '{variant}' already registered")
            }
        }
    }
}

impl Error for TileSetError {}
