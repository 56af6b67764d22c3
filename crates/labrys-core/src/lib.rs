//! Core types for the Labrys dungeon grid.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types every other Labrys crate speaks in: grid coordinates,
//! compass directions, connection masks, sections, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connection;
pub mod coord;
pub mod error;
pub mod section;

pub use connection::{Connection, Direction};
pub use coord::Coord;
pub use error::{ConfigError, GridError};
pub use section::Section;
