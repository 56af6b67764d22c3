//! Per-cell connectivity permissions.

use crate::connection::Connection;
use std::fmt;

/// The connectivity permissions of one occupied grid cell.
///
/// `external` is the allowed-connections mask: the directions this cell is
/// willing to connect through toward its neighbours. It is the only mask
/// adjacency resolution consults. `internal` describes connections inside a
/// multi-cell tile and is carried for tile descriptors.
///
/// Sections are plain values; the grid stores copies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Section {
    /// Directions this cell may connect through toward neighbours.
    pub external: Connection,
    /// Connections internal to the tile this cell belongs to.
    pub internal: Connection,
}

impl Section {
    /// A section allowing connections through `external`.
    pub const fn new(external: Connection) -> Self {
        Self {
            external,
            internal: Connection::NONE,
        }
    }

    /// A section with both masks given.
    pub const fn with_internal(external: Connection, internal: Connection) -> Self {
        Self { external, internal }
    }

    /// A section open in all eight directions.
    pub const fn open() -> Self {
        Self::new(Connection::ALL)
    }

    /// `true` iff every direction in `required` is allowed.
    #[inline]
    pub const fn can_connect(&self, required: Connection) -> bool {
        self.external.can_connect(required)
    }

    /// This section turned counter-clockwise by `quarter_turns * 90°`.
    pub const fn rotated(&self, quarter_turns: u8) -> Self {
        Self {
            external: self.external.rotated(quarter_turns),
            internal: self.internal.rotated(quarter_turns),
        }
    }
}

impl From<Connection> for Section {
    fn from(external: Connection) -> Self {
        Self::new(external)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "external {}, internal {}", self.external, self.internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_connect_uses_external_mask() {
        let s = Section::with_internal(Connection::SOUTH | Connection::WEST, Connection::ALL);
        assert!(s.can_connect(Connection::SOUTH));
        assert!(s.can_connect(Connection::SOUTH | Connection::WEST));
        assert!(!s.can_connect(Connection::NORTH));
        assert!(!s.can_connect(Connection::SOUTH | Connection::SOUTHWEST));
    }

    #[test]
    fn open_section_allows_everything() {
        let s = Section::open();
        assert!(s.can_connect(Connection::ALL));
        assert_eq!(s.internal, Connection::NONE);
    }

    #[test]
    fn rotation_turns_both_masks() {
        let s = Section::with_internal(Connection::EAST, Connection::SOUTH);
        let r = s.rotated(1);
        assert_eq!(r.external, Connection::NORTH);
        assert_eq!(r.internal, Connection::EAST);
    }
}
