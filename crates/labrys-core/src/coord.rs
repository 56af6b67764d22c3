//! Integer grid coordinates.

use crate::connection::Direction;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, Sub};

/// A cell position on the dungeon grid.
///
/// `x` grows east and `y` grows north. Equality and hashing are exact
/// integer comparisons, so a `Coord` is safe to use as a map key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// East-west axis.
    pub x: i32,
    /// North-south axis.
    pub y: i32,
}

impl Coord {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Construct a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent coordinate one step toward `dir`.
    ///
    /// # Panics
    ///
    /// Overflows like plain `i32` addition when `self` sits on the edge of
    /// the `i32` range. Use [`checked_offset`](Self::checked_offset) for
    /// arbitrary coordinates.
    #[inline]
    pub const fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent coordinate toward `dir`, or `None` if it falls outside
    /// the `i32` range. A cell on that edge has no neighbour that way.
    #[inline]
    pub const fn checked_offset(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.offset();
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// The cardinal neighbours that exist, in canonical order (E, N, W, S).
    pub fn cardinal_neighbours(self) -> SmallVec<[Coord; 4]> {
        Direction::CARDINALS
            .iter()
            .filter_map(|&d| self.checked_offset(d))
            .collect()
    }

    /// The neighbours that exist, in canonical order (E, NE, N, ..., SE).
    pub fn neighbours(self) -> SmallVec<[Coord; 8]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.checked_offset(d))
            .collect()
    }

    /// Component-wise minimum.
    pub fn component_min(self, other: Coord) -> Coord {
        Coord::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    pub fn component_max(self, other: Coord) -> Coord {
        Coord::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Direction> for Coord {
    type Output = Coord;

    fn add(self, dir: Direction) -> Coord {
        self.offset(dir)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
