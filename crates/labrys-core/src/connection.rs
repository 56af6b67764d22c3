//! Compass directions and the [`Connection`] bit mask.
//!
//! Directions are enumerated in a fixed counter-clockwise order starting
//! at east: `E, NE, N, NW, W, SW, S, SE`. The bit for each direction in a
//! [`Connection`] is `1 << index`, so the direction at index `i` is
//! opposite to the one at `(i + 4) % 8`, and a quarter turn
//! counter-clockwise is a rotate-left by two bits.

use bitflags::bitflags;
use std::fmt;

/// One of the eight compass directions, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// +x.
    East = 0,
    /// +x, +y.
    Northeast = 1,
    /// +y.
    North = 2,
    /// -x, +y.
    Northwest = 3,
    /// -x.
    West = 4,
    /// -x, -y.
    Southwest = 5,
    /// -y.
    South = 6,
    /// +x, -y.
    Southeast = 7,
}

impl Direction {
    /// All eight directions in canonical (counter-clockwise from east) order.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::Northeast,
        Direction::North,
        Direction::Northwest,
        Direction::West,
        Direction::Southwest,
        Direction::South,
        Direction::Southeast,
    ];

    /// The four cardinal directions in canonical order.
    pub const CARDINALS: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// The four diagonal directions in canonical order.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southwest,
        Direction::Southeast,
    ];

    /// Position in the canonical order (0..8).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index` in the canonical order, wrapping modulo 8.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 8]
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// This direction turned counter-clockwise by `quarter_turns * 90°`.
    pub const fn rotated(self, quarter_turns: u8) -> Self {
        Self::from_index(self.index() + 2 * (quarter_turns as usize % 4))
    }

    /// Whether this is one of N, E, S, W.
    pub const fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Whether this is one of NE, NW, SW, SE.
    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// Unit grid offset `(dx, dy)`; north is `+y`.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::Northeast => (1, 1),
            Direction::North => (0, 1),
            Direction::Northwest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::Southwest => (-1, -1),
            Direction::South => (0, -1),
            Direction::Southeast => (1, -1),
        }
    }

    /// The single-bit mask for this direction.
    pub const fn connection(self) -> Connection {
        Connection::from_bits_retain(1 << (self as u8))
    }

    /// The two cardinals on either side of a diagonal, clockwise one first
    /// (NE gives `(East, North)`). `None` for cardinals.
    pub const fn flanking(self) -> Option<(Direction, Direction)> {
        if self.is_cardinal() {
            return None;
        }
        Some((
            Self::from_index(self.index() + 7),
            Self::from_index(self.index() + 1),
        ))
    }

    /// Short compass label (`"E"`, `"NE"`, ...).
    pub const fn label(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::Northeast => "NE",
            Direction::North => "N",
            Direction::Northwest => "NW",
            Direction::West => "W",
            Direction::Southwest => "SW",
            Direction::South => "S",
            Direction::Southeast => "SE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

bitflags! {
    /// A set of directions a cell connects (or may connect) through.
    ///
    /// Bit `i` is [`Direction::from_index(i)`](Direction::from_index).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    pub struct Connection: u8 {
        /// East.
        const EAST = 1 << 0;
        /// Northeast.
        const NORTHEAST = 1 << 1;
        /// North.
        const NORTH = 1 << 2;
        /// Northwest.
        const NORTHWEST = 1 << 3;
        /// West.
        const WEST = 1 << 4;
        /// Southwest.
        const SOUTHWEST = 1 << 5;
        /// South.
        const SOUTH = 1 << 6;
        /// Southeast.
        const SOUTHEAST = 1 << 7;
    }
}

impl Connection {
    /// No directions.
    pub const NONE: Self = Self::empty();

    /// Every direction.
    pub const ALL: Self = Self::all();

    /// `N | E | S | W`.
    pub const CARDINALS: Self = Self::from_bits_retain(
        Self::EAST.bits() | Self::NORTH.bits() | Self::WEST.bits() | Self::SOUTH.bits(),
    );

    /// `NE | NW | SW | SE`.
    pub const DIAGONALS: Self = Self::from_bits_retain(!Self::CARDINALS.bits());

    /// `true` iff every direction in `required` is also in `self`.
    ///
    /// An empty `required` mask is always satisfied.
    #[inline]
    pub const fn can_connect(self, required: Connection) -> bool {
        self.bits() & required.bits() == required.bits()
    }

    /// Whether the single direction `dir` is set.
    #[inline]
    pub const fn has(self, dir: Direction) -> bool {
        self.can_connect(dir.connection())
    }

    /// Build a mask from any collection of directions.
    pub fn from_directions(dirs: impl IntoIterator<Item = Direction>) -> Self {
        dirs.into_iter()
            .fold(Self::NONE, |acc, d| acc | d.connection())
    }

    /// The directions in this mask, in canonical order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.has(*d))
    }

    /// This mask turned counter-clockwise by `quarter_turns * 90°`.
    pub const fn rotated(self, quarter_turns: u8) -> Self {
        let shift = 2 * (quarter_turns as u32 % 4);
        Self::from_bits_retain(self.bits().rotate_left(shift))
    }
}

impl From<Direction> for Connection {
    fn from(dir: Direction) -> Self {
        dir.connection()
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let mut first = true;
        for dir in self.directions() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(dir.label())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn opposite_is_four_steps_away() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::Northeast.opposite(), Direction::Southwest);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::Southeast.opposite(), Direction::Northwest);
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn offsets_of_opposites_cancel() {
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            let (ox, oy) = d.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0), "{d}");
        }
    }

    #[test]
    fn flanking_cardinals_sum_to_diagonal() {
        for d in Direction::DIAGONALS {
            let (a, b) = d.flanking().unwrap();
            assert!(a.is_cardinal() && b.is_cardinal());
            let (ax, ay) = a.offset();
            let (bx, by) = b.offset();
            assert_eq!((ax + bx, ay + by), d.offset(), "{d}");
        }
        assert_eq!(
            Direction::Northeast.flanking(),
            Some((Direction::East, Direction::North))
        );
        assert_eq!(Direction::North.flanking(), None);
    }

    #[test]
    fn bit_matches_canonical_index() {
        for (i, d) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(d.connection().bits(), 1 << i);
        }
        assert_eq!(Direction::North.connection(), Connection::NORTH);
        assert_eq!(Direction::Southwest.connection(), Connection::SOUTHWEST);
    }

    #[test]
    fn cardinal_and_diagonal_masks_partition_all() {
        assert_eq!(Connection::CARDINALS | Connection::DIAGONALS, Connection::ALL);
        assert!((Connection::CARDINALS & Connection::DIAGONALS).is_empty());
        assert_eq!(Connection::CARDINALS.directions().count(), 4);
        assert!(Connection::DIAGONALS.directions().all(Direction::is_diagonal));
    }

    #[test]
    fn can_connect_requires_every_bit() {
        let mask = Connection::NORTH | Connection::EAST | Connection::NORTHEAST;
        assert!(mask.can_connect(Connection::NORTH));
        assert!(mask.can_connect(Connection::NORTH | Connection::EAST));
        assert!(mask.can_connect(mask));
        assert!(mask.can_connect(Connection::NONE));
        assert!(!mask.can_connect(Connection::NORTH | Connection::SOUTH));
        assert!(!Connection::NONE.can_connect(Connection::WEST));
    }

    #[test]
    fn clearing_a_bit() {
        let mut mask = Connection::ALL;
        mask &= !Connection::NORTHEAST;
        assert!(!mask.has(Direction::Northeast));
        assert_eq!(mask.directions().count(), 7);
        assert_eq!(Connection::ALL - Connection::CARDINALS, Connection::DIAGONALS);
    }

    #[test]
    fn quarter_turn_maps_east_to_north() {
        assert_eq!(Connection::EAST.rotated(1), Connection::NORTH);
        assert_eq!(Connection::NORTHEAST.rotated(1), Connection::NORTHWEST);
        assert_eq!(Connection::SOUTHEAST.rotated(1), Connection::NORTHEAST);
        assert_eq!(Direction::South.rotated(3), Direction::West);
        assert_eq!(
            (Connection::SOUTH | Connection::WEST).rotated(2),
            Connection::NORTH | Connection::EAST
        );
    }

    #[test]
    fn display_uses_compass_labels() {
        assert_eq!(Connection::NONE.to_string(), "None");
        assert_eq!(
            (Connection::NORTH | Connection::EAST | Connection::NORTHEAST).to_string(),
            "E|NE|N"
        );
        assert_eq!(Direction::Southwest.to_string(), "SW");
    }

    proptest! {
        #[test]
        fn four_quarter_turns_is_identity(bits in any::<u8>()) {
            let mask = Connection::from_bits_retain(bits);
            prop_assert_eq!(mask.rotated(4), mask);
            prop_assert_eq!(mask.rotated(1).rotated(3), mask);
        }

        #[test]
        fn rotation_commutes_with_direction_rotation(bits in any::<u8>(), turns in 0u8..4) {
            let mask = Connection::from_bits_retain(bits);
            let rotated = Connection::from_directions(mask.directions().map(|d| d.rotated(turns)));
            prop_assert_eq!(mask.rotated(turns), rotated);
        }

        #[test]
        fn from_directions_round_trips(bits in any::<u8>()) {
            let mask = Connection::from_bits_retain(bits);
            prop_assert_eq!(Connection::from_directions(mask.directions()), mask);
        }
    }
}
