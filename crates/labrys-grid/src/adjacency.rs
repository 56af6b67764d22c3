//! Adjacency resolution: which of a cell's permitted connections are
//! physically realised by its neighbours.
//!
//! A cardinal direction `d` connects iff the cell allows `d`, a neighbour
//! exists at `pos + d`, and that neighbour allows `d.opposite()`.
//!
//! A diagonal connects only if all four cells of the 2x2 block sharing
//! that corner exist and mutually permit the turn. This stops a diagonal
//! from cutting through a blocked corner.
//!
//! [`resolve_reference`] spells the rules out direction by direction and
//! is the canonical definition. [`resolve_cached`] computes the same mask
//! in one canonical-order pass through a [`SectionCache`].

use crate::cache::SectionCache;
use indexmap::IndexMap;
use labrys_core::{Connection, Coord, Direction, Section};

/// Full permission check for one diagonal.
struct DiagonalRule {
    diagonal: Direction,
    /// What the origin cell must allow.
    origin: Connection,
    /// Each neighbour in the block, and what it must allow.
    neighbours: [(Direction, Connection); 3],
}

const fn mask(dirs: [Direction; 3]) -> Connection {
    Connection::from_bits_retain(
        dirs[0].connection().bits() | dirs[1].connection().bits() | dirs[2].connection().bits(),
    )
}

use Direction::{
    East as E, North as N, Northeast as NE, Northwest as NW, South as S, Southeast as SE,
    Southwest as SW, West as W,
};

const DIAGONAL_RULES: [DiagonalRule; 4] = [
    DiagonalRule {
        diagonal: NE,
        origin: mask([N, E, NE]),
        neighbours: [
            (N, mask([E, S, SE])),
            (E, mask([N, W, NW])),
            (NE, mask([W, S, SW])),
        ],
    },
    DiagonalRule {
        diagonal: NW,
        origin: mask([N, W, NW]),
        neighbours: [
            (N, mask([W, S, SW])),
            (W, mask([N, E, NE])),
            (NW, mask([E, S, SE])),
        ],
    },
    DiagonalRule {
        diagonal: SW,
        origin: mask([S, W, SW]),
        neighbours: [
            (S, mask([W, N, NW])),
            (W, mask([S, E, SE])),
            (SW, mask([E, N, NE])),
        ],
    },
    DiagonalRule {
        diagonal: SE,
        origin: mask([S, E, SE]),
        neighbours: [
            (S, mask([E, N, NE])),
            (E, mask([S, W, SW])),
            (SE, mask([W, N, NW])),
        ],
    },
];

/// Reference adjacency of the cell at `pos`, whose section is `origin`:
/// direct map lookups, one rule per direction.
pub(crate) fn resolve_reference(
    cells: &IndexMap<Coord, Section>,
    pos: Coord,
    origin: Section,
) -> Connection {
    let neighbour = |dir: Direction| pos.checked_offset(dir).and_then(|at| cells.get(&at));
    let mut connected = Connection::NONE;

    for dir in Direction::CARDINALS {
        if !origin.can_connect(dir.connection()) {
            continue;
        }
        if neighbour(dir).is_some_and(|s| s.can_connect(dir.opposite().connection())) {
            connected |= dir.connection();
        }
    }

    for rule in &DIAGONAL_RULES {
        if !origin.can_connect(rule.origin) {
            continue;
        }
        let permitted = rule
            .neighbours
            .iter()
            .all(|&(dir, required)| neighbour(dir).is_some_and(|s| s.can_connect(required)));
        if permitted {
            connected |= rule.diagonal.connection();
        }
    }

    connected
}

/// Directions each cell of a 2x2 block must allow, in block order
/// bottom-left, bottom-right, top-right, top-left.
const BLOCK_CHECKS: [[Direction; 3]; 4] = [[E, NE, N], [N, NW, W], [W, SW, S], [S, SE, E]];

/// Whether all four cells of a 2x2 block exist and permit passage
/// around their shared corner.
fn check_2x2(block: [Option<Section>; 4]) -> bool {
    block.iter().zip(BLOCK_CHECKS.iter()).all(|(cell, checks)| {
        cell.is_some_and(|s| checks.iter().all(|d| s.can_connect(d.connection())))
    })
}

/// The 2x2 block containing `origin` and the corner toward `diagonal`,
/// in [`BLOCK_CHECKS`] order. `around` is indexed by canonical direction.
fn block_for(
    diagonal: Direction,
    origin: Section,
    around: &[Option<Section>; 8],
) -> [Option<Section>; 4] {
    let at = |d: Direction| around[d.index()];
    match diagonal {
        NE => [Some(origin), at(E), at(NE), at(N)],
        NW => [at(W), Some(origin), at(N), at(NW)],
        SW => [at(SW), at(S), Some(origin), at(W)],
        SE => [at(S), at(SE), at(E), Some(origin)],
        _ => [None; 4],
    }
}

/// Cache-first neighbour lookup, filling the cache on a primary hit.
fn lookup(
    cells: &IndexMap<Coord, Section>,
    cache: &mut SectionCache,
    at: Coord,
) -> Option<Section> {
    if let Some(section) = cache.get(at) {
        return Some(section);
    }
    let section = *cells.get(&at)?;
    cache.add(at, section);
    Some(section)
}

/// Cached adjacency of the cell at `pos`, whose section is `origin`: one
/// pass over all eight directions, then a 2x2 block re-check for every
/// diagonal that survived it.
pub(crate) fn resolve_cached(
    cells: &IndexMap<Coord, Section>,
    cache: &mut SectionCache,
    pos: Coord,
    origin: Section,
) -> Connection {
    let mut around: [Option<Section>; 8] = [None; 8];
    let mut connected = Connection::NONE;

    for dir in Direction::ALL {
        if !origin.can_connect(dir.connection()) {
            continue;
        }
        let Some(at) = pos.checked_offset(dir) else {
            continue;
        };
        let Some(neighbour) = lookup(cells, cache, at) else {
            continue;
        };
        around[dir.index()] = Some(neighbour);
        if neighbour.can_connect(dir.opposite().connection()) {
            connected |= dir.connection();
        }
    }

    for diagonal in Direction::DIAGONALS {
        if connected.has(diagonal) && !check_2x2(block_for(diagonal, origin, &around)) {
            connected.remove(diagonal.connection());
        }
    }

    connected
}
