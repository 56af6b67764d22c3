//! Deterministic grid fixtures.
//!
//! Every random fixture takes a seed and draws from a ChaCha8 stream, so
//! the same seed always produces the same grid (including insertion
//! order).

use labrys_core::{Connection, Coord, Direction, Section};
use labrys_grid::{Grid, GridConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A fully occupied `side x side` square with its lower-left corner at the
/// origin, inserted in row-major order.
pub fn dense_grid(side: i32, section: Section, config: GridConfig) -> Grid {
    let mut grid = Grid::with_config(config).expect("fixture grid config must be valid");
    for y in 0..side {
        for x in 0..side {
            grid.insert(Coord::new(x, y), section);
        }
    }
    grid
}

/// A section whose external mask has each direction independently set
/// with probability `open_probability`.
pub fn random_section(rng: &mut impl Rng, open_probability: f64) -> Section {
    let external = Connection::from_directions(
        Direction::ALL
            .into_iter()
            .filter(|_| rng.gen_bool(open_probability)),
    );
    Section::new(external)
}

/// `count` insertions at uniformly random coordinates in
/// `[-extent, extent)²`. Repeated coordinates overwrite.
pub fn random_grid(seed: u64, count: usize, extent: i32, config: GridConfig) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::with_config(config).expect("fixture grid config must be valid");
    for _ in 0..count {
        let pos = Coord::new(rng.gen_range(-extent..extent), rng.gen_range(-extent..extent));
        let section = random_section(&mut rng, 0.8);
        grid.insert(pos, section);
    }
    grid
}

/// A branching corridor layout: a random walk of `steps` cardinal moves
/// that occasionally jumps back to an earlier cell to start a branch.
pub fn random_walk_grid(seed: u64, steps: usize, config: GridConfig) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::with_config(config).expect("fixture grid config must be valid");
    let mut visited = vec![Coord::ORIGIN];
    let mut at = Coord::ORIGIN;
    grid.insert(at, Section::open());

    for _ in 0..steps {
        if rng.gen_bool(0.1) {
            at = visited[rng.gen_range(0..visited.len())];
        }
        let dir = Direction::CARDINALS[rng.gen_range(0..4)];
        at = at.offset(dir);
        if !grid.contains(at) {
            visited.push(at);
        }
        grid.insert(at, random_section(&mut rng, 0.9));
    }
    grid
}
