//! Registry of tiles keyed by `(type, variant)`.

use crate::error::TileSetError;
use crate::tile::Tile;
use indexmap::IndexMap;
use labrys_core::Connection;

/// Insertion-ordered collection of [`Tile`]s.
///
/// Each `(type name, variant)` pair identifies at most one tile.
#[derive(Clone, Debug, Default)]
pub struct TileSet {
    tiles: IndexMap<(String, String), Tile>,
}

impl TileSet {
    /// An empty tile set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tile`. Rejects a second tile with the same type and variant.
    pub fn insert(&mut self, tile: Tile) -> Result<(), TileSetError> {
        let key = (tile.tile_type.name().to_owned(), tile.variant.clone());
        if self.tiles.contains_key(&key) {
            return Err(TileSetError::Duplicate {
                tile_type: key.0,
                variant: key.1,
            });
        }
        self.tiles.insert(key, tile);
        Ok(())
    }

    /// The tile registered under `tile_type` and `variant`.
    pub fn get(&self, tile_type: &str, variant: &str) -> Option<&Tile> {
        self.tiles
            .get(&(tile_type.to_owned(), variant.to_owned()))
    }

    /// Every variant of `tile_type`, in registration order.
    pub fn variants<'a>(&'a self, tile_type: &'a str) -> impl Iterator<Item = &'a Tile> + 'a {
        self.tiles
            .values()
            .filter(move |t| t.tile_type.name() == tile_type)
    }

    /// All tiles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Number of registered tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tile is registered.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The first tile (in registration order) whose external connections,
    /// turned by some number of quarter turns, are exactly `required`.
    ///
    /// Returns the tile and the quarter turns (0..4) to apply. The
    /// smallest turn count wins for a given tile.
    pub fn find_fitting(&self, required: Connection) -> Option<(&Tile, u8)> {
        self.tiles.values().find_map(|tile| {
            (0..4u8)
                .find(|&turns| tile.section.external.rotated(turns) == required)
                .map(|turns| (tile, turns))
        })
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = indexmap::map::Values<'a, (String, String), Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileType;
    use labrys_core::Section;

    fn tile(kind: &str, variant: &str, mask: Connection) -> Tile {
        Tile::new(
            TileType::new(kind),
            variant,
            Section::new(mask),
            format!("{kind}_{variant}"),
        )
    }

    fn sample() -> TileSet {
        let mut set = TileSet::new();
        set.insert(tile("dead_end", "a", Connection::EAST)).unwrap();
        set.insert(tile("corridor", "a", Connection::EAST | Connection::WEST))
            .unwrap();
        set.insert(tile("corridor", "b", Connection::EAST | Connection::WEST))
            .unwrap();
        set.insert(tile("corner", "a", Connection::EAST | Connection::NORTH))
            .unwrap();
        set
    }

    #[test]
    fn duplicate_rejected() {
        let mut set = sample();
        let err = set
            .insert(tile("corridor", "a", Connection::NONE))
            .unwrap_err();
        assert_eq!(
            err,
            TileSetError::Duplicate {
                tile_type: "corridor".into(),
                variant: "a".into()
            }
        );
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn lookup_by_type_and_variant() {
        let set = sample();
        assert_eq!(set.get("corridor", "b").unwrap().prefab, "corridor_b");
        assert!(set.get("corridor", "z").is_none());
        let variants: Vec<_> = set.variants("corridor").map(|t| t.variant.as_str()).collect();
        assert_eq!(variants, vec!["a", "b"]);
    }

    #[test]
    fn find_fitting_rotates() {
        let set = sample();
        let (t, turns) = set.find_fitting(Connection::NORTH | Connection::SOUTH).unwrap();
        assert_eq!(t.prefab, "corridor_a");
        assert_eq!(turns, 1);

        let (t, turns) = set.find_fitting(Connection::SOUTH).unwrap();
        assert_eq!(t.prefab, "dead_end_a");
        assert_eq!(turns, 3);

        let (t, turns) = set.find_fitting(Connection::WEST | Connection::SOUTH).unwrap();
        assert_eq!(t.prefab, "corner_a");
        assert_eq!(turns, 2);

        assert!(set.find_fitting(Connection::ALL).is_none());
    }

    #[test]
    fn iteration_in_registration_order() {
        let set = sample();
        let prefabs: Vec<_> = (&set).into_iter().map(|t| t.prefab.as_str()).collect();
        assert_eq!(prefabs, vec!["dead_end_a", "corridor_a", "corridor_b", "corner_a"]);
        assert_eq!(set.iter().count(), 4);
    }
}
