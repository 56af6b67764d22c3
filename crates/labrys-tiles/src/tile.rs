//! Tile descriptors.

use labrys_core::Section;
use std::fmt;

/// The kind of a tile (e.g. `"corridor"`, `"corner"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileType {
    name: String,
}

impl TileType {
    /// A tile type called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The type's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A placeable 1x1 grid element.
///
/// `tile_type` and `variant` together identify the tile within a
/// [`TileSet`](crate::TileSet). `section` is what the tile contributes to
/// a grid cell; `prefab` names the world object a loader instantiates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// The tile's kind.
    pub tile_type: TileType,
    /// Distinguishes tiles of the same type.
    pub variant: String,
    /// Connection permissions in the tile's unrotated orientation.
    pub section: Section,
    /// Identifier of the object to instantiate.
    pub prefab: String,
}

impl Tile {
    /// Describe a tile.
    pub fn new(
        tile_type: TileType,
        variant: impl Into<String>,
        section: Section,
        prefab: impl Into<String>,
    ) -> Self {
        Self {
            tile_type,
            variant: variant.into(),
            section,
            prefab: prefab.into(),
        }
    }

    /// The tile's section after `quarter_turns` counter-clockwise turns.
    pub fn section_rotated(&self, quarter_turns: u8) -> Section {
        self.section.rotated(quarter_turns)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile type {}, variant {}, prefab {}",
            self.tile_type, self.variant, self.prefab
        )
    }
}
