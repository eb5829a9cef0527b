//! The in-memory tile catalog: an ordered mapping from local tile id to an
//! image reference with its declared pixel size.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bevy::math::UVec2;
use serde::{Deserialize, Serialize};

/// Local tile identifier (0-based, NOT a GID)
pub type TileId = u32;

/// One catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDefinition {
    /// Local tile ID (stable index within the set)
    pub id: TileId,

    /// Image path, resolved against the manifest's directory and normalized
    pub image: PathBuf,

    /// Declared image width in pixels
    pub width: u32,

    /// Declared image height in pixels
    pub height: u32,
}

impl TileDefinition {
    /// Declared size in pixels (width, height)
    #[inline]
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Declared size multiplied by an integer zoom factor
    #[inline]
    pub fn scaled_size(&self, factor: u32) -> UVec2 {
        self.size() * factor
    }

    /// File stem of the image (`"basket"` for `objects/basket.png`)
    pub fn stem(&self) -> Option<&str> {
        self.image.file_stem().and_then(|stem| stem.to_str())
    }
}

/// A parsed tileset catalog
///
/// Tiles are kept in ascending ID order. The catalog has no mutation API: it is
/// built once by the parser (or deserialized from JSON) and read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCatalog {
    /// Tileset name as authored in Tiled
    pub name: String,

    /// Declared grid cell size (`tilewidth`/`tileheight` on the tileset)
    pub tile_size: UVec2,

    /// Declared number of tiles (`tilecount` on the tileset)
    pub tile_count: u32,

    /// Declared column count; 0 for image collections
    pub columns: u32,

    tiles: BTreeMap<TileId, TileDefinition>,
}

impl TileCatalog {
    /// Build a catalog from its records
    ///
    /// A later record with an ID already present replaces the earlier one.
    pub fn new(
        name: impl Into<String>,
        tile_size: UVec2,
        tile_count: u32,
        columns: u32,
        tiles: impl IntoIterator<Item = TileDefinition>,
    ) -> Self {
        Self {
            name: name.into(),
            tile_size,
            tile_count,
            columns,
            tiles: tiles.into_iter().map(|tile| (tile.id, tile)).collect(),
        }
    }

    pub fn get(&self, id: TileId) -> Option<&TileDefinition> {
        self.tiles.get(&id)
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains_key(&id)
    }

    /// Number of records actually present (may differ from `tile_count`)
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate records in ascending ID order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TileDefinition> {
        self.tiles.values()
    }

    /// Iterate IDs in ascending order
    pub fn ids(&self) -> impl ExactSizeIterator<Item = TileId> + '_ {
        self.tiles.keys().copied()
    }

    /// Find the first tile (in ID order) whose image file stem equals `stem`
    pub fn find_by_stem(&self, stem: &str) -> Option<&TileDefinition> {
        self.iter().find(|tile| tile.stem() == Some(stem))
    }

    /// Find the tile referencing exactly `image`
    pub fn find_by_image(&self, image: impl AsRef<Path>) -> Option<&TileDefinition> {
        let image = image.as_ref();
        self.iter().find(|tile| tile.image == image)
    }

    /// Convert a map-global ID to a local ID
    ///
    /// Maps reference a tileset starting at `first_gid`, so `gid = first_gid + local_id`.
    ///
    /// # Returns
    /// * `Some(id)` - The local ID, if it exists in this catalog
    /// * `None` - If `gid < first_gid` or the resulting ID is not in the catalog
    pub fn local_id(&self, gid: u32, first_gid: u32) -> Option<TileId> {
        let id = gid.checked_sub(first_gid)?;
        self.contains(id).then_some(id)
    }

    /// Component-wise maximum of all declared tile sizes
    ///
    /// Returns `UVec2::ZERO` for an empty catalog.
    pub fn largest_tile_size(&self) -> UVec2 {
        self.iter().fold(UVec2::ZERO, |acc, tile| acc.max(tile.size()))
    }
}

impl<'a> IntoIterator for &'a TileCatalog {
    type Item = &'a TileDefinition;
    type IntoIter = std::collections::btree_map::Values<'a, TileId, TileDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(id: TileId, image: &str, width: u32, height: u32) -> TileDefinition {
        TileDefinition {
            id,
            image: PathBuf::from(image),
            width,
            height,
        }
    }

    fn sample() -> TileCatalog {
        TileCatalog::new(
            "objects",
            UVec2::new(48, 48),
            3,
            0,
            vec![
                tile(2, "graphics/objects/water_well.png", 32, 32),
                tile(0, "graphics/objects/basket.png", 16, 16),
                tile(1, "graphics/objects/blanket.png", 48, 48),
            ],
        )
    }

    #[test]
    fn test_iteration_is_ordered_by_id() {
        let catalog = sample();
        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(catalog.iter().next().map(|t| t.id), Some(0));
    }

    #[test]
    fn test_get_and_contains() {
        let catalog = sample();
        assert_eq!(catalog.get(1).map(|t| t.size()), Some(UVec2::new(48, 48)));
        assert!(catalog.contains(2));
        assert!(!catalog.contains(3));
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_find_by_stem() {
        let catalog = sample();
        assert_eq!(catalog.find_by_stem("water_well").map(|t| t.id), Some(2));
        assert!(catalog.find_by_stem("bed").is_none());
    }

    #[test]
    fn test_find_by_image() {
        let catalog = sample();
        let found = catalog.find_by_image("graphics/objects/blanket.png");
        assert_eq!(found.map(|t| t.id), Some(1));
    }

    #[test]
    fn test_local_id_from_gid() {
        let catalog = sample();
        assert_eq!(catalog.local_id(10, 10), Some(0));
        assert_eq!(catalog.local_id(12, 10), Some(2));
        // Past the end of the catalog
        assert_eq!(catalog.local_id(13, 10), None);
        // Below first_gid
        assert_eq!(catalog.local_id(5, 10), None);
    }

    #[test]
    fn test_scaled_size() {
        let basket = tile(0, "basket.png", 16, 16);
        assert_eq!(basket.scaled_size(4), UVec2::new(64, 64));
        assert_eq!(basket.scaled_size(1), basket.size());
    }

    #[test]
    fn test_largest_tile_size() {
        let catalog = TileCatalog::new(
            "mixed",
            UVec2::new(16, 16),
            2,
            0,
            vec![tile(0, "a.png", 16, 24), tile(1, "b.png", 32, 16)],
        );
        assert_eq!(catalog.largest_tile_size(), UVec2::new(32, 24));

        let empty = TileCatalog::new("empty", UVec2::ZERO, 0, 0, Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.largest_tile_size(), UVec2::ZERO);
    }

    #[test]
    fn test_duplicate_id_keeps_last_record() {
        let catalog = TileCatalog::new(
            "dupes",
            UVec2::new(16, 16),
            2,
            0,
            vec![tile(0, "first.png", 16, 16), tile(0, "second.png", 16, 16)],
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).and_then(|t| t.stem()), Some("second"));
    }
}
