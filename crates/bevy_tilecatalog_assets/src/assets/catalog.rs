use bevy::{platform::collections::HashMap, prelude::*};

use crate::catalog::{TileCatalog, TileId};

/// Bevy asset wrapper for a tileset catalog (.tsx files)
#[derive(TypePath, Asset, Debug)]
pub struct TileCatalogAsset {
    /// The parsed catalog
    ///
    /// Image paths here are asset-root-relative.
    pub catalog: TileCatalog,

    /// Per-tile image handles
    ///
    /// Key: Local tile ID (0-based, NOT GID)
    /// Empty when the loader ran with `load_images: false`.
    pub images: HashMap<TileId, Handle<Image>>,
}

impl TileCatalogAsset {
    /// Get the image handle for a specific tile
    ///
    /// # Returns
    /// * `Some(&Handle<Image>)` - The image handle for this tile
    /// * `None` - If the tile doesn't exist or its image wasn't requested
    pub fn image(&self, id: TileId) -> Option<&Handle<Image>> {
        self.images.get(&id)
    }
}
