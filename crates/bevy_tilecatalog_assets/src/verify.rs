//! Compare declared tile sizes against the real bitmaps.
//!
//! A manifest only records the size Tiled saw when the image was added. Images
//! edited afterwards (cropped, rescaled) silently drift from it.

use std::path::{Path, PathBuf};

use bevy::math::UVec2;

use crate::catalog::{TileCatalog, TileDefinition, TileId};
use crate::error::CatalogError;

/// A tile whose image does not match its declared size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub id: TileId,
    pub image: PathBuf,
    pub declared: UVec2,
    pub actual: UVec2,
}

/// Compare each tile's declared size against `actual`
///
/// Tiles for which `actual` returns `None` (image not available) are skipped.
pub fn check_dimensions(
    catalog: &TileCatalog,
    mut actual: impl FnMut(&TileDefinition) -> Option<UVec2>,
) -> Vec<DimensionMismatch> {
    catalog
        .iter()
        .filter_map(|tile| compare(tile, actual(tile)?))
        .collect()
}

fn compare(tile: &TileDefinition, actual: UVec2) -> Option<DimensionMismatch> {
    (actual != tile.size()).then(|| DimensionMismatch {
        id: tile.id,
        image: tile.image.clone(),
        declared: tile.size(),
        actual,
    })
}

/// Read image headers under `root` and compare them against the catalog
///
/// Only the header of each image is decoded.
///
/// # Errors
/// * [`CatalogError::Image`] - An image is missing or unreadable
pub fn verify_on_disk(
    catalog: &TileCatalog,
    root: impl AsRef<Path>,
) -> Result<Vec<DimensionMismatch>, CatalogError> {
    let root = root.as_ref();
    let mut mismatches = Vec::new();

    for tile in catalog {
        let path = root.join(&tile.image);
        let (width, height) =
            image::image_dimensions(&path).map_err(|source| CatalogError::Image {
                path: path.clone(),
                source,
            })?;

        mismatches.extend(compare(tile, UVec2::new(width, height)));
    }

    Ok(mismatches)
}
