//! `.tsx` manifest parsing.
//!
//! Parsing is delegated to the `tiled` crate. The manifest bytes are handed to it
//! through an in-memory [`ResourceReader`] so the same code path serves files on
//! disk, bytes from Bevy's asset reader, and test fixtures.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use bevy::log::debug;
use bevy::math::UVec2;
use tiled::{DefaultResourceCache, Loader, ResourceReader};

use crate::catalog::{TileCatalog, TileDefinition};
use crate::error::CatalogError;
use crate::path::normalize;

/// Serves a single manifest from memory
///
/// Any other path requested by the `tiled` loader (a tileset never references
/// further `.tsx` files, but templates could) is reported as not found.
struct BytesResourceReader<'a> {
    path: &'a Path,
    bytes: &'a [u8],
}

impl ResourceReader for BytesResourceReader<'_> {
    type Resource = Cursor<Vec<u8>>;
    type Error = std::io::Error;

    fn read_from(&mut self, path: &Path) -> Result<Self::Resource, Self::Error> {
        if path == self.path {
            Ok(Cursor::new(self.bytes.to_vec()))
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{:?} is not available to the tileset parser", path),
            ))
        }
    }
}

/// Parse a tileset manifest from bytes
///
/// # Arguments
/// * `path` - The manifest's own path; relative image references are resolved against its directory
/// * `bytes` - The manifest contents
///
/// # Errors
/// * [`CatalogError::TiledError`] - The XML is malformed or not a tileset
/// * [`CatalogError::NotImageCollection`] - The tileset uses one spritesheet instead of per-tile images
/// * [`CatalogError::MissingImage`] - A tile entry has no image
/// * [`CatalogError::InvalidDimensions`] - A tile declares a negative width or height
pub fn parse_tsx(path: impl AsRef<Path>, bytes: &[u8]) -> Result<TileCatalog, CatalogError> {
    let path = path.as_ref();
    let reader = BytesResourceReader { path, bytes };
    let mut loader = Loader::with_cache_and_reader(DefaultResourceCache::new(), reader);
    let tileset = loader.load_tsx_tileset(path)?;

    catalog_from_tileset(&tileset)
}

/// Read a tileset manifest from disk and parse it
pub fn load_tsx(path: impl AsRef<Path>) -> Result<TileCatalog, CatalogError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    parse_tsx(path, &bytes)
}

/// Convert a parsed `tiled` tileset into a catalog
pub fn catalog_from_tileset(tileset: &tiled::Tileset) -> Result<TileCatalog, CatalogError> {
    if tileset.image.is_some() {
        return Err(CatalogError::NotImageCollection(tileset.name.clone()));
    }

    let manifest_dir = normalize(tileset.source.parent().unwrap_or_else(|| Path::new("")));

    let mut tiles = Vec::new();
    for (id, tile) in tileset.tiles() {
        let image = tile.image.as_ref().ok_or(CatalogError::MissingImage(id))?;

        let (width, height) = match (u32::try_from(image.width), u32::try_from(image.height)) {
            (Ok(width), Ok(height)) => (width, height),
            _ => {
                return Err(CatalogError::InvalidDimensions {
                    id,
                    width: image.width,
                    height: image.height,
                });
            }
        };

        tiles.push(TileDefinition {
            id,
            image: image_path(&manifest_dir, &image.source),
            width,
            height,
        });
    }

    let catalog = TileCatalog::new(
        tileset.name.clone(),
        UVec2::new(tileset.tile_width, tileset.tile_height),
        tileset.tilecount,
        tileset.columns,
        tiles,
    );

    debug!(
        "Parsed tileset '{}' with {} tiles",
        catalog.name,
        catalog.len()
    );

    Ok(catalog)
}

fn image_path(manifest_dir: &Path, source: &Path) -> PathBuf {
    // `tiled` joins an empty `source` attribute onto the manifest directory;
    // keep it empty so validation can report it
    let resolved = normalize(source);
    if resolved == manifest_dir {
        PathBuf::new()
    } else {
        resolved
    }
}
