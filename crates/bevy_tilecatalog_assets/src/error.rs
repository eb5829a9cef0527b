use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::TileId;
use crate::validate::ValidationReport;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse tileset: {0}")]
    TiledError(#[from] tiled::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Tileset {0:?} uses a single spritesheet, expected one image per tile")]
    NotImageCollection(String),

    #[error("Tile {0} has no image")]
    MissingImage(TileId),

    #[error("Tile {id} declares invalid dimensions {width}x{height}")]
    InvalidDimensions { id: TileId, width: i32, height: i32 },

    #[error("Failed to read image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tileset failed validation: {0}")]
    Validation(ValidationReport),
}
