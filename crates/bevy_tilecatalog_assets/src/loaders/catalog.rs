use std::path::Path;

use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    platform::collections::HashMap,
    prelude::*,
    tasks::ConditionalSendFuture,
};
use serde::{Deserialize, Serialize};

use crate::assets::catalog::TileCatalogAsset;
use crate::catalog::{TileCatalog, TileId};
use crate::error::CatalogError;
use crate::parse::parse_tsx;
use crate::path::to_asset_path;
use crate::validate::{ValidationMode, validate};

/// Asset loader for tileset catalogs (.tsx files)
///
/// Only image collection tilesets (one image per tile) are accepted.
#[derive(Default)]
pub struct TileCatalogAssetLoader;

/// Per-asset loader settings (stored in the asset's `.meta` file)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileCatalogLoaderSettings {
    /// How validation issues are handled
    pub validation: ValidationMode,

    /// Request every tile image as a dependency of the catalog
    pub load_images: bool,
}

impl Default for TileCatalogLoaderSettings {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Warn,
            load_images: true,
        }
    }
}

impl AssetLoader for TileCatalogAssetLoader {
    type Asset = TileCatalogAsset;
    type Settings = TileCatalogLoaderSettings;
    type Error = CatalogError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        settings: &Self::Settings,
        load_context: &mut LoadContext,
    ) -> impl ConditionalSendFuture<Output = Result<Self::Asset, Self::Error>> {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;

            // The asset path doubles as the manifest path, so image paths come out
            // asset-root-relative
            let asset_path = load_context.asset_path().path().to_path_buf();
            let catalog = prepare_catalog(&asset_path, &bytes, settings)?;

            let mut images = HashMap::default();
            if settings.load_images {
                for (id, image_path) in image_asset_paths(&catalog)? {
                    let handle: Handle<Image> = load_context.load(image_path);
                    images.insert(id, handle);
                }
            }

            debug!(
                "Loaded tile catalog '{}' from {:?} ({} tiles, {} images)",
                catalog.name,
                asset_path,
                catalog.len(),
                images.len()
            );

            Ok(TileCatalogAsset { catalog, images })
        }
    }

    fn extensions(&self) -> &[&str] {
        &["tsx"]
    }
}

/// Parse a manifest and apply the configured validation mode
fn prepare_catalog(
    path: &Path,
    bytes: &[u8],
    settings: &TileCatalogLoaderSettings,
) -> Result<TileCatalog, CatalogError> {
    let catalog = parse_tsx(path, bytes)?;

    match settings.validation {
        ValidationMode::Off => {}
        ValidationMode::Warn => {
            for issue in validate(&catalog).issues() {
                warn!("Tileset {:?}: {}", path, issue);
            }
        }
        ValidationMode::Strict => validate(&catalog).into_result()?,
    }

    Ok(catalog)
}

/// Asset paths of every tile image, keyed by tile ID
///
/// Tiles with an empty image reference are skipped.
fn image_asset_paths(catalog: &TileCatalog) -> Result<Vec<(TileId, String)>, CatalogError> {
    catalog
        .iter()
        .filter(|tile| !tile.image.as_os_str().is_empty())
        .map(|tile| Ok((tile.id, to_asset_path(&tile.image)?)))
        .collect()
}
