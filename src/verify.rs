//! Runtime check of declared tile sizes against loaded images.

use bevy::{platform::collections::HashMap, prelude::*};
use bevy_tilecatalog_assets::TileCatalogAsset;
use bevy_tilecatalog_assets::verify::{DimensionMismatch, check_dimensions};

/// Size mismatches found per fully-loaded catalog
///
/// A catalog gets an entry (possibly empty) once it and all of its images
/// have loaded.
#[derive(Resource, Default, Debug)]
pub struct DimensionReports {
    reports: HashMap<AssetId<TileCatalogAsset>, Vec<DimensionMismatch>>,
}

impl DimensionReports {
    /// Mismatches recorded for a catalog, `None` if it hasn't been checked yet
    pub fn get(
        &self,
        id: impl Into<AssetId<TileCatalogAsset>>,
    ) -> Option<&[DimensionMismatch]> {
        self.reports.get(&id.into()).map(Vec::as_slice)
    }
}

/// Compare a loaded catalog against the images Bevy decoded for it
///
/// Tiles whose image is not (yet) in `images` are skipped.
pub fn loaded_dimension_mismatches(
    asset: &TileCatalogAsset,
    images: &Assets<Image>,
) -> Vec<DimensionMismatch> {
    check_dimensions(&asset.catalog, |tile| {
        asset
            .image(tile.id)
            .and_then(|handle| images.get(handle))
            .map(Image::size)
    })
}

/// Record and warn about every tile whose image size differs from its declared size
///
/// Runs once per catalog, when the catalog and all of its images have loaded.
/// Without an `Assets<Image>` resource (no `ImagePlugin`) there is nothing to
/// compare against and events are discarded.
pub fn verify_loaded_dimensions(
    mut events: MessageReader<AssetEvent<TileCatalogAsset>>,
    catalogs: Res<Assets<TileCatalogAsset>>,
    images: Option<Res<Assets<Image>>>,
    mut reports: ResMut<DimensionReports>,
) {
    let Some(images) = images else {
        events.clear();
        return;
    };

    for event in events.read() {
        let AssetEvent::LoadedWithDependencies { id } = event else {
            continue;
        };
        let Some(asset) = catalogs.get(*id) else {
            continue;
        };

        let mismatches = loaded_dimension_mismatches(asset, &images);
        if mismatches.is_empty() {
            debug!(
                "Tile catalog '{}': all {} image sizes match",
                asset.catalog.name,
                asset.catalog.len()
            );
        }
        for mismatch in &mismatches {
            warn!(
                "Tile catalog '{}': tile {} ({:?}) declares {} but the image is {}",
                asset.catalog.name, mismatch.id, mismatch.image, mismatch.declared, mismatch.actual
            );
        }
        reports.reports.insert(*id, mismatches);
    }
}
