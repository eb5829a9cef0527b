use bevy::prelude::*;

use crate::assets::catalog::TileCatalogAsset;
use crate::loaders::catalog::TileCatalogAssetLoader;

/// Plugin that registers the tile catalog asset type and loader
///
/// This plugin enables loading `.tsx` tileset manifests as Bevy assets.
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_tilecatalog_assets::TileCatalogAssetsPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(TileCatalogAssetsPlugin)
///     .run();
/// ```
///
/// # What this plugin does NOT do
///
/// - Entity spawning or rendering
/// - Map (.tmx) loading
///
/// This is a **Layer 1** plugin: pure asset loading with no ECS concerns.
pub struct TileCatalogAssetsPlugin;

impl Plugin for TileCatalogAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<TileCatalogAsset>()
            .register_asset_loader(TileCatalogAssetLoader);
    }
}
