//! Unified plugin for `bevy_tilecatalog`.

use bevy::prelude::*;

use bevy_tilecatalog_assets::TileCatalogAssetsPlugin;

use crate::verify::{DimensionReports, verify_loaded_dimensions};

/// Configuration for [`TileCatalogPlugin`].
#[derive(Resource, Clone, Debug)]
pub struct TileCatalogConfig {
    /// Compare declared tile sizes with the decoded images once a catalog has
    /// fully loaded, logging a warning per mismatch and recording the result in
    /// [`DimensionReports`] (default: true)
    ///
    /// Has no effect in apps without `ImagePlugin`.
    pub verify_dimensions: bool,
}

impl Default for TileCatalogConfig {
    fn default() -> Self {
        Self {
            verify_dimensions: true,
        }
    }
}

/// Unified plugin that adds tile catalog loading and checks.
///
/// This plugin:
/// - Adds [`TileCatalogAssetsPlugin`] for `.tsx` asset loading
/// - Inserts the [`TileCatalogConfig`] resource
/// - Optionally verifies image dimensions after load (if enabled)
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_tilecatalog::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(TileCatalogPlugin::default())
///     .run();
/// ```
///
/// # Custom Configuration
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_tilecatalog::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(TileCatalogPlugin::default().with_config(TileCatalogConfig {
///         verify_dimensions: false,
///     }))
///     .run();
/// ```
#[derive(Default)]
pub struct TileCatalogPlugin {
    pub config: TileCatalogConfig,
}

impl TileCatalogPlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: TileCatalogConfig) -> Self {
        Self { config }
    }

    pub fn with_config(mut self, config: TileCatalogConfig) -> Self {
        self.config = config;
        self
    }
}

impl Plugin for TileCatalogPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TileCatalogAssetsPlugin);

        app.insert_resource(self.config.clone());

        if self.config.verify_dimensions {
            app.init_resource::<DimensionReports>()
                .add_systems(Update, verify_loaded_dimensions);
        }

        info!("TileCatalogPlugin initialized");
    }
}
