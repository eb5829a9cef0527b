//! # bevy_tilecatalog
//!
//! Tiled tileset catalogs for Bevy.
//!
//! A tileset manifest (`.tsx`) authored in Tiled lists tiles by integer ID, each
//! pointing at its own image with a declared pixel size. This crate loads such a
//! manifest into a [`TileCatalog`](assets::TileCatalog), checks it, and makes it
//! available as a Bevy asset.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_tilecatalog::prelude::*;
//!
//! #[derive(Resource)]
//! struct Objects(Handle<TileCatalogAsset>);
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(TileCatalogPlugin::default())
//!         .add_systems(Startup, load_objects)
//!         .run();
//! }
//!
//! fn load_objects(mut commands: Commands, asset_server: Res<AssetServer>) {
//!     commands.insert_resource(Objects(asset_server.load("data/tsx/objects.tsx")));
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`assets`]: catalog model, `.tsx` parsing, validation, JSON export and the
//!   Bevy asset loader. Usable without an `App`.
//! - This crate: the unified [`TileCatalogPlugin`](plugin::TileCatalogPlugin)
//!   and the post-load image size check.

pub mod plugin;
pub mod verify;

pub use bevy_tilecatalog_assets as assets;

/// Unified prelude for `bevy_tilecatalog`
pub mod prelude {
    pub use crate::assets::prelude::*;

    pub use crate::plugin::{TileCatalogConfig, TileCatalogPlugin};
    pub use crate::verify::DimensionReports;
}
