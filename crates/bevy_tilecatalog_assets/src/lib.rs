//! # `bevy_tilecatalog_assets`
//!
//! Loading and checking of Tiled tileset manifests (`.tsx`) that list one image
//! per tile. A manifest becomes a [`TileCatalog`]: an ordered mapping from local
//! tile ID to an image path with its declared pixel size.
//!
//! The catalog layer works without an `App`:
//!
//! ```rust,no_run
//! use bevy_tilecatalog_assets::prelude::*;
//!
//! # fn main() -> Result<(), CatalogError> {
//! let catalog = load_tsx("data/tsx/objects.tsx")?;
//! validate(&catalog).into_result()?;
//!
//! let basket = catalog.find_by_stem("basket").expect("basket tile");
//! println!("{:?} is {}", basket.image, basket.scaled_size(4));
//! # Ok(())
//! # }
//! ```
//!
//! With Bevy, add [`TileCatalogAssetsPlugin`] and load `.tsx` files through the
//! `AssetServer` as [`TileCatalogAsset`]s.

pub mod assets;
pub mod catalog;
pub mod error;
pub mod export;
pub mod loaders;
pub mod parse;
pub mod path;
pub mod plugin;
pub mod validate;
pub mod verify;

pub use assets::catalog::TileCatalogAsset;
pub use catalog::{TileCatalog, TileDefinition, TileId};
pub use error::CatalogError;
pub use loaders::catalog::{TileCatalogAssetLoader, TileCatalogLoaderSettings};
pub use plugin::TileCatalogAssetsPlugin;

pub mod prelude {
    //! Common imports for `bevy_tilecatalog_assets` users.

    pub use crate::assets::catalog::TileCatalogAsset;
    pub use crate::catalog::{TileCatalog, TileDefinition, TileId};
    pub use crate::error::CatalogError;
    pub use crate::export::{from_json, to_json};
    pub use crate::loaders::catalog::TileCatalogLoaderSettings;
    pub use crate::parse::{load_tsx, parse_tsx};
    pub use crate::plugin::TileCatalogAssetsPlugin;
    pub use crate::validate::{ValidationIssue, ValidationMode, ValidationReport, validate};
    pub use crate::verify::{DimensionMismatch, check_dimensions, verify_on_disk};
}
