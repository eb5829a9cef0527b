//! JSON export of a catalog for asset pipelines that don't read `.tsx`.

use crate::catalog::TileCatalog;
use crate::error::CatalogError;

/// Serialize a catalog as pretty-printed JSON
pub fn to_json(catalog: &TileCatalog) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Read a catalog back from JSON written by [`to_json`]
pub fn from_json(json: &str) -> Result<TileCatalog, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
