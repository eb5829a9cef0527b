//! Data-integrity checks on a parsed catalog.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{TileCatalog, TileId};
use crate::error::CatalogError;

/// A single integrity problem found in a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The tile's image reference is empty
    EmptyPath { id: TileId },

    /// Width or height is zero
    ZeroDimension { id: TileId, width: u32, height: u32 },

    /// IDs are not `0..n`; `expected` is the first missing ID
    NonContiguous { expected: TileId, found: TileId },

    /// Declared `tilecount` differs from the number of distinct tiles
    ///
    /// The `tiled` crate keys tiles by ID, so duplicate IDs in the manifest
    /// collapse into one record and show up here.
    TileCountMismatch { declared: u32, actual: usize },

    /// Two tiles reference the same image
    DuplicatePath { id: TileId, first: TileId },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath { id } => write!(f, "tile {id} has an empty image path"),
            Self::ZeroDimension { id, width, height } => {
                write!(f, "tile {id} has zero-sized image {width}x{height}")
            }
            Self::NonContiguous { expected, found } => {
                write!(f, "expected tile {expected}, found tile {found}")
            }
            Self::TileCountMismatch { declared, actual } => {
                write!(f, "tilecount is {declared} but {actual} tiles are defined")
            }
            Self::DuplicatePath { id, first } => {
                write!(f, "tile {id} reuses the image of tile {first}")
            }
        }
    }
}

/// All issues found in one catalog, in the order they were detected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// `Ok(())` for a clean report, [`CatalogError::Validation`] otherwise
    pub fn into_result(self) -> Result<(), CatalogError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(CatalogError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// What the loader does with validation issues
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    /// Skip validation entirely
    Off,
    /// Log each issue as a warning and keep the catalog
    #[default]
    Warn,
    /// Fail the load on the first report with issues
    Strict,
}

/// Check a catalog for integrity problems
///
/// Identifiers are non-negative by construction (`u32`), so that property
/// needs no check here.
pub fn validate(catalog: &TileCatalog) -> ValidationReport {
    let mut issues = Vec::new();

    if catalog.tile_count as usize != catalog.len() {
        issues.push(ValidationIssue::TileCountMismatch {
            declared: catalog.tile_count,
            actual: catalog.len(),
        });
    }

    // IDs iterate in ascending order, so the first one that isn't its own
    // index marks the gap.
    if let Some((expected, found)) = catalog
        .ids()
        .enumerate()
        .map(|(index, id)| (index as TileId, id))
        .find(|(expected, found)| expected != found)
    {
        issues.push(ValidationIssue::NonContiguous { expected, found });
    }

    let mut seen: HashMap<&Path, TileId> = HashMap::new();
    for tile in catalog {
        if tile.image.as_os_str().is_empty() {
            issues.push(ValidationIssue::EmptyPath { id: tile.id });
        } else if let Some(&first) = seen.get(tile.image.as_path()) {
            issues.push(ValidationIssue::DuplicatePath { id: tile.id, first });
        } else {
            seen.insert(tile.image.as_path(), tile.id);
        }

        if tile.width == 0 || tile.height == 0 {
            issues.push(ValidationIssue::ZeroDimension {
                id: tile.id,
                width: tile.width,
                height: tile.height,
            });
        }
    }

    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bevy::math::UVec2;

    use super::*;
    use crate::catalog::TileDefinition;
    use crate::parse::parse_tsx;

    fn tile(id: TileId, image: &str, width: u32, height: u32) -> TileDefinition {
        TileDefinition {
            id,
            image: PathBuf::from(image),
            width,
            height,
        }
    }

    fn catalog(tile_count: u32, tiles: Vec<TileDefinition>) -> TileCatalog {
        TileCatalog::new("test", UVec2::new(16, 16), tile_count, 0, tiles)
    }

    #[test]
    fn test_reference_manifest_is_valid() {
        let bytes = include_bytes!("../tests/fixtures/objects.tsx");
        let catalog = parse_tsx("data/tsx/objects.tsx", bytes).unwrap();
        let report = validate(&catalog);
        assert!(report.is_ok(), "unexpected issues: {report}");
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_empty_path() {
        let report = validate(&catalog(1, vec![tile(0, "", 16, 16)]));
        assert_eq!(report.issues(), &[ValidationIssue::EmptyPath { id: 0 }]);
    }

    #[test]
    fn test_zero_dimension() {
        let report = validate(&catalog(2, vec![tile(0, "a.png", 0, 16), tile(1, "b.png", 16, 16)]));
        assert_eq!(
            report.issues(),
            &[ValidationIssue::ZeroDimension {
                id: 0,
                width: 0,
                height: 16
            }]
        );
    }

    #[test]
    fn test_gap_in_ids() {
        let report = validate(&catalog(
            3,
            vec![tile(0, "a.png", 16, 16), tile(1, "b.png", 16, 16), tile(5, "c.png", 16, 16)],
        ));
        assert_eq!(
            report.issues(),
            &[ValidationIssue::NonContiguous {
                expected: 2,
                found: 5
            }]
        );
    }

    #[test]
    fn test_ids_not_starting_at_zero() {
        let report = validate(&catalog(1, vec![tile(1, "a.png", 16, 16)]));
        assert_eq!(
            report.issues(),
            &[ValidationIssue::NonContiguous {
                expected: 0,
                found: 1
            }]
        );
    }

    #[test]
    fn test_tile_count_mismatch() {
        let report = validate(&catalog(3, vec![tile(0, "a.png", 16, 16)]));
        assert_eq!(
            report.issues(),
            &[ValidationIssue::TileCountMismatch {
                declared: 3,
                actual: 1
            }]
        );
    }

    #[test]
    fn test_duplicate_ids_in_manifest() {
        let bytes = br#"<?xml version="1.0" encoding="UTF-8"?>
<tileset version="1.10" name="dupes" tilewidth="16" tileheight="16" tilecount="2" columns="0">
 <tile id="0">
  <image width="16" height="16" source="a.png"/>
 </tile>
 <tile id="0">
  <image width="16" height="16" source="b.png"/>
 </tile>
</tileset>"#;
        let catalog = parse_tsx("dupes.tsx", bytes).unwrap();
        let report = validate(&catalog);
        assert!(report.issues().contains(&ValidationIssue::TileCountMismatch {
            declared: 2,
            actual: 1
        }));
    }

    #[test]
    fn test_duplicate_path() {
        let report = validate(&catalog(2, vec![tile(0, "a.png", 16, 16), tile(1, "a.png", 16, 16)]));
        assert_eq!(
            report.issues(),
            &[ValidationIssue::DuplicatePath { id: 1, first: 0 }]
        );
    }

    #[test]
    fn test_strict_report_becomes_error() {
        let report = validate(&catalog(1, vec![tile(0, "", 0, 0)]));
        assert_eq!(report.issues().len(), 2);
        let message = report.to_string();
        assert!(message.contains("empty image path"));
        assert!(message.contains("zero-sized"));
        assert!(matches!(report.into_result(), Err(CatalogError::Validation(_))));
    }
}
