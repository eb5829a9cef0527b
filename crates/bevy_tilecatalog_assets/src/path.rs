//! Path helpers shared by the parser and the Bevy loader.

use std::path::{Component, Path, PathBuf};

use crate::error::CatalogError;

/// Normalize a path lexically
///
/// Folds `.` and `..` components (`Path::join` does NOT do this) and converts
/// Windows separators so that paths written on either platform compare equal.
///
/// Tiled stores image references relative to the `.tsx` file, and the `tiled`
/// crate joins them onto the manifest directory while parsing. So
/// `data/tsx/../../graphics/objects/basket.png` becomes
/// `graphics/objects/basket.png`.
///
/// A `..` only cancels a preceding normal segment. Leading `..` segments of a
/// relative path are kept (`../game/data/../x.png` becomes `../game/x.png`);
/// `..` directly under the root of an absolute path is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let unified = path.to_string_lossy().replace('\\', "/");
    let mut normalized = PathBuf::new();

    for component in Path::new(&unified).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other),
        }
    }

    normalized
}

/// Convert a resolved path into a Bevy asset path (forward slashes, no leading slash)
///
/// # Errors
/// * [`CatalogError::InvalidPath`] - The path isn't UTF-8 or escapes the asset root with `..`
pub fn to_asset_path(path: &Path) -> Result<String, CatalogError> {
    if path.components().next() == Some(Component::ParentDir) {
        return Err(CatalogError::InvalidPath(format!(
            "{:?} points outside the asset root",
            path
        )));
    }

    let asset_path = path
        .to_str()
        .ok_or_else(|| CatalogError::InvalidPath(format!("Invalid UTF-8 in path: {:?}", path)))?
        .replace('\\', "/");

    Ok(asset_path.trim_start_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_parent_components() {
        let resolved = normalize(Path::new("data/tsx/../../graphics/objects/basket.png"));
        assert_eq!(resolved, PathBuf::from("graphics/objects/basket.png"));
    }

    #[test]
    fn test_normalize_keeps_leading_parents() {
        let resolved = normalize(Path::new("../game/data/tsx/../../graphics/basket.png"));
        assert_eq!(resolved, PathBuf::from("../game/graphics/basket.png"));

        // More `..` than there are segments to cancel
        let resolved = normalize(Path::new("data/../../sprites/rock.png"));
        assert_eq!(resolved, PathBuf::from("../sprites/rock.png"));

        let resolved = normalize(Path::new("../../a.png"));
        assert_eq!(resolved, PathBuf::from("../../a.png"));
    }

    #[test]
    fn test_normalize_absolute_root() {
        let resolved = normalize(Path::new("/../assets/./tiles/../rock.png"));
        assert_eq!(resolved, PathBuf::from("/assets/rock.png"));
    }

    #[test]
    fn test_normalize_keeps_spaces() {
        let resolved = normalize(Path::new("tilesets/./water decorations/water_0.png"));
        assert_eq!(
            resolved,
            PathBuf::from("tilesets/water decorations/water_0.png")
        );
    }

    #[test]
    fn test_windows_separators() {
        let resolved = normalize(Path::new("data/tsx/..\\sprites\\bed.png"));
        assert_eq!(
            to_asset_path(&resolved).ok().as_deref(),
            Some("data/sprites/bed.png")
        );
    }

    #[test]
    fn test_asset_path_strips_leading_slash() {
        let asset_path = to_asset_path(Path::new("/graphics/objects/basket.png"));
        assert_eq!(asset_path.ok().as_deref(), Some("graphics/objects/basket.png"));
    }

    #[test]
    fn test_asset_path_outside_root_rejected() {
        let asset_path = to_asset_path(Path::new("../graphics/objects/basket.png"));
        assert!(matches!(asset_path, Err(CatalogError::InvalidPath(_))));
    }
}
