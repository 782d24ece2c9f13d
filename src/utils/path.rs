//! Lexical path helpers.

use std::path::{Component, Path, PathBuf};

/// Normalize a path without touching the filesystem.
///
/// Resolves `.` and `..` components lexically, so it also works for paths
/// that do not exist yet.
///
/// # Example
/// ```ignore
/// normalize_path(Path::new("/site/public/../../escaped")) -> "/escaped"
/// normalize_path(Path::new("/site/./public/"))            -> "/site/public"
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push(component);
                }
            }
            other => result.push(other),
        }
    }
    result
}

/// Whether `path` resolves to a location inside `dir` (or `dir` itself).
pub fn is_within(path: &Path, dir: &Path) -> bool {
    normalize_path(path).starts_with(normalize_path(dir))
}

/// Whether a relative URL path climbs out of its base with `..`.
pub fn has_parent_segment(path: &str) -> bool {
    Path::new(path)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/site/public/../../escaped")),
            PathBuf::from("/escaped")
        );
        assert_eq!(
            normalize_path(Path::new("/site/./public/")),
            PathBuf::from("/site/public")
        );
        assert_eq!(normalize_path(Path::new("/site/")), PathBuf::from("/site"));
    }

    #[test]
    fn test_is_within() {
        assert!(is_within(Path::new("/site/public/index.html"), Path::new("/site/public")));
        assert!(is_within(Path::new("/site/public"), Path::new("/site/public/")));
        assert!(!is_within(
            Path::new("/site/public/../../escaped/index.html"),
            Path::new("/site/public")
        ));
    }

    #[test]
    fn test_has_parent_segment() {
        assert!(has_parent_segment("/../../escaped"));
        assert!(has_parent_segment("/en/../.."));
        assert!(!has_parent_segment("/en/"));
        assert!(!has_parent_segment("/..hidden/"));
    }
}
