//! Recursive discovery of convertible files.

use crate::classify::{classify, FileClass};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily enumerate all convertible files under `root`.
///
/// Directories and entries that cannot be read are skipped silently;
/// symlinked directories are not descended into. Unsupported extensions are
/// filtered out by classification. Order is whatever walkdir yields, which
/// is stable for an unchanged tree.
pub fn media_files(root: &Path) -> impl Iterator<Item = (PathBuf, FileClass)> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let path = entry.into_path();
            let class = classify(&path)?;
            Some((path, class))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_walk_finds_nested_media() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        touch(&temp.path().join("photo.jpg"));
        touch(&nested.join("clip.mp4"));
        touch(&nested.join("song.flac"));

        let found: Vec<(PathBuf, FileClass)> = media_files(temp.path()).collect();

        assert_eq!(found.len(), 3);
        assert!(found.contains(&(temp.path().join("photo.jpg"), FileClass::Image)));
        assert!(found.contains(&(nested.join("clip.mp4"), FileClass::Video)));
        assert!(found.contains(&(nested.join("song.flac"), FileClass::Audio)));
    }

    #[test]
    fn test_walk_skips_unsupported_extensions() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("readme.txt"));
        touch(&temp.path().join("data.bin"));
        touch(&temp.path().join("noext"));

        assert_eq!(media_files(temp.path()).count(), 0);
    }

    #[test]
    fn test_walk_skips_directories_with_media_names() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("folder.mp4")).unwrap();
        touch(&temp.path().join("folder.mp4/inner.png"));

        let found: Vec<_> = media_files(temp.path()).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1, FileClass::Image);
    }

    #[test]
    fn test_walk_empty_root() {
        let temp = tempdir().unwrap();
        assert_eq!(media_files(temp.path()).count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_does_not_descend_symlinked_directories() {
        let temp = tempdir().unwrap();
        let outside = temp.path().join("outside");
        fs::create_dir(&outside).unwrap();
        touch(&outside.join("clip.mp4"));

        let root = temp.path().join("root");
        fs::create_dir(&root).unwrap();
        std::os::unix::fs::symlink(&outside, root.join("linked")).unwrap();

        assert_eq!(media_files(&root).count(), 0);
    }

    #[test]
    fn test_walk_nonexistent_root_yields_nothing() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing");
        assert_eq!(media_files(&missing).count(), 0);
    }
}
