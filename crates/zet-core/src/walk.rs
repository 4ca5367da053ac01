// crates/zet-core/src/walk.rs - Enumerating the note tree
//
// There is no index: walking the root directory is the only way to find
// notes. The walk is lazy, yields every non-directory entry beneath the root
// in file-name order, and hands per-entry errors to the caller instead of
// giving up on the rest of the tree.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazy iterator over the files under a note root.
///
/// Call [`note_files`] again to restart the walk from the top.
pub struct NoteFiles {
    inner: walkdir::IntoIter,
}

impl Iterator for NoteFiles {
    type Item = Result<PathBuf, walkdir::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) if entry.file_type().is_dir() => continue,
                Ok(entry) => return Some(Ok(entry.into_path())),
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Walk `root` recursively, skipping directories.
///
/// Entries are sorted by file name within each directory, so identifiers
/// come out in creation order inside a year partition.
pub fn note_files(root: &Path) -> NoteFiles {
    NoteFiles {
        inner: WalkDir::new(root).sort_by_file_name().into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_root() -> TempDir {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("24")).unwrap();
        fs::create_dir(root.path().join("23")).unwrap();
        fs::write(root.path().join("24/2403051412.md"), "# b\n").unwrap();
        fs::write(root.path().join("24/2401010000.md"), "# a\n").unwrap();
        fs::write(root.path().join("23/2312312359.md"), "# c\n").unwrap();
        root
    }

    #[test]
    fn test_walk_yields_files_in_name_order() {
        let root = create_test_root();
        let files: Vec<PathBuf> = note_files(root.path()).map(Result::unwrap).collect();

        assert_eq!(
            files,
            vec![
                root.path().join("23/2312312359.md"),
                root.path().join("24/2401010000.md"),
                root.path().join("24/2403051412.md"),
            ]
        );
    }

    #[test]
    fn test_walk_skips_directories() {
        let root = create_test_root();
        fs::create_dir(root.path().join("25")).unwrap();

        assert!(note_files(root.path()).map(Result::unwrap).all(|p| p.is_file()));
        assert_eq!(note_files(root.path()).count(), 3);
    }

    #[test]
    fn test_walk_is_restartable() {
        let root = create_test_root();
        let first: Vec<_> = note_files(root.path()).map(Result::unwrap).collect();
        let second: Vec<_> = note_files(root.path()).map(Result::unwrap).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_root_yields_an_error() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");

        let results: Vec<_> = note_files(&missing).collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
