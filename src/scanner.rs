use crate::error::GalleryError;
use crate::types::{ListingSnapshot, StoredImage};
use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// Reads the storage directory once and returns its visible images.
///
/// Only regular files directly inside `dir` are listed. Hidden entries
/// (including `.part` files of uploads still being written) and
/// subdirectories are skipped. Entries come back sorted by filename.
///
/// # Errors
///
/// Returns [`GalleryError::ListingUnavailable`] if `dir` itself cannot be
/// read. Failures on individual entries are logged and the entry skipped.
pub fn snapshot(dir: &Path) -> Result<ListingSnapshot, GalleryError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                return Err(GalleryError::ListingUnavailable {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if file_name.starts_with('.') {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                log::warn!("Cannot read metadata for {file_name}: {e}");
                continue;
            }
        };

        let modified: DateTime<Local> =
            metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH).into();

        images.push(StoredImage {
            file_name,
            size: metadata.len(),
            modified,
        });
    }

    log::debug!("Listed {} images in {}", images.len(), dir.display());
    Ok(ListingSnapshot { images })
}

/// [`snapshot`] on tokio's blocking pool, for use inside request handlers.
///
/// # Errors
///
/// Same as [`snapshot`]; a panicked or cancelled listing task is reported
/// as [`GalleryError::ListingUnavailable`] too.
pub async fn snapshot_blocking(dir: PathBuf) -> Result<ListingSnapshot, GalleryError> {
    let path = dir.clone();
    tokio::task::spawn_blocking(move || snapshot(&dir))
        .await
        .map_err(|e| GalleryError::ListingUnavailable {
            path,
            source: io::Error::other(format!("listing task failed: {e}")),
        })?
}

/// Whether `name` is a single, visible path component that may be looked
/// up inside the storage directory.
#[must_use]
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_snapshot_lists_visible_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"bb").unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        fs::write(dir.path().join(".c.png.part"), b"partial").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("d.png"), b"d").unwrap();

        let listing = snapshot(dir.path()).unwrap();
        assert_eq!(listing.file_names(), vec!["a.png", "b.png"]);
        assert_eq!(listing.total_size(), 3);
    }

    #[test]
    fn test_snapshot_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let listing = snapshot(dir.path()).unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_snapshot_missing_directory_is_listing_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        match snapshot(&missing) {
            Err(GalleryError::ListingUnavailable { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected ListingUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_snapshot_blocking_matches_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"b").unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();

        let listing = snapshot_blocking(dir.path().to_path_buf()).await.unwrap();
        assert_eq!(listing.file_names(), vec!["a.png", "b.png"]);

        let missing = snapshot_blocking(dir.path().join("gone")).await;
        assert!(matches!(
            missing,
            Err(GalleryError::ListingUnavailable { .. })
        ));
    }

    #[test]
    fn test_is_plain_file_name() {
        assert!(is_plain_file_name("1700000000000-cat.png"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name(".hidden"));
        assert!(!is_plain_file_name("../etc/passwd"));
        assert!(!is_plain_file_name("sub\\file.png"));
    }
}
