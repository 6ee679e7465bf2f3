//! Gallery - Photo Library Import
//!
//! Imports the newest image from the user's pictures directory. The
//! fixture app never decodes the image, so only file metadata is read.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::domain::scan::CapturedPhoto;
use crate::error::{Error, Result};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Import the most recently modified image from the pictures directory.
pub async fn import() -> Result<CapturedPhoto> {
    let dir = dirs::picture_dir().ok_or_else(|| Error::Invalid {
        message: "No pictures directory on this system".to_string(),
    })?;

    tokio::time::sleep(Duration::from_millis(200)).await;
    newest_photo_in(&dir)
}

/// Scan a directory for the newest image file.
pub fn newest_photo_in(dir: &Path) -> Result<CapturedPhoto> {
    let mut newest: Option<(std::time::SystemTime, CapturedPhoto)> = None;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !has_image_extension(&path) {
            continue;
        }

        let metadata = entry.metadata()?;
        let modified = metadata.modified()?;
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        let keep = match &newest {
            Some((best, _)) => modified > *best,
            None => true,
        };
        if keep {
            let taken_at: DateTime<Local> = modified.into();
            newest = Some((
                modified,
                CapturedPhoto {
                    file_name,
                    // dimensions unknown without decoding
                    width: 0,
                    height: 0,
                    size_bytes: metadata.len(),
                    taken_at,
                },
            ));
        }
    }

    newest.map(|(_, photo)| photo).ok_or_else(|| Error::Invalid {
        message: format!("No images found in {}", dir.display()),
    })
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn touch(dir: &Path, name: &str, bytes: &[u8]) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(bytes).unwrap();
    }

    #[test]
    fn picks_the_newest_image_and_skips_other_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes.txt", b"not an image");
        touch(dir.path(), "old.png", b"png");
        std::thread::sleep(Duration::from_millis(20));
        touch(dir.path(), "recent.JPG", b"jpeg bytes");

        let photo = newest_photo_in(dir.path()).unwrap();
        assert_eq!(photo.file_name, "recent.JPG");
        assert_eq!(photo.size_bytes, 10);
        assert_eq!(photo.width, 0);
        assert_eq!(photo.dimensions_label(), None);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "document.pdf", b"pdf");

        let result = newest_photo_in(dir.path());
        assert!(result.is_err());
    }
}
