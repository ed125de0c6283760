//! File ingestion policy.
//!
//! Only files whose declared type indicates an image are accepted. The
//! policy is batch-level: a selection containing no image-typed file at
//! all is rejected whole; a mixed batch keeps its image-typed subset.

use std::path::{Path, PathBuf};

use picdeck_core::ImageRecord;

use crate::types::{ExportError, Result};

/// Whether the path's declared type (its extension) names a known image
/// format. No bytes are inspected; decoding failures surface later, at
/// thumbnail or export time.
pub fn is_image_path(path: impl AsRef<Path>) -> bool {
    image::ImageFormat::from_path(path).is_ok()
}

/// Apply the ingestion policy to a candidate batch: keep the image-typed
/// entries, reject the batch entirely when none qualify.
pub fn filter_image_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let images: Vec<PathBuf> = paths.iter().filter(|p| is_image_path(p)).cloned().collect();
    if images.is_empty() {
        return Err(ExportError::NoImages);
    }
    Ok(images)
}

/// Read a file into a fresh [`ImageRecord`] named after the file.
pub async fn load_image(path: impl AsRef<Path>) -> Result<ImageRecord> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(ImageRecord::new(name, data))
}

/// Load a batch sequentially, preserving the order the user supplied.
pub async fn load_images(paths: &[PathBuf]) -> Result<Vec<ImageRecord>> {
    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        records.push(load_image(path).await?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_image_extensions() {
        assert!(is_image_path("photo.jpg"));
        assert!(is_image_path("scan.PNG"));
        assert!(is_image_path("anim.gif"));
        assert!(!is_image_path("notes.txt"));
        assert!(!is_image_path("doc.pdf"));
        assert!(!is_image_path("no_extension"));
    }

    #[test]
    fn mixed_batch_keeps_image_subset() {
        let paths = vec![
            PathBuf::from("a.png"),
            PathBuf::from("b.txt"),
            PathBuf::from("c.jpeg"),
        ];
        let kept = filter_image_paths(&paths).unwrap();
        assert_eq!(kept, vec![PathBuf::from("a.png"), PathBuf::from("c.jpeg")]);
    }

    #[test]
    fn batch_without_images_is_rejected_whole() {
        let paths = vec![PathBuf::from("a.txt"), PathBuf::from("b.pdf")];
        assert!(matches!(
            filter_image_paths(&paths),
            Err(ExportError::NoImages)
        ));
    }

    #[tokio::test]
    async fn load_image_names_record_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        tokio::fs::write(&path, b"not-really-png").await.unwrap();

        let record = load_image(&path).await.unwrap();
        assert_eq!(record.name, "cover.png");
        assert_eq!(&record.data[..], b"not-really-png");
    }
}
