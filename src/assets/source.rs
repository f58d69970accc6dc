use image::{DynamicImage, ImageReader};
use std::path::Path;

use crate::error::{AssetError, Result};

/// Decode the source image, sniffing the format from the file contents
///
/// The extension is only a fallback when the contents are not recognized.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| AssetError::decode(path, e))?
        .with_guessed_format()
        .map_err(|e| AssetError::decode(path, e))?;

    reader.decode().map_err(|e| AssetError::decode(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgb};

    #[test]
    fn test_load_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source(&dir.path().join("missing.jpg")).unwrap_err();

        assert!(err.is_decode());
    }

    #[test]
    fn test_load_source_sniffs_format_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        // PNG bytes behind a misleading extension
        let path = dir.path().join("photo.jpg");
        let img: image::RgbImage = ImageBuffer::from_pixel(12, 7, Rgb([1, 2, 3]));
        img.save_with_format(&path, ImageFormat::Png).unwrap();

        let decoded = load_source(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (12, 7));
    }

    #[test]
    fn test_load_source_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = load_source(&path).unwrap_err();
        assert!(err.is_decode());
    }
}
