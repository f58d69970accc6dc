use image::{DynamicImage, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::error::{AssetError, Result};

/// Encode an image as PNG and write it to `path`, replacing any existing file
///
/// Returns the number of bytes written.
pub fn save_png(img: &DynamicImage, path: &Path) -> Result<u64> {
    let mut encoded = Vec::new();
    img.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .map_err(|e| AssetError::encode(path, e))?;

    fs::write(path, &encoded).map_err(|e| AssetError::encode(path, e))?;

    Ok(encoded.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample() -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(16, 16, |x, y| {
            Rgb([x as u8 * 16, y as u8 * 16, 128])
        }))
    }

    #[test]
    fn test_save_png_writes_png_signature() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let bytes = save_png(&sample(), &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert_eq!(bytes, written.len() as u64);
        assert_eq!(&written[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_save_png_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        fs::write(&path, vec![0u8; 1 << 16]).unwrap();

        let bytes = save_png(&sample(), &path).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), bytes);
        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn test_save_png_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.png");

        let err = save_png(&sample(), &path).unwrap_err();
        assert!(err.is_encode());
    }
}
