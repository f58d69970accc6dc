//! Error types for asset generation.

use std::path::PathBuf;

/// Failure while generating the app assets.
///
/// Any variant aborts the remaining pipeline. Files written before the
/// failure stay on disk.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The source image is missing, unreadable or in an unrecognized format.
    #[error("Failed to decode source image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The resize engine rejected the pixel buffers.
    #[error("Failed to resize image to {width}x{height}: {message}")]
    Resize {
        width: u32,
        height: u32,
        message: String,
    },

    /// The PNG could not be encoded or written to its output path.
    #[error("Failed to write PNG {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetError {
    pub fn decode(path: impl Into<PathBuf>, source: impl Into<image::ImageError>) -> Self {
        Self::Decode {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn encode(path: impl Into<PathBuf>, source: impl Into<image::ImageError>) -> Self {
        Self::Encode {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn resize(width: u32, height: u32, message: impl ToString) -> Self {
        Self::Resize {
            width,
            height,
            message: message.to_string(),
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode { .. })
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
