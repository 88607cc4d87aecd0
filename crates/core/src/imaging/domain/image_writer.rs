use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("cannot pick an image format for {0}")]
    UnsupportedExtension(PathBuf),
    #[error("cannot encode a {channels}-channel frame to {path}")]
    InvalidFrame { path: PathBuf, channels: u8 },
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Writes a single frame to an image file.
pub trait ImageWriter: Send {
    /// Writes `frame` to `path`. The format follows the file extension;
    /// `quality` (1-100) applies to lossy formats only.
    fn write(&self, path: &Path, frame: &Frame, quality: u8) -> Result<(), EncodeError>;
}
