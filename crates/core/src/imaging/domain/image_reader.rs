use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("input file not found: {0}")]
    NotFound(PathBuf),
    #[error("unsupported image format: {path}: {source}")]
    Unsupported {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Loads an image file into a [`Frame`].
///
/// Frames come back with either one (gray) or three (RGB) channels.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Frame, DecodeError>;
}
