/// Background brightness as a fraction of full scale (0 = black, 1 = white).
pub const DEFAULT_BACKGROUND_LUMINANCE: f64 = 0.85;

/// JPEG quality for written mats.
pub const DEFAULT_OUTPUT_QUALITY: u8 = 95;

pub const OUTPUT_SUFFIX: &str = "_border";
pub const OUTPUT_EXTENSION: &str = "jpg";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
