use std::path::{Path, PathBuf};

use crate::shared::constants::{OUTPUT_EXTENSION, OUTPUT_SUFFIX};

/// Where the mat for `input` is written.
///
/// An explicit `file_name` wins; otherwise the input's stem gets a
/// `_border.jpg` suffix. Either way the file lands in `output_dir`.
pub fn output_path(input: &Path, output_dir: &Path, file_name: Option<&str>) -> PathBuf {
    match file_name {
        Some(name) => output_dir.join(name),
        None => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy())
                .unwrap_or_default();
            output_dir.join(format!("{stem}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}"))
        }
    }
}
