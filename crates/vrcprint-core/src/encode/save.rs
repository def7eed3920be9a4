//! Writing a finished print to disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{encode_jpeg, encode_png, EncodeError};
use crate::decode::DecodedImage;

/// JPEG quality used when the caller has no preference.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Container formats the tool writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Pick the format from a path's extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::UnsupportedExtension` for anything other than
    /// `png` or one of the JPEG spellings, including a missing extension.
    pub fn from_path(path: &Path) -> Result<Self, EncodeError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" | "jpe" | "jfif" => Ok(OutputFormat::Jpeg),
            _ => Err(EncodeError::UnsupportedExtension(ext)),
        }
    }
}

/// Encode `image` and write it to `path`.
///
/// The encoder is chosen from the extension; `quality` only affects JPEG.
/// Returns the number of bytes written.
pub fn save_image(
    image: &DecodedImage,
    path: impl AsRef<Path>,
    quality: u8,
) -> Result<usize, EncodeError> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;

    let bytes = match format {
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height)?,
        OutputFormat::Jpeg => encode_jpeg(&image.pixels, image.width, image.height, quality)?,
    };

    std::fs::write(path, &bytes).map_err(|e| EncodeError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    log::info!(
        "wrote {} ({:?}, {} bytes)",
        path.display(),
        format,
        bytes.len()
    );
    Ok(bytes.len())
}
