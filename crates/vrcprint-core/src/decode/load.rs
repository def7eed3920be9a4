//! Reading prints from disk or memory through the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::{DecodeError, DecodedImage};

/// Load an image file and convert it to 8-bit RGB.
///
/// The format is guessed from the file contents rather than the extension,
/// so a PNG saved as `.jpg` still opens.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be opened and
/// `DecodeError::InvalidFormat` if its contents cannot be decoded.
pub fn load_image(path: impl AsRef<Path>) -> Result<DecodedImage, DecodeError> {
    let path = path.as_ref();

    let reader = ImageReader::open(path)
        .map_err(|e| DecodeError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
        .with_guessed_format()
        .map_err(|e| DecodeError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::InvalidFormat(e.to_string()))?;

    log::debug!(
        "decoded {} as {:?} {}x{}",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}

/// Decode an in-memory image and convert it to 8-bit RGB.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a supported image.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::InvalidFormat(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::InvalidFormat(e.to_string()))?;

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}
