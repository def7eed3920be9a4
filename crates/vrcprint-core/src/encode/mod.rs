//! Image encoding for finished prints.
//!
//! This module provides functionality for:
//! - Encoding RGB buffers to PNG (lossless, the usual VRChat print format)
//! - Encoding RGB buffers to JPEG with configurable quality
//! - Writing a print to disk with the encoder chosen from the file extension
//!
//! # Examples
//!
//! ```ignore
//! use vrcprint_core::encode::{save_image, DEFAULT_JPEG_QUALITY};
//!
//! save_image(&image, "print-orientation.png", DEFAULT_JPEG_QUALITY)?;
//! ```

mod jpeg;
mod png;
mod save;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use save::{save_image, OutputFormat, DEFAULT_JPEG_QUALITY};

use thiserror::Error;

/// Errors that can occur while encoding or writing a print.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The output path names a format this tool does not write
    #[error("Unsupported output extension: {0:?}")]
    UnsupportedExtension(String),

    /// The encoder rejected the data
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// The encoded bytes could not be written
    #[error("{path}: {message}")]
    Io { path: String, message: String },
}

/// Check that an RGB buffer matches its stated dimensions.
pub(crate) fn validate_rgb(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}
