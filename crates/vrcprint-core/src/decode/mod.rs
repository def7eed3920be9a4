//! Image loading for prints.
//!
//! This module provides functionality for:
//! - Reading a print from disk or memory into an RGB buffer
//! - Resizing buffers (used when the caption strip moves between layouts)
//!
//! Every input is normalised to 8-bit RGB, whatever its colour type on disk,
//! so the rest of the crate only ever deals with three bytes per pixel.
//!
//! # Examples
//!
//! ```ignore
//! use vrcprint_core::decode::load_image;
//!
//! let image = load_image("VRChat_2048x1440.png")?;
//! println!("Loaded {}x{} print", image.width, image.height);
//! ```

mod load;
mod resize;
mod types;

pub use load::{decode_bytes, load_image};
pub use resize::resize;
pub use types::{DecodeError, DecodedImage, FilterType};
