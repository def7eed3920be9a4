//! Pixel-exact transforms used to take a print apart and put it back together.
//!
//! # Coordinate System
//!
//! - Coordinates are integer pixels, origin at the top-left corner
//! - Rectangles have exclusive right and bottom edges
//! - A clockwise quarter turn maps source `(x, y)` to `(h - 1 - y, x)`
//!
//! None of these transforms resample, so crop/rotate/paste round trips are
//! exact.

mod crop;
mod invert;
mod rotation;

pub use crop::{crop_rect, paste};
pub use invert::{invert, invert_in_place};
pub use rotation::{rotate_quarter, Rotation};
