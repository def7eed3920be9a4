//! Frame masks for recolouring a print without touching its photo.
//!
//! ## Mask Values
//!
//! A mask holds one alpha byte per pixel: 255 selects the foreground (the
//! recoloured frame), 0 keeps the background (the original pixel). Values
//! in between blend linearly.
//!
//! ## Algorithm
//!
//! The frame is whatever surrounds a centred photo of the layout's inner
//! size. Horizontal padding is split evenly; vertical padding is split by
//! the ratio of top border to caption strip.

pub mod composite;
pub mod frame;

pub use composite::composite;
pub use frame::{build_frame_mask, FrameMask};

/// Blend two channel values with an 8-bit alpha.
///
/// `alpha = 255` returns `fg`, `alpha = 0` returns `bg`.
#[inline]
pub fn blend_channel(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}
