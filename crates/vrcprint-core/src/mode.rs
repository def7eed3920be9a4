//! Light/dark frame toggling.
//!
//! Only the frame is recoloured: the frame pixels are inverted and the
//! photo is copied through untouched. Because inversion is its own inverse,
//! toggling twice restores the original print exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;
use crate::luminance::frame_is_light;
use crate::mask::{build_frame_mask, composite};
use crate::transform::invert;

/// Colour scheme of a print's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameMode {
    Light,
    Dark,
}

impl FrameMode {
    /// Read the current mode of a print.
    pub fn detect(image: &DecodedImage) -> Self {
        if frame_is_light(image) {
            FrameMode::Light
        } else {
            FrameMode::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FrameMode::Light => FrameMode::Dark,
            FrameMode::Dark => FrameMode::Light,
        }
    }

    /// Filename token for a print converted to this mode.
    pub fn suffix(self) -> &'static str {
        match self {
            FrameMode::Light => "lightmode",
            FrameMode::Dark => "darkmode",
        }
    }
}

impl fmt::Display for FrameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Invert the frame of a print, leaving the photo as is.
///
/// Returns the recoloured print and the mode it is now in.
pub fn toggle_frame(image: &DecodedImage) -> (DecodedImage, FrameMode) {
    let target = FrameMode::detect(image).toggled();

    let inverted = invert(image);
    let mask = build_frame_mask(image.width, image.height);
    let out = composite(&inverted, image, &mask);

    log::debug!(
        "toggled frame to {} ({} masked pixels)",
        target,
        mask.coverage()
    );
    (out, target)
}
