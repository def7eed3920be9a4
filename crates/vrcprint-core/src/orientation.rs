//! Moving a photo between the landscape and portrait layouts.
//!
//! A rotated print is rebuilt rather than rotated whole: the photo turns,
//! but the frame is redrawn upright in the new layout. The side and top
//! borders become plain white and the caption strip is carried over from
//! the source, stretched to the new width. A dark source strip is inverted
//! on the way, so a rebuilt print always has a uniform light frame and a
//! later mode toggle flips all of it together.

use crate::decode::{resize, DecodeError, DecodedImage, FilterType};
use crate::layout::{
    PrintFormat, Rect, BOTTOM_TEXT, BOTTOM_TEXT_SCALED, LANDSCAPE_HEIGHT, LANDSCAPE_WIDTH,
};
use crate::luminance::frame_is_light;
use crate::transform::{crop_rect, invert_in_place, paste, rotate_quarter, Rotation};

/// Canvas colour of a rebuilt frame.
pub const FRAME_WHITE: [u8; 3] = [255, 255, 255];

/// Caption strip cut from `source`, normalised to a light frame.
///
/// The strip height follows the source layout: the full landscape strip for
/// an exact landscape print, the scaled strip for anything else.
pub fn caption_strip(source: &DecodedImage) -> DecodedImage {
    let layout_strip = if (source.width, source.height) == (LANDSCAPE_WIDTH, LANDSCAPE_HEIGHT) {
        BOTTOM_TEXT
    } else {
        BOTTOM_TEXT_SCALED
    };
    let strip_h = layout_strip.min(source.height);

    let rect = Rect::new(0, source.height - strip_h, source.width, source.height);
    let mut strip = crop_rect(source, rect);

    if !frame_is_light(source) {
        log::debug!("source frame is dark, inverting caption strip");
        invert_in_place(&mut strip);
    }

    strip
}

/// Compose a print of `format` from a photo and the frame of `source`.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the caption strip cannot be
/// resampled.
pub fn build_print(
    picture: &DecodedImage,
    source: &DecodedImage,
    format: PrintFormat,
) -> Result<DecodedImage, DecodeError> {
    let (width, height) = format.dimensions();
    let rect = format.picture_rect();

    let mut canvas = DecodedImage::filled(width, height, FRAME_WHITE);
    paste(&mut canvas, picture, rect.left, rect.top);

    let strip_h = format.bottom_strip_height();
    let strip = resize(&caption_strip(source), width, strip_h, FilterType::Bicubic)?;
    paste(&mut canvas, &strip, 0, height - strip_h);

    Ok(canvas)
}

/// Compose a landscape print around a 1920x1080 photo.
pub fn build_landscape(
    picture: &DecodedImage,
    source: &DecodedImage,
) -> Result<DecodedImage, DecodeError> {
    build_print(picture, source, PrintFormat::Landscape)
}

/// Compose a portrait print around a 1080x1920 photo.
pub fn build_portrait(
    picture: &DecodedImage,
    source: &DecodedImage,
) -> Result<DecodedImage, DecodeError> {
    build_print(picture, source, PrintFormat::Portrait)
}

/// Turn the photo of a print by 90° and rebuild it in the other layout.
pub fn rotate_orientation(
    image: &DecodedImage,
    format: PrintFormat,
    rotation: Rotation,
) -> Result<DecodedImage, DecodeError> {
    let picture = crop_rect(image, format.picture_rect());
    let turned = rotate_quarter(&picture, rotation);

    let target = format.flipped();
    log::debug!(
        "rotating {} photo {} into {} layout",
        format,
        rotation,
        target
    );

    match target {
        PrintFormat::Landscape => build_landscape(&turned, image),
        PrintFormat::Portrait => build_portrait(&turned, image),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::decode::DecodedImage;
    use crate::layout::PrintFormat;

    /// A print with a solid frame and a position-coded photo.
    pub fn synthetic_print(format: PrintFormat, frame: [u8; 3]) -> DecodedImage {
        let (w, h) = format.dimensions();
        let rect = format.picture_rect();
        let mut img = DecodedImage::filled(w, h, frame);

        for y in rect.top..rect.bottom {
            for x in rect.left..rect.right {
                let idx = ((y * w + x) * 3) as usize;
                img.pixels[idx] = (x % 251) as u8;
                img.pixels[idx + 1] = (y % 241) as u8;
                img.pixels[idx + 2] = ((x + y) % 239) as u8;
            }
        }
        img
    }
}
