//! Lossless quarter-turn rotation.
//!
//! Only 90° turns are needed to move a photo between the landscape and
//! portrait layouts, so pixels are moved rather than resampled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;

/// Direction of a 90° turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// The turn that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }

    /// Short label with an arrow, for menus.
    pub fn label(self) -> &'static str {
        match self {
            Rotation::Clockwise => "↻ Clockwise",
            Rotation::CounterClockwise => "↺ Counter-clockwise",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Clockwise => f.write_str("clockwise"),
            Rotation::CounterClockwise => f.write_str("counterclockwise"),
        }
    }
}

impl FromStr for Rotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "cw" | "clockwise" | "↻" => Ok(Rotation::Clockwise),
            "ccw" | "counterclockwise" | "counter-clockwise" | "anticlockwise" | "↺" => {
                Ok(Rotation::CounterClockwise)
            }
            _ => Err(format!(
                "unknown rotation {:?}: expected cw or ccw",
                s.trim()
            )),
        }
    }
}

/// Rotate an image by 90° in the given direction.
///
/// The output has width and height swapped.
pub fn rotate_quarter(image: &DecodedImage, rotation: Rotation) -> DecodedImage {
    let (src_w, src_h) = (image.width, image.height);
    let (dst_w, dst_h) = (src_h, src_w);

    let mut output = vec![0u8; image.pixels.len()];

    for src_y in 0..src_h {
        for src_x in 0..src_w {
            let (dst_x, dst_y) = match rotation {
                Rotation::Clockwise => (src_h - 1 - src_y, src_x),
                Rotation::CounterClockwise => (src_y, src_w - 1 - src_x),
            };

            let src_idx = ((src_y * src_w + src_x) * 3) as usize;
            let dst_idx = ((dst_y * dst_w + dst_x) * 3) as usize;
            output[dst_idx..dst_idx + 3].copy_from_slice(&image.pixels[src_idx..src_idx + 3]);
        }
    }

    DecodedImage {
        width: dst_w,
        height: dst_h,
        pixels: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x2 image with a distinct red value per pixel:
    ///
    /// ```text
    /// 1 2 3
    /// 4 5 6
    /// ```
    fn numbered() -> DecodedImage {
        let pixels = (1..=6u8).flat_map(|v| [v, 0, 0]).collect();
        DecodedImage::new(3, 2, pixels)
    }

    fn reds(image: &DecodedImage) -> Vec<u8> {
        image.pixels.chunks_exact(3).map(|p| p[0]).collect()
    }

    #[test]
    fn test_clockwise_layout() {
        let rotated = rotate_quarter(&numbered(), Rotation::Clockwise);

        assert_eq!((rotated.width, rotated.height), (2, 3));
        // 4 1
        // 5 2
        // 6 3
        assert_eq!(reds(&rotated), vec![4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn test_counter_clockwise_layout() {
        let rotated = rotate_quarter(&numbered(), Rotation::CounterClockwise);

        assert_eq!((rotated.width, rotated.height), (2, 3));
        // 3 6
        // 2 5
        // 1 4
        assert_eq!(reds(&rotated), vec![3, 6, 2, 5, 1, 4]);
    }

    #[test]
    fn test_four_turns_is_identity() {
        let img = numbered();
        let mut turned = img.clone();
        for _ in 0..4 {
            turned = rotate_quarter(&turned, Rotation::Clockwise);
        }
        assert_eq!(turned, img);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Rotation::Clockwise.inverse(), Rotation::CounterClockwise);
        assert_eq!(Rotation::CounterClockwise.inverse(), Rotation::Clockwise);
    }

    #[test]
    fn test_parse_rotation() {
        assert_eq!("cw".parse::<Rotation>().unwrap(), Rotation::Clockwise);
        assert_eq!(" Clockwise ".parse::<Rotation>().unwrap(), Rotation::Clockwise);
        assert_eq!("CCW".parse::<Rotation>().unwrap(), Rotation::CounterClockwise);
        assert_eq!(
            "counter-clockwise".parse::<Rotation>().unwrap(),
            Rotation::CounterClockwise
        );
        assert!("sideways".parse::<Rotation>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
            assert_eq!(rotation.to_string().parse::<Rotation>().unwrap(), rotation);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn image_strategy() -> impl Strategy<Value = DecodedImage> {
        (1u32..=24, 1u32..=24).prop_flat_map(|(w, h)| {
            let size = (w * h * 3) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |pixels| DecodedImage::new(w, h, pixels))
        })
    }

    proptest! {
        /// Property: a turn followed by its inverse restores the image.
        #[test]
        fn prop_inverse_turn_restores(img in image_strategy(), cw in any::<bool>()) {
            let rotation = if cw { Rotation::Clockwise } else { Rotation::CounterClockwise };
            let back = rotate_quarter(&rotate_quarter(&img, rotation), rotation.inverse());
            prop_assert_eq!(back, img);
        }

        /// Property: dimensions swap and no pixel is lost.
        #[test]
        fn prop_dimensions_swap(img in image_strategy()) {
            let rotated = rotate_quarter(&img, Rotation::Clockwise);
            prop_assert_eq!((rotated.width, rotated.height), (img.height, img.width));

            let mut a = img.pixels.chunks_exact(3).map(|p| [p[0], p[1], p[2]]).collect::<Vec<_>>();
            let mut b = rotated.pixels.chunks_exact(3).map(|p| [p[0], p[1], p[2]]).collect::<Vec<_>>();
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }
    }
}
