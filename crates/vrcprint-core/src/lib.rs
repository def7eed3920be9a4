//! vrcprint core - editing library for VRChat prints
//!
//! A print is a photo inside a decorative frame with a caption strip along
//! the bottom. This crate provides the pieces needed to edit one:
//! loading and saving, layout detection, rotating the photo into the other
//! layout, and toggling the frame between light and dark.
//!
//! # Example
//!
//! ```ignore
//! use vrcprint_core::{apply_plan, load_image, output_path, save_image, EditPlan, Rotation};
//!
//! let print = load_image(&path)?;
//! let plan = EditPlan { rotation: Some(Rotation::Clockwise), toggle_mode: true };
//! let outcome = apply_plan(&print, &plan)?;
//! save_image(&outcome.image, output_path(&path, &outcome.tokens), DEFAULT_JPEG_QUALITY)?;
//! ```

pub mod decode;
pub mod edit;
pub mod encode;
pub mod layout;
pub mod luminance;
pub mod mask;
pub mod mode;
pub mod orientation;
pub mod output;
pub mod transform;

pub use decode::{load_image, DecodeError, DecodedImage};
pub use edit::{apply_plan, normalize_actions, Action, EditOutcome, EditPlan};
pub use encode::{save_image, EncodeError, DEFAULT_JPEG_QUALITY};
pub use layout::{detect_format, picture_rect, PrintFormat, Rect};
pub use mode::{toggle_frame, FrameMode};
pub use orientation::rotate_orientation;
pub use output::output_path;
pub use transform::Rotation;
