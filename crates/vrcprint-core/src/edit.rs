//! The edit pipeline: what the user asked for, applied in a fixed order.
//!
//! Orientation always runs before the mode toggle. Rotating rebuilds the
//! frame as uniformly light, so a toggle afterwards flips the borders and
//! the caption strip together.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decode::{DecodeError, DecodedImage};
use crate::layout::{detect_format, PrintFormat};
use crate::mode::{toggle_frame, FrameMode};
use crate::orientation::rotate_orientation;
use crate::transform::Rotation;

/// Filename token recorded for an orientation change.
pub const ORIENTATION_TOKEN: &str = "orientation";

/// An edit the user can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Orientation,
    Mode,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Orientation, Action::Mode];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Action::Orientation => "🔄 Change orientation",
            Action::Mode => "🌓 Change light/dark mode",
        }
    }

    /// Short label for summaries.
    pub fn short_label(self) -> &'static str {
        match self {
            Action::Orientation => "🔄 Orientation",
            Action::Mode => "🌓 Light/Dark",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Orientation => f.write_str("orientation"),
            Action::Mode => f.write_str("mode"),
        }
    }
}

/// Map free-form selections to actions by keyword.
///
/// Matching is case-insensitive: `orientation` selects [`Action::Orientation`];
/// `mode`, `light` or `dark` select [`Action::Mode`]. One entry may select
/// both. The result is sorted and free of duplicates.
pub fn normalize_actions<I, S>(selections: I) -> Vec<Action>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut actions = Vec::new();

    for selection in selections {
        let s = selection.as_ref().to_lowercase();
        if s.contains("orientation") {
            actions.push(Action::Orientation);
        }
        if s.contains("mode") || s.contains("light") || s.contains("dark") {
            actions.push(Action::Mode);
        }
    }

    actions.sort_unstable();
    actions.dedup();
    actions
}

/// The edits to apply to one print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditPlan {
    /// Turn the photo and switch layout.
    pub rotation: Option<Rotation>,
    /// Invert the frame between light and dark.
    pub toggle_mode: bool,
}

impl EditPlan {
    pub fn is_empty(&self) -> bool {
        self.rotation.is_none() && !self.toggle_mode
    }

    /// Actions this plan performs, in application order.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.rotation.is_some() {
            actions.push(Action::Orientation);
        }
        if self.toggle_mode {
            actions.push(Action::Mode);
        }
        actions
    }
}

/// Result of applying an [`EditPlan`].
#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub image: DecodedImage,
    pub format_before: PrintFormat,
    pub format_after: PrintFormat,
    /// Frame mode after a toggle; `None` if the mode was not touched.
    pub mode: Option<FrameMode>,
    /// Filename tokens, in application order.
    pub tokens: Vec<String>,
}

/// Apply `plan` to a print.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedSize` if `image` is not a print.
pub fn apply_plan(image: &DecodedImage, plan: &EditPlan) -> Result<EditOutcome, DecodeError> {
    let format_before = detect_format(image.width, image.height)?;

    let mut current = image.clone();
    let mut format = format_before;
    let mut tokens = Vec::new();
    let mut mode = None;

    if let Some(rotation) = plan.rotation {
        current = rotate_orientation(&current, format, rotation)?;
        format = format.flipped();
        tokens.push(ORIENTATION_TOKEN.to_string());
        log::info!(
            "orientation applied: {}x{} ({})",
            current.width,
            current.height,
            format
        );
    }

    if plan.toggle_mode {
        let (toggled, new_mode) = toggle_frame(&current);
        current = toggled;
        tokens.push(new_mode.suffix().to_string());
        mode = Some(new_mode);
        log::info!("frame toggled to {}", new_mode);
    }

    Ok(EditOutcome {
        image: current,
        format_before,
        format_after: format,
        mode,
        tokens,
    })
}
