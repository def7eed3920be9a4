//! One run of the tool: load a print, apply the edits, save the result.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use vrcprint_core::{
    apply_plan, detect_format, load_image, output_path, save_image, Action, DecodedImage,
    EditOutcome, EditPlan, FrameMode, PrintFormat, Rotation,
};

use crate::prompt::Prompter;

/// Settings that apply to both interactive and flag-driven runs.
#[derive(Debug, Clone)]
pub struct Options {
    /// Write here instead of next to the input.
    pub output: Option<PathBuf>,
    /// JPEG quality for `.jpg` outputs.
    pub quality: u8,
}

/// What a run did, printed as JSON with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format_before: PrintFormat,
    pub format_after: PrintFormat,
    pub width: u32,
    pub height: u32,
    pub rotation: Option<Rotation>,
    pub mode: Option<FrameMode>,
    pub bytes_written: usize,
}

impl Report {
    /// Progress lines for each applied edit.
    pub fn step_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.rotation.is_some() {
            lines.push(format!(
                "Orientation applied → {}x{} ({})",
                self.width,
                self.height,
                self.format_after.as_str().to_uppercase()
            ));
        }
        if let Some(mode) = self.mode {
            lines.push(format!(
                "Frame toggled → {}",
                mode.suffix().to_uppercase()
            ));
        }
        lines
    }

    pub fn done_line(&self) -> String {
        format!("Done! Saved → {}", self.output.display())
    }
}

/// Load a print and identify its layout.
pub fn load_print(path: &Path) -> Result<(DecodedImage, PrintFormat)> {
    let image = load_image(path).context("Failed to open image")?;
    let format = detect_format(image.width, image.height)?;
    log::info!(
        "loaded {} ({} {}x{})",
        path.display(),
        format,
        image.width,
        image.height
    );
    Ok((image, format))
}

/// An edited print that has not been written yet.
pub struct Edited {
    image: DecodedImage,
    report: Report,
}

impl Edited {
    /// What the edit did. `bytes_written` stays zero until [`Edited::save`].
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Write the print to its output path.
    pub fn save(self, quality: u8) -> Result<Report> {
        let Edited { image, mut report } = self;
        report.bytes_written =
            save_image(&image, &report.output, quality).context("Failed to save")?;
        Ok(report)
    }
}

/// Apply `plan` to a loaded print and pick where it goes.
pub fn apply_edits(
    input: &Path,
    image: &DecodedImage,
    plan: &EditPlan,
    options: &Options,
) -> Result<Edited> {
    let EditOutcome {
        image: edited,
        format_before,
        format_after,
        mode,
        tokens,
    } = apply_plan(image, plan)?;

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| output_path(input, &tokens));

    let report = Report {
        input: input.to_path_buf(),
        output,
        format_before,
        format_after,
        width: edited.width,
        height: edited.height,
        rotation: plan.rotation,
        mode,
        bytes_written: 0,
    };
    Ok(Edited {
        image: edited,
        report,
    })
}

/// Run with every choice already made.
pub fn run_batch(input: &Path, plan: &EditPlan, options: &Options) -> Result<Report> {
    let (image, _) = load_print(input)?;
    apply_edits(input, &image, plan, options)?.save(options.quality)
}

/// Run the question-and-answer flow.
///
/// Returns `None` when the user selects nothing. A known `input` skips the
/// path question.
pub fn run_interactive<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    input: Option<PathBuf>,
    options: &Options,
) -> Result<Option<Report>> {
    let actions = prompter.select_actions()?;
    if actions.is_empty() {
        prompter.say("No actions selected.")?;
        return Ok(None);
    }

    let input = match input {
        Some(path) => path,
        None => prompter.input_path()?,
    };

    let (image, format) = load_print(&input)?;
    prompter.say(&format!(
        "Detected: {}  ({}x{})",
        format.as_str().to_uppercase(),
        image.width,
        image.height
    ))?;

    let rotation = if actions.contains(&Action::Orientation) {
        Some(prompter.rotation()?)
    } else {
        None
    };
    let plan = EditPlan {
        rotation,
        toggle_mode: actions.contains(&Action::Mode),
    };

    let edited = apply_edits(&input, &image, &plan, options)?;
    for line in edited.report().step_lines() {
        prompter.say(&line)?;
    }

    let report = edited.save(options.quality)?;
    prompter.say("")?;
    prompter.say(&report.done_line())?;
    prompter.say("")?;

    Ok(Some(report))
}
