//! Line-based prompts for the interactive session.
//!
//! The prompter is generic over its input and output so a whole session can
//! be driven from a byte buffer in tests.

use std::ffi::OsStr;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use vrcprint_core::{normalize_actions, Action, Rotation};

/// Example shown in the path prompt.
pub const PATH_EXAMPLE: &str =
    r"C:\Users\YourName\Pictures\VRChat\VRChat_2025-10-22_21-52-27.451_2048x1440.png";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write to terminal")
    }

    /// Print a question and read the answer. `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{} ", question).context("Failed to write to terminal")?;
        self.output.flush().context("Failed to write to terminal")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            self.say("")?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Multi-choice menu of edits. Empty when nothing was picked.
    pub fn select_actions(&mut self) -> Result<Vec<Action>> {
        self.say("Select what you want to do:")?;
        self.say("")?;
        for (i, action) in Action::ALL.iter().enumerate() {
            self.say(&format!("  {}) {}", i + 1, action.label()))?;
        }

        let answer = self
            .ask("Choose one or more (e.g. 1,2):")?
            .unwrap_or_default();
        let actions = parse_action_selection(&answer);

        if !actions.is_empty() {
            let labels: Vec<_> = actions.iter().map(|a| a.short_label()).collect();
            log::debug!("selected {}", labels.join(", "));
        }
        Ok(actions)
    }

    /// Ask for the print to edit until an existing file is named.
    pub fn input_path(&mut self) -> Result<PathBuf> {
        let question = format!("Input image path (e.g., {}):", PATH_EXAMPLE);
        loop {
            let Some(answer) = self.ask(&question)? else {
                bail!("No input image given");
            };

            let path = clean_path(&answer);
            if !answer.trim().is_empty() && path.is_file() {
                return Ok(path);
            }
            self.say("File not found. Paste a valid path.")?;
        }
    }

    /// Ask which way to turn the photo. Clockwise on empty input.
    pub fn rotation(&mut self) -> Result<Rotation> {
        self.say("Rotate 90°:")?;
        self.say(&format!("  1) {} (default)", Rotation::Clockwise.label()))?;
        self.say(&format!("  2) {}", Rotation::CounterClockwise.label()))?;

        loop {
            let Some(answer) = self.ask(">")? else {
                return Ok(Rotation::default());
            };
            match parse_direction(&answer) {
                Some(rotation) => return Ok(rotation),
                None => self.say("Please enter 1 or 2.")?,
            }
        }
    }
}

/// Parse a menu answer such as `1,2`, `2 1` or `orientation`.
pub fn parse_action_selection(answer: &str) -> Vec<Action> {
    let words = answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| match w {
            "1" => Action::Orientation.to_string(),
            "2" => Action::Mode.to_string(),
            other => other.to_string(),
        });
    normalize_actions(words)
}

/// Parse a direction answer. Empty means the default.
pub fn parse_direction(answer: &str) -> Option<Rotation> {
    match answer.trim() {
        "" => Some(Rotation::default()),
        "1" => Some(Rotation::Clockwise),
        "2" => Some(Rotation::CounterClockwise),
        other => other.parse().ok(),
    }
}

/// Tidy a pasted path: surrounding whitespace and quotes go, a leading `~`
/// becomes the home directory.
///
/// Paths that are not valid UTF-8 are passed through untouched.
pub fn clean_path(raw: impl AsRef<OsStr>) -> PathBuf {
    let raw = raw.as_ref();
    match raw.to_str() {
        Some(text) => expand_home(text.trim().trim_matches('"').trim_matches('\'')),
        None => PathBuf::from(raw),
    }
}

fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\"))
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(Path::new(rest)),
        _ => PathBuf::from(path),
    }
}
