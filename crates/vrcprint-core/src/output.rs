//! Naming of edited prints.
//!
//! An edited print is written next to its source with one `-token` per
//! applied edit inserted before the extension:
//!
//! ```text
//! VRChat_2048x1440.png -> VRChat_2048x1440-orientation-darkmode.png
//! ```

use std::path::{Path, PathBuf};

/// Token used when no edit produced one.
pub const FALLBACK_TOKEN: &str = "out";

/// Extension used when the source has none.
pub const FALLBACK_EXTENSION: &str = "png";

/// Derive the output path for `source` edited with `tokens`.
pub fn output_path<S: AsRef<str>>(source: &Path, tokens: &[S]) -> PathBuf {
    let suffix = if tokens.is_empty() {
        format!("-{}", FALLBACK_TOKEN)
    } else {
        tokens
            .iter()
            .map(|t| format!("-{}", t.as_ref()))
            .collect::<String>()
    };

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string());

    source.with_file_name(format!("{}{}.{}", stem, suffix, ext))
}
