//! Start-up banner.

/// Full-width title art.
pub const BANNER: &str = r"
  _   _____  _____  ___  ___  _____  ________  __________  ____  __   ____
 | | / / _ \/ ___/ / _ \/ _ \/  _/ |/ /_  __/ /_  __/ __ \/ __ \/ /  / __/
 | |/ / , _/ /__  / ___/ , _// //    / / /     / / / /_/ / /_/ / /___\ \  
 |___/_/|_|\___/ /_/  /_/|_/___/_/|_/ /_/     /_/  \____/\____/____/___/  
                                                                           
===========================[  by GuusDeKroon  ]===========================
";

/// Title used when the terminal is too narrow for [`BANNER`].
pub const SMALL_BANNER: &str = "VRC Print Tools - by GuusDeKroon";

/// Terminal width assumed when `COLUMNS` is unset or unparsable.
pub const DEFAULT_COLUMNS: usize = 80;

/// Width of the terminal, read from `COLUMNS`.
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_COLUMNS)
}

/// Width of the widest non-blank banner line.
fn banner_width() -> usize {
    BANNER
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
}

/// Banner text for a terminal `width` columns wide.
pub fn render(width: usize) -> String {
    if width >= banner_width() {
        BANNER.to_string()
    } else {
        let rule = "=".repeat(width.min(SMALL_BANNER.len()));
        format!("{}\n{}\n", SMALL_BANNER, rule)
    }
}
