#![forbid(unsafe_code)]

mod banner;
mod prompt;
mod session;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{ArgAction, Parser};
use vrcprint_core::encode::DEFAULT_JPEG_QUALITY;
use vrcprint_core::{EditPlan, Rotation};

use crate::prompt::{clean_path, Prompter};
use crate::session::{Options, Report};

#[derive(Parser)]
#[command(name = "vrcprint")]
#[command(version, about = "Rotate the photo in a VRChat print or toggle its frame between light and dark")]
struct Cli {
    /// Print to edit. Asked for interactively when omitted.
    input: Option<PathBuf>,

    /// Turn the photo 90° and switch layout (cw or ccw).
    #[arg(long, value_name = "DIRECTION")]
    rotate: Option<Rotation>,

    /// Invert the frame between light and dark.
    #[arg(long, default_value_t = false)]
    toggle_mode: bool,

    /// Output file. Defaults to the input name with one suffix per edit.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JPEG quality for .jpg outputs.
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Print a JSON summary of the run.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Skip the start-up banner.
    #[arg(long, default_value_t = false)]
    no_banner: bool,

    /// More log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn plan(&self) -> EditPlan {
        EditPlan {
            rotation: self.rotate,
            toggle_mode: self.toggle_mode,
        }
    }

    fn options(&self) -> Options {
        Options {
            output: self.output.clone(),
            quality: self.quality,
        }
    }
}

/// Set up `env_logger` with a compact `[time LEVEL file line] message` format.
fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = buf.timestamp_seconds();

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let plan = cli.plan();
    let options = cli.options();
    let input = cli.input.as_deref().map(clean_path);

    if !plan.is_empty() {
        let Some(input) = input else {
            bail!("--rotate and --toggle-mode need an input image");
        };

        let report = session::run_batch(&input, &plan, &options)?;
        if cli.json {
            return print_json(&report);
        }
        for line in report.step_lines() {
            println!("{}", line);
        }
        println!("{}", report.done_line());
        return Ok(());
    }

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
    if !cli.no_banner {
        prompter.say(&banner::render(banner::terminal_width()))?;
    }

    if let Some(report) = session::run_interactive(&mut prompter, input, &options)? {
        if cli.json {
            print_json(&report)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {:?}", err);
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_build_plan() {
        let cli = Cli::parse_from(["vrcprint", "a.png", "--rotate", "ccw", "--toggle-mode"]);
        assert_eq!(
            cli.plan(),
            EditPlan {
                rotation: Some(Rotation::CounterClockwise),
                toggle_mode: true
            }
        );
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("a.png")));
    }

    #[cfg(unix)]
    #[test]
    fn test_input_accepts_non_utf8_path() {
        use std::ffi::{OsStr, OsString};
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"pr\xffint.png");
        let args: Vec<OsString> = vec![
            "vrcprint".into(),
            raw.to_os_string(),
            "--toggle-mode".into(),
        ];

        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from(raw)));
        assert_eq!(clean_path(raw), PathBuf::from(raw));
    }

    #[test]
    fn test_no_flags_means_interactive() {
        let cli = Cli::parse_from(["vrcprint"]);
        assert!(cli.plan().is_empty());
        assert_eq!(cli.quality, DEFAULT_JPEG_QUALITY);
    }

    #[test]
    fn test_quality_range_is_enforced() {
        assert!(Cli::try_parse_from(["vrcprint", "--quality", "0"]).is_err());
        assert!(Cli::try_parse_from(["vrcprint", "--quality", "101"]).is_err());
        assert!(Cli::try_parse_from(["vrcprint", "--quality", "90"]).is_ok());
    }

    #[test]
    fn test_bad_rotation_is_rejected() {
        assert!(Cli::try_parse_from(["vrcprint", "x.png", "--rotate", "up"]).is_err());
    }

    #[test]
    fn test_rotate_without_input_fails() {
        let cli = Cli::parse_from(["vrcprint", "--rotate", "cw"]);
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("need an input image"));
    }
}
