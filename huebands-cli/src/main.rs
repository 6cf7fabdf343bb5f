//! huebands CLI
//!
//! Writes a banded HSV gradient to stdout as a binary PPM image.
//!
//! Usage:
//!   huebands <width> <height> > bands.ppm

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use huebands_image::{Dimensions, render};
use owo_colors::OwoColorize;

/// huebands: HSV gradient bands as binary PPM
///
/// Each row takes one of six hues (repeating every six rows); across each
/// row saturation rises and brightness falls.
#[derive(Parser, Debug)]
#[command(name = "huebands")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # 640x480 image
    huebands 640 480 > bands.ppm

    # Preview with ImageMagick
    huebands 64 24 | display -
"#)]
struct Cli {
    /// Image width in pixels (number of columns)
    #[arg(value_name = "WIDTH", allow_hyphen_values = true)]
    width: String,

    /// Image height in pixels (number of rows)
    #[arg(value_name = "HEIGHT", allow_hyphen_values = true)]
    height: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Resolve dimensions, then render the image to stdout.
///
/// Returns the number of bytes written.
fn run(cli: &Cli) -> Result<usize> {
    let dimensions = Dimensions::from_args(&cli.width, &cli.height)
        .context("invalid image dimensions")?;

    let mut out = BufWriter::new(io::stdout().lock());
    render(dimensions, &mut out).context("cannot render image to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_from(["huebands", "640", "480"]).unwrap();
        assert_eq!(cli.width, "640");
        assert_eq!(cli.height, "480");
    }

    #[test]
    fn test_missing_argument_is_usage_error() {
        let err = Cli::try_parse_from(["huebands", "640"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["huebands"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_argument_is_usage_error() {
        let err = Cli::try_parse_from(["huebands", "1", "2", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_usage_names_invoked_program() {
        let err = Cli::try_parse_from(["/usr/local/bin/imggen", "1"]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Usage: imggen <WIDTH> <HEIGHT>"), "{message}");
        assert!(!message.contains("huebands"), "{message}");
    }

    #[test]
    fn test_hyphen_tokens_reach_lenient_parser() {
        for token in ["-5", "-5px", "-x", "-abc"] {
            let cli = Cli::try_parse_from(["huebands", token, "3"]).unwrap();
            assert_eq!(cli.width, token);
            let dimensions = Dimensions::from_args(&cli.width, &cli.height).unwrap();
            assert_eq!(dimensions, Dimensions::new(0, 3), "token {token}");
        }

        let cli = Cli::try_parse_from(["huebands", "4", "-x"]).unwrap();
        assert_eq!(cli.height, "-x");
    }

    #[test]
    fn test_help_flag_still_recognized() {
        let err = Cli::try_parse_from(["huebands", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_run_reports_overflow() {
        let cli = Cli {
            width: "99999999999999999999999".to_string(),
            height: "1".to_string(),
        };
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").starts_with("invalid image dimensions"));
    }
}
