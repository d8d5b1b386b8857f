//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::weights::Weight;

/// Find the least-energy path from the top-left to the bottom-right pixel
/// of an image and write a copy with the path drawn in green.
#[derive(Debug, Parser)]
#[command(name = "marcher", version)]
pub struct Cli {
    /// Input image (binary PPM or PNG)
    pub image: PathBuf,

    /// Weight function: 1 | similar-colour, 2 | how-white, 3 | all-colour
    #[arg(value_parser = parse_weight)]
    pub mode: Weight,

    /// Output image path [default: Path-<IMAGE file name>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a JSON run report on stdout
    #[arg(long)]
    pub json: bool,
}

fn parse_weight(s: &str) -> Result<Weight, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_numeric_mode() {
        let cli = Cli::try_parse_from(["marcher", "images/maze.ppm", "2"]).unwrap();
        assert_eq!(cli.image, PathBuf::from("images/maze.ppm"));
        assert_eq!(cli.mode, Weight::HowWhite);
        assert_eq!(cli.output, None);
        assert!(!cli.json);
    }

    #[test]
    fn parses_named_mode_and_flags() {
        let cli = Cli::try_parse_from([
            "marcher",
            "water.ppm",
            "similar-colour",
            "--output",
            "out.png",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.mode, Weight::SimilarColour);
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert!(cli.json);
    }

    #[test]
    fn missing_mode_is_usage_error() {
        let err = Cli::try_parse_from(["marcher", "water.ppm"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn extra_argument_is_usage_error() {
        let err = Cli::try_parse_from(["marcher", "a.ppm", "1", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn out_of_range_mode_is_rejected() {
        for bad in ["0", "4", "256", "sepia"] {
            let err = Cli::try_parse_from(["marcher", "a.ppm", bad]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "mode {bad}");
        }
    }
}
