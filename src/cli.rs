use clap::Parser;
use image::Rgb;
use std::path::PathBuf;

use crate::color::{parse_hex_color, DEFAULT_FILL};
use crate::error::{Error, Result};
use crate::geometry::{Dimensions, Direction};
use crate::ops::{Job, ResizeMethod};

#[derive(Parser, Debug)]
#[command(name = "noskew")]
#[command(version, about = "Resize, divide, or manipulate an image without stretching it")]
pub struct Cli {
    /// Path to the input image file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Path to save the resized image, or directory to save divided images
    #[arg(required = true)]
    pub output: PathBuf,

    /// Desired width of the resized image
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Desired height of the resized image
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Method to use for resizing
    #[arg(long, value_enum, default_value_t = ResizeMethod::Letterbox)]
    pub method: ResizeMethod,

    /// Fill color for letterbox borders (default: black). Format: '#RRGGBB'
    #[arg(long = "fill_color", alias = "fill-color", value_parser = parse_fill_color)]
    pub fill_color: Option<Rgb<u8>>,

    /// Divide the image into two halves instead of resizing
    #[arg(long)]
    pub divide: bool,

    /// Direction to divide the image (vertical or horizontal)
    #[arg(long, default_value = "vertical", value_parser = parse_direction)]
    pub direction: Direction,

    /// File extension (and format) of the divided halves
    #[arg(long, default_value = "jpg")]
    pub extension: String,

    /// Show processing details
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the argument combination into a job
    pub fn job(&self) -> Result<Job> {
        if self.divide {
            return Ok(Job::Divide {
                input: self.input.clone(),
                output_dir: self.output.clone(),
                direction: self.direction,
                extension: self.extension.trim_start_matches('.').to_string(),
            });
        }

        let width = self.width.ok_or(Error::MissingArgument { arg: "width" })?;
        let height = self.height.ok_or(Error::MissingArgument { arg: "height" })?;

        Ok(Job::Resize {
            input: self.input.clone(),
            output: self.output.clone(),
            dimensions: Dimensions::new(width, height)?,
            method: self.method,
            fill: self.fill_color.unwrap_or(DEFAULT_FILL),
        })
    }
}

fn parse_fill_color(s: &str) -> std::result::Result<Rgb<u8>, String> {
    parse_hex_color(s).map_err(|e| e.to_string())
}

fn parse_direction(s: &str) -> std::result::Result<Direction, String> {
    s.parse::<Direction>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("noskew").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_resize_defaults() {
        let cli = parse(&["in.png", "out.jpg", "--width", "1920", "--height", "1080"]);
        match cli.job().unwrap() {
            Job::Resize {
                dimensions,
                method,
                fill,
                ..
            } => {
                assert_eq!(dimensions, Dimensions::new(1920, 1080).unwrap());
                assert_eq!(method, ResizeMethod::Letterbox);
                assert_eq!(fill, Rgb([0, 0, 0]));
            }
            other => panic!("unexpected job: {:?}", other),
        }
    }

    #[test]
    fn test_fill_color_and_method() {
        let cli = parse(&[
            "in.png",
            "out.png",
            "--width",
            "10",
            "--height",
            "20",
            "--method",
            "crop",
            "--fill_color",
            "#FF0000",
        ]);
        assert_eq!(cli.method, ResizeMethod::Crop);
        assert_eq!(cli.fill_color, Some(Rgb([255, 0, 0])));
    }

    #[test]
    fn test_missing_height() {
        let cli = parse(&["in.png", "out.png", "--width", "10"]);
        assert!(matches!(
            cli.job(),
            Err(Error::MissingArgument { arg: "height" })
        ));
    }

    #[test]
    fn test_divide_ignores_size() {
        let cli = parse(&["in.png", "outdir", "--divide", "--direction", "horizontal"]);
        match cli.job().unwrap() {
            Job::Divide {
                direction,
                extension,
                ..
            } => {
                assert_eq!(direction, Direction::Horizontal);
                assert_eq!(extension, "jpg");
            }
            other => panic!("unexpected job: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_values() {
        let base = ["noskew", "in.png", "out"];
        let with = |extra: &[&str]| {
            Cli::try_parse_from(base.iter().chain(extra.iter()).copied()).is_err()
        };
        assert!(with(&["--divide", "--direction", "diagonal"]));
        assert!(with(&["--fill_color", "red"]));
        assert!(with(&["--width", "0", "--height", "10"]));
        assert!(with(&["--method", "stretch"]));
    }
}
