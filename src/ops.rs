//! File-level operations: read one image, transform it, write the result.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::Rgb;
use tracing::debug;

use crate::error::Result;
use crate::geometry::{Dimensions, Direction};
use crate::io::{open_image, save_image};
use crate::transform::{crop_to_fill, letterbox, split_halves};

/// How to reach the target size without stretching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResizeMethod {
    /// Scale to fit and pad the border with a fill color
    #[default]
    Letterbox,
    /// Scale to cover and trim the overflow
    Crop,
}

/// A validated invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    Resize {
        input: PathBuf,
        output: PathBuf,
        dimensions: Dimensions,
        method: ResizeMethod,
        fill: Rgb<u8>,
    },
    Divide {
        input: PathBuf,
        output_dir: PathBuf,
        direction: Direction,
        extension: String,
    },
}

/// Letterbox `input` to exactly `dimensions` and write it to `output`
pub fn resize_image_letterbox(
    input: &Path,
    output: &Path,
    dimensions: Dimensions,
    fill: Rgb<u8>,
) -> Result<()> {
    let img = open_image(input)?;
    save_image(&letterbox(&img, dimensions, fill)?, output)
}

/// Crop-resize `input` to exactly `dimensions` and write it to `output`
pub fn resize_image_crop(input: &Path, output: &Path, dimensions: Dimensions) -> Result<()> {
    let img = open_image(input)?;
    save_image(&crop_to_fill(&img, dimensions)?, output)
}

/// Split `input` into two halves written into `output_dir`.
///
/// Returns the paths of the first and second half.
pub fn divide_image(
    input: &Path,
    output_dir: &Path,
    direction: Direction,
    extension: &str,
) -> Result<[PathBuf; 2]> {
    let img = open_image(input)?;
    let halves = split_halves(&img, direction)?;

    std::fs::create_dir_all(output_dir)?;
    let (first_name, second_name) = direction.half_names();
    let first = output_dir.join(format!("{}.{}", first_name, extension));
    let second = output_dir.join(format!("{}.{}", second_name, extension));
    debug!("Dividing {} into {:?} and {:?}", direction, first, second);

    save_image(&halves.first, &first)?;
    save_image(&halves.second, &second)?;
    Ok([first, second])
}

/// Execute a job, returning the message describing what was written
pub fn run(job: &Job) -> Result<String> {
    match job {
        Job::Resize {
            input,
            output,
            dimensions,
            method: ResizeMethod::Letterbox,
            fill,
        } => {
            resize_image_letterbox(input, output, *dimensions, *fill)?;
            Ok(format!("Letterboxed image saved to {}", output.display()))
        }
        Job::Resize {
            input,
            output,
            dimensions,
            method: ResizeMethod::Crop,
            ..
        } => {
            resize_image_crop(input, output, *dimensions)?;
            Ok(format!("Cropped image saved to {}", output.display()))
        }
        Job::Divide {
            input,
            output_dir,
            direction,
            extension,
        } => {
            let [first, second] = divide_image(input, output_dir, *direction, extension)?;
            let name = |p: &Path| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            };
            Ok(format!(
                "Image divided {} into {} and {} in {}",
                direction.adverb(),
                name(&first),
                name(&second),
                output_dir.display()
            ))
        }
    }
}
