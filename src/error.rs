//! Crate-level error type and `Result` alias.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: &'static str },

    #[error("{arg} must be greater than 0")]
    ZeroSize { arg: &'static str },

    #[error("Invalid fill color '{value}': {reason}. Expected format: '#RRGGBB'")]
    InvalidColor { value: String, reason: String },

    #[error("Source image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Image of {width}x{height} is too small to divide {direction}")]
    TooSmallToDivide {
        direction: &'static str,
        width: u32,
        height: u32,
    },

    #[error("Cannot determine output format from path: {path:?}")]
    UnsupportedFormat { path: PathBuf },
}
