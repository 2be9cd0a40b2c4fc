pub mod cli;
pub mod color;
pub mod error;
pub mod geometry;
pub mod io;
pub mod ops;
pub mod transform;

pub use cli::Cli;
pub use color::parse_hex_color;
pub use error::{Error, Result};
pub use geometry::{Dimensions, Direction};
pub use ops::{divide_image, resize_image_crop, resize_image_letterbox, run, Job, ResizeMethod};
pub use transform::{crop_to_fill, letterbox, split_halves, Halves};
