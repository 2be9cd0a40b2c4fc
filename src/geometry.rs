use std::fmt;
use std::str::FromStr;

use imageproc::rect::Rect;

use crate::error::{Error, Result};

/// Target output size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Create target dimensions, rejecting zero on either axis
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(Error::ZeroSize { arg: "width" });
        }
        if height == 0 {
            return Err(Error::ZeroSize { arg: "height" });
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis along which an image is split into halves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left and right halves
    #[default]
    Vertical,
    /// Top and bottom halves
    Horizontal,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Vertical => "vertical",
            Direction::Horizontal => "horizontal",
        }
    }

    /// Adverb used in user-facing messages
    pub fn adverb(&self) -> &'static str {
        match self {
            Direction::Vertical => "vertically",
            Direction::Horizontal => "horizontally",
        }
    }

    /// File stems of the two halves, in reading order
    pub fn half_names(&self) -> (&'static str, &'static str) {
        match self {
            Direction::Vertical => ("left_half", "right_half"),
            Direction::Horizontal => ("top_half", "bottom_half"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vertical" => Ok(Direction::Vertical),
            "horizontal" => Ok(Direction::Horizontal),
            other => Err(Error::InvalidArgument {
                arg: "direction",
                value: other.to_string(),
            }),
        }
    }
}

/// `round(a * b / c)` without going through floats
fn mul_div_round(a: u32, b: u32, c: u32) -> u32 {
    let (a, b, c) = (a as u64, b as u64, c as u64);
    ((a * b + c / 2) / c) as u32
}

/// Compare the aspect ratios of source and target.
/// `Greater` means the source is wider than the target.
fn compare_aspect(src: (u32, u32), target: Dimensions) -> std::cmp::Ordering {
    let lhs = src.0 as u64 * target.height as u64;
    let rhs = target.width as u64 * src.1 as u64;
    lhs.cmp(&rhs)
}

/// Size of the source after uniform scaling so it fits entirely within the target
pub fn fit_within(src: (u32, u32), target: Dimensions) -> (u32, u32) {
    use std::cmp::Ordering;

    let (src_w, src_h) = src;
    match compare_aspect(src, target) {
        Ordering::Equal => (target.width, target.height),
        Ordering::Greater => {
            let h = mul_div_round(src_h, target.width, src_w).clamp(1, target.height);
            (target.width, h)
        }
        Ordering::Less => {
            let w = mul_div_round(src_w, target.height, src_h).clamp(1, target.width);
            (w, target.height)
        }
    }
}

fn ensure_nonempty(src: (u32, u32)) -> Result<()> {
    if src.0 == 0 || src.1 == 0 {
        return Err(Error::EmptyImage {
            width: src.0,
            height: src.1,
        });
    }
    Ok(())
}

/// Where the scaled source sits inside a letterboxed canvas
pub fn letterbox_placement(src: (u32, u32), target: Dimensions) -> Result<Rect> {
    ensure_nonempty(src)?;
    let (w, h) = fit_within(src, target);
    let x = (target.width - w) / 2;
    let y = (target.height - h) / 2;
    Ok(Rect::at(x as i32, y as i32).of_size(w, h))
}

/// Centered region of the source with the target aspect ratio.
///
/// Scaling this region to the target size is the same as scaling the whole
/// source to cover the target and trimming the overflow.
pub fn cover_crop(src: (u32, u32), target: Dimensions) -> Result<Rect> {
    use std::cmp::Ordering;

    ensure_nonempty(src)?;
    let (src_w, src_h) = src;
    let (w, h) = match compare_aspect(src, target) {
        Ordering::Equal => (src_w, src_h),
        Ordering::Greater => {
            let w = mul_div_round(src_h, target.width, target.height).clamp(1, src_w);
            (w, src_h)
        }
        Ordering::Less => {
            let h = mul_div_round(src_w, target.height, target.width).clamp(1, src_h);
            (src_w, h)
        }
    };

    Ok(Rect::at(((src_w - w) / 2) as i32, ((src_h - h) / 2) as i32).of_size(w, h))
}

/// Split an image of the given size into two contiguous halves at the midpoint.
/// With an odd dimension the second half is one pixel larger.
pub fn half_regions(size: (u32, u32), direction: Direction) -> Result<(Rect, Rect)> {
    let (width, height) = size;
    let too_small = || Error::TooSmallToDivide {
        direction: direction.adverb(),
        width,
        height,
    };

    match direction {
        Direction::Vertical => {
            if width < 2 || height == 0 {
                return Err(too_small());
            }
            let mid = width / 2;
            Ok((
                Rect::at(0, 0).of_size(mid, height),
                Rect::at(mid as i32, 0).of_size(width - mid, height),
            ))
        }
        Direction::Horizontal => {
            if height < 2 || width == 0 {
                return Err(too_small());
            }
            let mid = height / 2;
            Ok((
                Rect::at(0, 0).of_size(width, mid),
                Rect::at(0, mid as i32).of_size(width, height - mid),
            ))
        }
    }
}
