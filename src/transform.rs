use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel, Rgb, Rgba};
use imageproc::rect::Rect;
use tracing::debug;

use crate::error::Result;
use crate::geometry::{cover_crop, half_regions, letterbox_placement, Dimensions, Direction};

/// Resampling filter used for every scaling step
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// The two pieces of a split image, in reading order
#[derive(Debug, Clone)]
pub struct Halves {
    /// Left or top half
    pub first: DynamicImage,
    /// Right or bottom half
    pub second: DynamicImage,
}

/// Scale `src` into `placement` and paste it over a canvas filled with `fill`
fn pad_buffer<P>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    placement: Rect,
    target: Dimensions,
    fill: P,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let scaled = imageops::resize(src, placement.width(), placement.height(), RESAMPLE_FILTER);
    let mut canvas = ImageBuffer::from_pixel(target.width, target.height, fill);
    imageops::replace(
        &mut canvas,
        &scaled,
        placement.left() as i64,
        placement.top() as i64,
    );
    canvas
}

/// Resize to exactly `target`, preserving aspect ratio by padding with `fill`.
///
/// Images with an alpha channel come back as RGBA with an opaque border,
/// everything else as RGB.
pub fn letterbox(img: &DynamicImage, target: Dimensions, fill: Rgb<u8>) -> Result<DynamicImage> {
    let placement = letterbox_placement(img.dimensions(), target)?;
    debug!(
        "Letterbox: {}x{} -> content {}x{} at ({}, {}) on {}",
        img.width(),
        img.height(),
        placement.width(),
        placement.height(),
        placement.left(),
        placement.top(),
        target
    );

    let padded = if img.color().has_alpha() {
        let fill = Rgba([fill[0], fill[1], fill[2], u8::MAX]);
        DynamicImage::ImageRgba8(pad_buffer(&img.to_rgba8(), placement, target, fill))
    } else {
        DynamicImage::ImageRgb8(pad_buffer(&img.to_rgb8(), placement, target, fill))
    };
    Ok(padded)
}

/// Resize to exactly `target`, preserving aspect ratio by trimming the overflow
pub fn crop_to_fill(img: &DynamicImage, target: Dimensions) -> Result<DynamicImage> {
    let region = cover_crop(img.dimensions(), target)?;
    debug!(
        "Crop: keeping {}x{} at ({}, {}) of {}x{}, scaling to {}",
        region.width(),
        region.height(),
        region.left(),
        region.top(),
        img.width(),
        img.height(),
        target
    );

    let cropped = img.crop_imm(
        region.left() as u32,
        region.top() as u32,
        region.width(),
        region.height(),
    );
    Ok(cropped.resize_exact(target.width, target.height, RESAMPLE_FILTER))
}

/// Split an image into two halves at the midpoint of the chosen axis
pub fn split_halves(img: &DynamicImage, direction: Direction) -> Result<Halves> {
    let (first, second) = half_regions(img.dimensions(), direction)?;
    let cut = |r: Rect| img.crop_imm(r.left() as u32, r.top() as u32, r.width(), r.height());

    Ok(Halves {
        first: cut(first),
        second: cut(second),
    })
}
