//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Loaded pixels are
//! remapped to the internal signed representation; RGB sources are
//! reordered to the crate's native BGR channel order.

use std::path::Path;

use crate::image::{Colorspace, Image};
use crate::sample::{index_to_sample, sample_to_index};
use crate::util::{PixKitError, PixKitResult};

/// Creates an owned grayscale image from a `GrayImage` buffer.
pub fn from_gray_image(img: &image::GrayImage) -> PixKitResult<Image> {
    let cols = img.width() as usize;
    let rows = img.height() as usize;
    Image::from_index_bytes(img.as_raw(), rows, cols, 1, Colorspace::Gray)
}

/// Creates an owned BGR image from an `RgbImage` buffer.
pub fn from_rgb_image(img: &image::RgbImage) -> PixKitResult<Image> {
    let cols = img.width() as usize;
    let rows = img.height() as usize;
    let mut out = Image::new(rows, cols, 3, Colorspace::Bgr)?;
    for (pixel, src) in out
        .as_mut_slice()
        .chunks_exact_mut(3)
        .zip(img.as_raw().chunks_exact(3))
    {
        pixel[0] = index_to_sample(src[2]);
        pixel[1] = index_to_sample(src[1]);
        pixel[2] = index_to_sample(src[0]);
    }
    Ok(out)
}

/// Creates an owned BGR image from a dynamic image.
pub fn from_dynamic_image(img: &image::DynamicImage) -> PixKitResult<Image> {
    from_rgb_image(&img.to_rgb8())
}

/// Loads an image from disk and converts it to the internal representation.
pub fn load_image<P: AsRef<Path>>(path: P) -> PixKitResult<Image> {
    let img = image::open(path).map_err(|err| PixKitError::Io {
        reason: err.to_string(),
    })?;
    from_dynamic_image(&img)
}

/// Converts a single-channel image back to a `GrayImage` buffer.
pub fn to_gray_image(image: &Image) -> PixKitResult<image::GrayImage> {
    if image.chans() != 1 {
        return Err(PixKitError::ChannelMismatch {
            expected: 1,
            got: image.chans(),
        });
    }
    let bytes: Vec<u8> = image.as_slice().iter().map(|&s| sample_to_index(s)).collect();
    image::GrayImage::from_raw(image.cols() as u32, image.rows() as u32, bytes).ok_or(
        PixKitError::InvalidDimensions {
            rows: image.rows(),
            cols: image.cols(),
            chans: 1,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_image_round_trip() {
        let src = image::GrayImage::from_fn(3, 2, |x, y| image::Luma([(x * 50 + y * 10) as u8]));
        let img = from_gray_image(&src).unwrap();
        assert_eq!(img.rows(), 2);
        assert_eq!(img.cols(), 3);
        let back = to_gray_image(&img).unwrap();
        assert_eq!(back.as_raw(), src.as_raw());
    }

    #[test]
    fn rgb_image_is_reordered_to_bgr() {
        let src = image::RgbImage::from_pixel(1, 1, image::Rgb([10, 20, 30]));
        let img = from_rgb_image(&src).unwrap();
        assert_eq!(img.colorspace(), Colorspace::Bgr);
        assert_eq!(sample_to_index(img.sample(0, 0, 0).unwrap()), 30);
        assert_eq!(sample_to_index(img.sample(0, 0, 1).unwrap()), 20);
        assert_eq!(sample_to_index(img.sample(0, 0, 2).unwrap()), 10);
    }
}
