//! Colorspace conversions.
//!
//! Every conversion checks the image's colorspace tag first and reports a
//! mismatch by returning `Ok(false)` without touching the samples, so a
//! stale tag degrades to a visible no-op instead of corrupting data. YUV
//! math runs in the unsigned index space with the bias at 128, matching the
//! BT.601-style constants, and quantizes with banker's rounding.

use crate::image::{Colorspace, Image};
use crate::sample::{bankers_round, clamp_sample, index_to_sample, sample_to_index, Sample};
use crate::util::PixKitResult;

pub mod tone;

/// Collapses an n-channel image to a single channel.
///
/// `weights` must have one entry per channel; when absent or mismatched,
/// equal weights are used. The weighted sum is banker's-rounded. The image
/// is retagged [`Colorspace::Gray`].
pub fn to_gray(image: &mut Image, weights: Option<&[f32]>) -> PixKitResult<()> {
    let chans = image.chans();
    let rows = image.rows();
    let cols = image.cols();
    let w: Vec<f32> = match weights {
        Some(w) if w.len() == chans => w.to_vec(),
        _ => vec![1.0 / chans as f32; chans],
    };

    let data = image.as_mut_slice();
    for p in 0..rows * cols {
        let mut acc = 0.0f32;
        for (k, &wk) in w.iter().enumerate() {
            acc += f32::from(data[p * chans + k]) * wk;
        }
        data[p] = clamp_sample(bankers_round(acc));
    }

    image.resize(rows, cols, 1)?;
    image.set_colorspace(Colorspace::Gray);
    Ok(())
}

/// Converts a BGR image to grayscale with the 0.114/0.587/0.299 weights.
///
/// Returns `Ok(false)` without modifying the image when it is not tagged
/// [`Colorspace::Bgr`].
pub fn bgr2gray(image: &mut Image) -> PixKitResult<bool> {
    if image.colorspace() != Colorspace::Bgr {
        return Ok(false);
    }
    to_gray(image, Some(&[0.114, 0.587, 0.299]))?;
    Ok(true)
}

/// Appends an opaque alpha channel to a BGR image.
pub fn bgr2bgra(image: &mut Image) -> PixKitResult<bool> {
    if image.colorspace() != Colorspace::Bgr {
        return Ok(false);
    }
    image.channel_byte_pad(0, 1, Sample::MAX)?;
    image.set_colorspace(Colorspace::Bgra);
    Ok(true)
}

/// Converts BGR to YUV in place: `Y = 0.299R + 0.587G + 0.114B`,
/// `U = (B - Y) * 0.492 + 128`, `V = (R - Y) * 0.877 + 128`.
pub fn bgr2yuv(image: &mut Image) -> PixKitResult<bool> {
    if image.colorspace() != Colorspace::Bgr {
        return Ok(false);
    }
    let chans = image.chans();
    for pixel in image.as_mut_slice().chunks_exact_mut(chans) {
        let b = f32::from(sample_to_index(pixel[0]));
        let g = f32::from(sample_to_index(pixel[1]));
        let r = f32::from(sample_to_index(pixel[2]));
        let y = 0.299 * r + 0.587 * g + 0.114 * b;
        let u = (b - y) * 0.492 + 128.0;
        let v = (r - y) * 0.877 + 128.0;
        pixel[0] = quantize_index(y);
        pixel[1] = quantize_index(u);
        pixel[2] = quantize_index(v);
    }
    image.set_colorspace(Colorspace::Yuv);
    Ok(true)
}

/// Converts YUV back to BGR in place: `B = Y + 2.032(U - 128)`,
/// `R = Y + 1.140(V - 128)`, `G = Y - 0.395(U - 128) - 0.581(V - 128)`.
pub fn yuv2bgr(image: &mut Image) -> PixKitResult<bool> {
    if image.colorspace() != Colorspace::Yuv {
        return Ok(false);
    }
    let chans = image.chans();
    for pixel in image.as_mut_slice().chunks_exact_mut(chans) {
        let y = f32::from(sample_to_index(pixel[0]));
        let u = f32::from(sample_to_index(pixel[1])) - 128.0;
        let v = f32::from(sample_to_index(pixel[2])) - 128.0;
        let b = y + 2.032 * u;
        let r = y + 1.140 * v;
        let g = y - 0.395 * u - 0.581 * v;
        pixel[0] = quantize_index(b);
        pixel[1] = quantize_index(g);
        pixel[2] = quantize_index(r);
    }
    image.set_colorspace(Colorspace::Bgr);
    Ok(true)
}

fn quantize_index(x: f32) -> Sample {
    index_to_sample(bankers_round(x).clamp(0, 255) as u8)
}
