//! Gray-level and tone transforms: brightness, contrast, thresholding,
//! dithering and histograms.

use crate::image::Image;
use crate::sample::{
    bankers_round, clamp_sample, index_to_sample, sample_to_index, saturating_add, Sample,
};
use crate::util::{PixKitError, PixKitResult};

/// Adds `mag` to every sample, saturating at the sample range.
pub fn adjust_brightness(image: &mut Image, mag: Sample) {
    for p in image.as_mut_slice() {
        *p = saturating_add(*p, i32::from(mag));
    }
}

/// Applies a tanh-based tone curve: ratios above 1 increase contrast,
/// ratios in (0, 1) decrease it.
///
/// The curve is evaluated once into a 256-entry lookup table indexed by the
/// unsigned sample representation, then applied per sample.
pub fn adjust_contrast(image: &mut Image, ratio: f32) {
    let max = f32::from(Sample::MAX);
    let slope = ratio / max;
    let mut lut = [0 as Sample; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let v = f32::from(index_to_sample(i as u8));
        *entry = clamp_sample(bankers_round((v * slope).tanh() * max));
    }
    for p in image.as_mut_slice() {
        *p = lut[sample_to_index(*p) as usize];
    }
}

/// Thresholds every sample in the unsigned index space.
///
/// Samples whose index is below `threshold` drop to the minimum value; with
/// `binarize`, samples at or above it jump to the maximum.
pub fn threshold(image: &mut Image, threshold: u8, binarize: bool) {
    for p in image.as_mut_slice() {
        if sample_to_index(*p) < threshold {
            *p = Sample::MIN;
        } else if binarize {
            *p = Sample::MAX;
        }
    }
}

/// Floyd-Steinberg error diffusion down to `n_bits` of effective depth.
///
/// Each sample is snapped to the nearest level of the reduced palette and
/// the quantization error is pushed to the right (7/16), lower-left (3/16),
/// lower (5/16) and lower-right (1/16) neighbors with saturating adds.
/// `n_bits` outside 1..=8 is rejected and the buffer left untouched.
pub fn dither(image: &mut Image, n_bits: u32) -> PixKitResult<()> {
    if !(1..=8).contains(&n_bits) {
        return Err(PixKitError::InvalidBitDepth { bits: n_bits });
    }

    let range = 256 / ((1i32 << n_bits) - 1);
    let threshold = range >> 1;

    let rows = image.rows();
    let cols = image.cols();
    let chans = image.chans();
    let row_stride = image.row_stride();
    let col_stride = image.col_stride();
    let data = image.as_mut_slice();

    for i in 0..rows {
        for j in 0..cols {
            let pixel = i * row_stride + j * col_stride;
            for k in 0..chans {
                let index = pixel + k;
                let value = data[index];
                let intensity = i32::from(value) + 128;
                let normalized = intensity % range;
                let error = if normalized > threshold {
                    normalized - range
                } else {
                    normalized
                };

                data[index] = saturating_add(value, -error);

                if j + 1 < cols {
                    let right = index + col_stride;
                    data[right] = saturating_add(data[right], error * 7 / 16);
                }
                if i + 1 < rows {
                    let below = index + row_stride;
                    if j >= 1 {
                        let lower_left = below - col_stride;
                        data[lower_left] = saturating_add(data[lower_left], error * 3 / 16);
                    }
                    data[below] = saturating_add(data[below], error * 5 / 16);
                    if j + 1 < cols {
                        let lower_right = below + col_stride;
                        data[lower_right] = saturating_add(data[lower_right], error * 1 / 16);
                    }
                }
            }
        }
    }
    Ok(())
}

/// Counts samples per channel into `n_bins` equal-width buckets over the
/// full index range.
///
/// Bucket `b` of channel `c` lands at `c * n_bins + b`. When `n_bins` does
/// not divide 256 the top bucket absorbs the remainder.
pub fn histogram(image: &Image, n_bins: usize) -> PixKitResult<Vec<u32>> {
    if n_bins == 0 || n_bins > 256 {
        return Err(PixKitError::InvalidInput("histogram bins must be 1..=256"));
    }
    let bin_width = 256 / n_bins;
    let chans = image.chans();
    let mut counts = vec![0u32; chans * n_bins];
    for (k, &s) in image.as_slice().iter().enumerate() {
        let c = k % chans;
        let bin = (sample_to_index(s) as usize / bin_width).min(n_bins - 1);
        counts[c * n_bins + bin] += 1;
    }
    Ok(counts)
}
