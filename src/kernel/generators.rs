//! Standard kernel generators: Gaussian blur, Sobel and Laplacian.
//!
//! Each generator builds the weights once per filter type and replicates
//! them across the requested number of input channels with uncollated
//! replication, so one filter covers every channel independently.

use crate::kernel::Kernel;
use crate::sample::{uncollated_replication, Sample};
use crate::util::{PixKitError, PixKitResult};

/// Builds a normalized 2D Gaussian kernel of side `size` (odd), standard
/// deviation `theta`, replicated across `in_chans` input channels.
///
/// The 1D half-width vector is mirrored about its center, normalized to
/// unit sum, outer-multiplied with itself and quantized to the sample
/// range with a scale of 128. Quantization loses a little mass, so a
/// filtered image dims slightly.
pub fn gaussian_blur(size: usize, theta: f64, in_chans: usize) -> PixKitResult<Kernel> {
    if size == 0 || size % 2 == 0 {
        return Err(PixKitError::InvalidInput("gaussian size must be odd"));
    }
    if theta <= 0.0 {
        return Err(PixKitError::InvalidInput("gaussian theta must be positive"));
    }

    let half = size / 2 + 1;
    let norm = 1.0 / (2.0 * std::f64::consts::PI * theta * theta).sqrt();
    let halfside: Vec<f64> = (0..half)
        .map(|i| norm * (-((i * i) as f64) / (2.0 * theta * theta)).exp())
        .collect();

    // Mirror about the center sample: [a, b, c] -> [c, b, a, b, c].
    let mut values: Vec<f64> = halfside[1..].iter().rev().copied().collect();
    values.extend(halfside.iter().copied());

    let sum: f64 = values.iter().sum();
    for v in &mut values {
        *v /= sum;
    }

    let mut weights: Vec<Sample> = Vec::with_capacity(size * size);
    for &row_v in &values {
        for &col_v in &values {
            let q = ((row_v * col_v * 128.0) as i32).min(Sample::MAX as i32);
            weights.push(q as Sample);
        }
    }

    build(size, size, 1, &mut weights, in_chans)
}

/// Builds the fixed 3x3 Sobel kernel pair (horizontal gradient in output
/// channel 0, vertical in channel 1), replicated across `in_chans`.
pub fn sobel(in_chans: usize) -> PixKitResult<Kernel> {
    let mut weights: Vec<Sample> = vec![
        1, 0, -1, //
        2, 0, -2, //
        1, 0, -1, //
        // output channel boundary
        1, 2, 1, //
        0, 0, 0, //
        -1, -2, -1,
    ];
    build(3, 3, 2, &mut weights, in_chans)
}

/// Builds the fixed 3x3 Laplacian kernel, replicated across `in_chans`.
pub fn laplacian(in_chans: usize) -> PixKitResult<Kernel> {
    let mut weights: Vec<Sample> = vec![
        0, 1, 0, //
        1, -4, 1, //
        0, 1, 0,
    ];
    build(3, 3, 1, &mut weights, in_chans)
}

fn build(
    rows: usize,
    cols: usize,
    output_chans: usize,
    weights: &mut Vec<Sample>,
    in_chans: usize,
) -> PixKitResult<Kernel> {
    let in_chans = in_chans.max(1);
    uncollated_replication(weights, in_chans);
    let mut kernel = Kernel::new(rows, cols, in_chans, output_chans)?;
    kernel.as_mut_slice().copy_from_slice(weights);
    Ok(kernel)
}
