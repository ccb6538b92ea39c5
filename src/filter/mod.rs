//! Generic 2D filtering of images by kernels.
//!
//! [`filter`] applies every output channel of a [`Kernel`] to an input
//! [`Image`] under the control of a [`Plan`]: where the window is anchored,
//! how far it advances per output pixel, what value stands in for samples
//! outside the input, and how the raw accumulator is scaled back to a
//! sample. Windows that stay inside the input take a contiguous
//! inner-product fast path; edge windows add the padded portion
//! analytically instead of materializing padded rows.

use crate::image::{Image, RowCol};
use crate::kernel::Kernel;
use crate::sample::Sample;
use crate::trace::trace_span;
use crate::util::{PixKitError, PixKitResult};

pub(crate) mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

/// Scale and bias applied to the raw accumulator before quantization.
#[derive(Copy, Clone, Debug)]
pub struct Rescale {
    pub scale: f32,
    pub bias: f32,
}

/// Instructions for applying a kernel to an image.
#[derive(Copy, Clone, Debug)]
pub struct Plan {
    /// Input anchor for output pixel (0, 0).
    pub top_left: RowCol,
    /// Input advance per output row/column.
    pub strides: RowCol,
    /// Stand-in value for window samples outside the input.
    pub pad_val: Sample,
    /// Accumulator rescale; when absent the mean over the kernel window
    /// (`1 / (rows * cols * chans)`) is used with zero bias.
    pub rescale: Option<Rescale>,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            top_left: RowCol::new(0, 0),
            strides: RowCol::new(1, 1),
            pad_val: 0,
            rescale: None,
        }
    }
}

/// Convolves `input` with `kernel` into `output` as directed by `plan`.
///
/// Preconditions, each reported as a typed error: plan strides are nonzero,
/// `output.rows == input.rows / strides.row` (same for columns), the kernel
/// has one output channel per output image channel, and the kernel channel
/// count matches the input.
pub fn filter(
    output: &mut Image,
    input: &Image,
    kernel: &Kernel,
    plan: &Plan,
) -> PixKitResult<()> {
    check_plan(output, input, kernel, plan)?;
    let _guard = trace_span!(
        "filter",
        out_rows = output.rows(),
        out_cols = output.cols(),
        out_chans = output.chans()
    )
    .entered();

    let (scale, bias) = rescale_of(kernel, plan);
    let out_chans = output.chans();
    let row_stride = output.row_stride();
    for (out_row, dest) in output
        .as_mut_slice()
        .chunks_exact_mut(row_stride)
        .enumerate()
    {
        scalar::filter_row(dest, out_row, out_chans, input, kernel, plan, scale, bias);
    }
    Ok(())
}

pub(crate) fn rescale_of(kernel: &Kernel, plan: &Plan) -> (f32, f32) {
    match plan.rescale {
        Some(r) => (r.scale, r.bias),
        None => (
            1.0 / (kernel.rows() * kernel.cols() * kernel.chans()) as f32,
            0.0,
        ),
    }
}

pub(crate) fn check_plan(
    output: &Image,
    input: &Image,
    kernel: &Kernel,
    plan: &Plan,
) -> PixKitResult<()> {
    if plan.strides.row == 0 || plan.strides.col == 0 {
        return Err(PixKitError::InvalidStride {
            row: plan.strides.row,
            col: plan.strides.col,
        });
    }
    if output.rows() != input.rows() / plan.strides.row {
        return Err(PixKitError::DimensionMismatch {
            reason: "output rows must equal input rows / row stride",
        });
    }
    if output.cols() != input.cols() / plan.strides.col {
        return Err(PixKitError::DimensionMismatch {
            reason: "output cols must equal input cols / col stride",
        });
    }
    if kernel.output_chans() != output.chans() {
        return Err(PixKitError::ChannelMismatch {
            expected: kernel.output_chans(),
            got: output.chans(),
        });
    }
    if kernel.chans() != input.chans() {
        return Err(PixKitError::ChannelMismatch {
            expected: kernel.chans(),
            got: input.chans(),
        });
    }
    Ok(())
}
