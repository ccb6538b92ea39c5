//! Scalar reference implementation of the convolution inner loops.

use crate::filter::Plan;
use crate::image::Image;
use crate::kernel::Kernel;
use crate::sample::{clamp_sample, Sample};

/// Computes one output row.
///
/// `dest` is the row's `cols * chans` samples. Shared between the
/// sequential driver and the rayon driver, which must stay bit-identical.
#[allow(clippy::too_many_arguments)]
pub(crate) fn filter_row(
    dest: &mut [Sample],
    out_row: usize,
    out_chans: usize,
    input: &Image,
    kernel: &Kernel,
    plan: &Plan,
    scale: f32,
    bias: f32,
) {
    let k_rows = kernel.rows();
    let k_cols = kernel.cols();
    let k_row_stride = kernel.row_stride();
    let k_col_stride = kernel.col_stride();
    let window = (k_rows * k_cols * kernel.chans()) as i64;
    let in_rows = input.rows() as isize;
    let in_cols = input.cols() as isize;
    let in_data = input.as_slice();
    let k_data = kernel.as_slice();
    let out_cols = dest.len() / out_chans;

    let in_row = (plan.top_left.row + out_row * plan.strides.row) as isize;
    let krow_start = in_row - (k_rows / 2) as isize;
    let krow_end = krow_start + k_rows as isize;

    for out_col in 0..out_cols {
        let in_col = (plan.top_left.col + out_col * plan.strides.col) as isize;
        let kcol_start = in_col - (k_cols / 2) as isize;
        let kcol_end = kcol_start + k_cols as isize;

        for ochan in 0..out_chans {
            let mut acc: i64 = 0;
            if krow_start >= 0 && kcol_start >= 0 && krow_end <= in_rows && kcol_end <= in_cols {
                // Fully interior window: contiguous rows on both sides.
                for krow in 0..k_rows {
                    let src = input.sample_index(krow_start as usize + krow, kcol_start as usize);
                    let ksrc = kernel.sample_index(krow, 0, ochan);
                    acc += inner_product(
                        &in_data[src..src + k_row_stride],
                        &k_data[ksrc..ksrc + k_row_stride],
                    );
                }
            } else {
                let pad_above = (-krow_start).max(0) as usize;
                let pad_left = (-kcol_start).max(0) as usize;
                let pad_below = (krow_end - in_rows).max(0) as usize;
                let pad_right = (kcol_end - in_cols).max(0) as usize;
                let covered_rows = k_rows.saturating_sub(pad_above + pad_below);
                let covered_cols = k_cols.saturating_sub(pad_left + pad_right);

                if covered_rows > 0 && covered_cols > 0 {
                    let len = covered_cols * k_col_stride;
                    for krow in pad_above..pad_above + covered_rows {
                        let row = (krow_start + krow as isize) as usize;
                        let col = (kcol_start + pad_left as isize) as usize;
                        let src = input.sample_index(row, col);
                        let ksrc = kernel.sample_index(krow, pad_left, ochan);
                        acc += inner_product(&in_data[src..src + len], &k_data[ksrc..ksrc + len]);
                    }
                }

                // Out-of-bounds window samples contribute the pad value,
                // added analytically instead of materializing padded rows.
                let covered = (covered_rows * covered_cols * kernel.chans()) as i64;
                acc += i64::from(plan.pad_val) * (window - covered);
            }

            let value = acc as f32 * scale + bias;
            dest[out_col * out_chans + ochan] = clamp_sample(value.round() as i32);
        }
    }
}

fn inner_product(data: &[Sample], weights: &[Sample]) -> i64 {
    data.iter()
        .zip(weights)
        .map(|(&d, &w)| i64::from(d) * i64::from(w))
        .sum()
}
