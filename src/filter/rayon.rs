//! Row-parallel filtering.
//!
//! Available when the `rayon` feature is enabled. Output rows are disjoint,
//! so they are rendered concurrently with the same per-row routine as the
//! sequential path; results are bit-identical to [`filter`](crate::filter).

use ::rayon::prelude::*;

use crate::filter::{check_plan, rescale_of, scalar, Plan};
use crate::image::Image;
use crate::kernel::Kernel;
use crate::trace::trace_span;
use crate::util::PixKitResult;

/// Parallel variant of [`filter`](crate::filter) with the same contract.
pub fn filter_par(
    output: &mut Image,
    input: &Image,
    kernel: &Kernel,
    plan: &Plan,
) -> PixKitResult<()> {
    check_plan(output, input, kernel, plan)?;
    let _guard = trace_span!(
        "filter_par",
        out_rows = output.rows(),
        out_cols = output.cols(),
        out_chans = output.chans()
    )
    .entered();

    let (scale, bias) = rescale_of(kernel, plan);
    let out_chans = output.chans();
    let row_stride = output.row_stride();
    output
        .as_mut_slice()
        .par_chunks_exact_mut(row_stride)
        .enumerate()
        .for_each(|(out_row, dest)| {
            scalar::filter_row(dest, out_row, out_chans, input, kernel, plan, scale, bias);
        });
    Ok(())
}
