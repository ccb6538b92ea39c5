//! Geometric transforms: crop, padding and flipping.
//!
//! All operations work in place on the owned storage. Row shifts run
//! back-to-front and crops copy forward per row so overlapping source and
//! destination ranges never corrupt samples that are still to be read.

use crate::image::{Dimension, Image, Region};
use crate::sample::Sample;
use crate::util::{PixKitError, PixKitResult};

impl Image {
    /// Crops the image down to `region`; pixels outside it are deleted.
    pub fn crop(&mut self, region: Region) -> PixKitResult<()> {
        self.require_region(region)?;

        // Rows are copied independently because the row stride may exceed
        // the cropped row length.
        let len = region.extents.col * self.col_stride;
        for i in 0..region.extents.row {
            let src = self.sample_index(region.top_left.row + i, region.top_left.col);
            self.data.copy_within(src..src + len, i * len);
        }
        self.resize(region.extents.row, region.extents.col, self.chans)
    }

    /// Inserts `before` rows above and `after` rows below, filled with
    /// `color` (collapsed to gray for single-channel images).
    pub fn vertical_pad(&mut self, color: [u8; 3], before: i32, after: i32) -> PixKitResult<()> {
        let (before, after) = check_pad(before, after)?;
        if before == 0 && after == 0 {
            return Ok(());
        }

        let old_rows = self.rows;
        let fill = self.fill_color(color);
        self.resize(old_rows + before + after, self.cols, self.chans)?;

        let stride = self.row_stride;
        for i in (0..old_rows).rev() {
            let src = i * stride;
            self.data.copy_within(src..src + stride, (i + before) * stride);
        }
        for i in (0..before).chain(old_rows + before..self.rows) {
            fill_pixels(&mut self.data[i * stride..(i + 1) * stride], &fill);
        }
        Ok(())
    }

    /// Inserts `before` columns on the left and `after` columns on the
    /// right, filled with `color` (collapsed to gray for single-channel
    /// images).
    pub fn horizontal_pad(&mut self, color: [u8; 3], before: i32, after: i32) -> PixKitResult<()> {
        let (before, after) = check_pad(before, after)?;
        if before == 0 && after == 0 {
            return Ok(());
        }

        let fill = self.fill_color(color);
        let old_cols = self.cols;
        let old_stride = self.row_stride;
        let rows = self.rows;
        self.resize(rows, old_cols + before + after, self.chans)?;

        let new_stride = self.row_stride;
        let cs = self.col_stride;
        for i in (0..rows).rev() {
            let src = i * old_stride;
            let dst = i * new_stride + before * cs;
            self.data.copy_within(src..src + old_stride, dst);
            let row_start = i * new_stride;
            fill_pixels(&mut self.data[row_start..row_start + before * cs], &fill);
            let suffix = row_start + (before + old_cols) * cs;
            fill_pixels(&mut self.data[suffix..row_start + new_stride], &fill);
        }
        Ok(())
    }

    /// Inserts raw samples on the left and right of each row, ignoring
    /// channel boundaries.
    ///
    /// The image is reshaped to a flattened single-channel view so the
    /// amounts need not be multiples of the channel count; the original
    /// shape is restored only when both amounts are channel-aligned.
    pub fn horizontal_byte_pad(
        &mut self,
        before: i32,
        after: i32,
        value: Sample,
    ) -> PixKitResult<()> {
        let (before, after) = check_pad(before, after)?;
        if before == 0 && after == 0 {
            return Ok(());
        }

        let old_chans = self.chans;
        let rows = self.rows;
        self.resize(rows, self.cols * old_chans, 1)?;

        let old_stride = self.row_stride;
        self.resize(rows, old_stride + before + after, 1)?;
        let new_stride = self.row_stride;
        for i in (0..rows).rev() {
            let src = i * old_stride;
            let dst = i * new_stride;
            self.data.copy_within(src..src + old_stride, dst + before);
            self.data[dst..dst + before].fill(value);
            self.data[dst + before + old_stride..dst + new_stride].fill(value);
        }

        if before % old_chans == 0 && after % old_chans == 0 {
            let cols = self.cols / old_chans;
            self.resize(rows, cols, old_chans)?;
        }
        Ok(())
    }

    /// Inserts `before` channels in front of and `after` channels behind the
    /// existing ones in every pixel, filled with `value`.
    pub fn channel_byte_pad(&mut self, before: i32, after: i32, value: Sample) -> PixKitResult<()> {
        let (before, after) = check_pad(before, after)?;
        if before == 0 && after == 0 {
            return Ok(());
        }

        let old_chans = self.chans;
        let new_chans = old_chans + before + after;
        let pixels = self.rows * self.cols;
        self.resize(self.rows, self.cols, new_chans)?;

        // Reconstruct each pixel from the last sample backward so sources of
        // earlier pixels are still intact when reached.
        for p in (0..pixels).rev() {
            let src = p * old_chans;
            let dst = p * new_chans;
            self.data.copy_within(src..src + old_chans, dst + before);
            self.data[dst..dst + before].fill(value);
            self.data[dst + before + old_chans..dst + new_chans].fill(value);
        }
        Ok(())
    }

    /// Flips the image about `dim`: row order for [`Dimension::Row`], column
    /// order within each row for [`Dimension::Col`]. Channels stay grouped.
    pub fn flip(&mut self, dim: Dimension) {
        match dim {
            Dimension::Row => {
                let stride = self.row_stride;
                let rows = self.rows;
                for i in 0..rows / 2 {
                    let top = i * stride;
                    let bottom = (rows - 1 - i) * stride;
                    let (head, tail) = self.data.split_at_mut(bottom);
                    head[top..top + stride].swap_with_slice(&mut tail[..stride]);
                }
            }
            Dimension::Col => {
                let cs = self.col_stride;
                for i in 0..self.rows {
                    for j in 0..self.cols / 2 {
                        let left = self.sample_index(i, j);
                        let right = self.sample_index(i, self.cols - 1 - j);
                        for k in 0..cs {
                            self.data.swap(left + k, right + k);
                        }
                    }
                }
            }
        }
    }
}

fn check_pad(before: i32, after: i32) -> PixKitResult<(usize, usize)> {
    if before < 0 || after < 0 {
        return Err(PixKitError::NegativePad { before, after });
    }
    Ok((before as usize, after as usize))
}

fn fill_pixels(slice: &mut [Sample], fill: &[Sample]) {
    for chunk in slice.chunks_exact_mut(fill.len()) {
        chunk.copy_from_slice(fill);
    }
}
