//! Drawing primitives for annotating images.

use crate::image::{Image, Region};

/// Writes one pixel.
///
/// `color` is a BGR display color in the unsigned index space; on
/// single-channel images it collapses to gray. Out-of-bounds coordinates
/// are ignored so callers can paint clipped shapes without pre-checking.
pub fn paint(image: &mut Image, row: usize, col: usize, color: [u8; 3]) {
    let fill = image.fill_color(color);
    if let Some(pixel) = image.pixel_mut(row, col) {
        pixel.copy_from_slice(&fill);
    }
}

/// Draws the border of `region` with the given line thickness, clipped to
/// the image bounds.
///
/// Thickness 0 and 1 both produce single-pixel lines; larger values widen
/// each edge into a band centered on it.
pub fn draw_rect(image: &mut Image, color: [u8; 3], region: Region, thickness: usize) {
    if region.extents.row == 0 || region.extents.col == 0 {
        return;
    }

    let r0 = region.top_left.row;
    let r1 = region.top_left.row + region.extents.row - 1;
    let c0 = region.top_left.col;
    let c1 = region.top_left.col + region.extents.col - 1;

    if thickness <= 1 {
        for j in c0..=c1 {
            paint(image, r0, j, color);
            paint(image, r1, j, color);
        }
        for i in r0..=r1 {
            paint(image, i, c0, color);
            paint(image, i, c1, color);
        }
        return;
    }

    let half = thickness.div_ceil(2);
    let row_lo = r0.saturating_sub(half);
    let row_hi = r1 + half;
    let col_lo = c0.saturating_sub(half);
    let col_hi = c1 + half;

    for i in row_lo..=row_hi {
        for j in col_lo..=col_hi {
            let on_horizontal = i.abs_diff(r0) <= half || i.abs_diff(r1) <= half;
            let on_vertical = j.abs_diff(c0) <= half || j.abs_diff(c1) <= half;
            if on_horizontal || on_vertical {
                paint(image, i, j, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{Colorspace, RowCol};
    use crate::sample::{index_to_sample, sample_to_index};

    #[test]
    fn paint_collapses_color_on_gray_images() {
        let mut img = Image::new(2, 2, 1, Colorspace::Gray).unwrap();
        paint(&mut img, 0, 1, [255, 255, 255]);
        assert_eq!(sample_to_index(img.sample(0, 1, 0).unwrap()), 255);
        assert_eq!(sample_to_index(img.sample(0, 0, 0).unwrap()), 128);
        // Off-image paints are ignored.
        paint(&mut img, 5, 5, [0, 0, 0]);
    }

    #[test]
    fn thin_rect_outlines_the_region() {
        let mut img = Image::new(6, 6, 3, Colorspace::Bgr).unwrap();
        let region = Region::new(RowCol::new(1, 1), RowCol::new(4, 4));
        draw_rect(&mut img, [10, 20, 30], region, 1);

        let border = [index_to_sample(10), index_to_sample(20), index_to_sample(30)];
        assert_eq!(img.pixel(1, 1).unwrap(), &border);
        assert_eq!(img.pixel(1, 4).unwrap(), &border);
        assert_eq!(img.pixel(4, 1).unwrap(), &border);
        assert_eq!(img.pixel(3, 4).unwrap(), &border);
        // Interior and exterior stay untouched.
        assert_eq!(img.pixel(2, 2).unwrap(), &[0, 0, 0]);
        assert_eq!(img.pixel(0, 0).unwrap(), &[0, 0, 0]);
        assert_eq!(img.pixel(5, 5).unwrap(), &[0, 0, 0]);
    }

    #[test]
    fn thick_rect_clips_at_image_edges() {
        let mut img = Image::new(5, 5, 1, Colorspace::Gray).unwrap();
        let region = Region::new(RowCol::new(1, 1), RowCol::new(3, 3));
        draw_rect(&mut img, [255, 255, 255], region, 3);

        // The band swallows the whole 5x5 image except nothing: every pixel
        // is within half = 2 of an edge line, so all are painted.
        assert!(img
            .as_slice()
            .iter()
            .all(|&s| sample_to_index(s) == 255));
    }

    #[test]
    fn empty_region_draws_nothing() {
        let mut img = Image::new(4, 4, 1, Colorspace::Gray).unwrap();
        draw_rect(
            &mut img,
            [255, 255, 255],
            Region::new(RowCol::new(1, 1), RowCol::new(0, 3)),
            1,
        );
        assert!(img.as_slice().iter().all(|&s| s == 0));
    }
}
