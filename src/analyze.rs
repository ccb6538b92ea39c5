//! Contour point detection and bounding-box computation.

use crate::image::{Image, Region, RowCol};
use crate::util::{PixKitError, PixKitResult};

/// Finds candidate edge points on channel 0 of `image`.
///
/// Two passes compare 3x3 gradient values at adjacent columns (horizontal
/// pass) and adjacent rows (vertical pass); a point is flagged when the
/// absolute difference exceeds `difference`. A pixel can be reported by both
/// passes, so the output may contain duplicates.
pub fn find_contour(image: &Image, difference: u8) -> Vec<RowCol> {
    let rows = image.rows();
    let cols = image.cols();
    let data = image.as_slice();
    let at = |r: usize, c: usize| i32::from(data[image.sample_index(r, c)]);
    let limit = i32::from(difference);

    let mut points = Vec::new();

    // Horizontal set: adjacent-column gradients.
    for i in 1..rows.saturating_sub(1) {
        for j in 1..cols.saturating_sub(2) {
            let value1 = -at(i - 1, j - 1) + at(i - 1, j + 1) - 2 * at(i, j - 1)
                + 2 * at(i, j + 1)
                - at(i + 1, j - 1)
                + at(i + 1, j + 1);
            let value2 = -at(i - 1, j) + at(i - 1, j + 2) - 2 * at(i, j) + 2 * at(i, j + 2)
                - at(i + 1, j)
                + at(i + 1, j + 2);
            if (value1 - value2).abs() > limit {
                points.push(RowCol::new(i, j));
            }
        }
    }

    // Vertical set: adjacent-row gradients.
    for i in 1..rows.saturating_sub(2) {
        for j in 1..cols.saturating_sub(1) {
            let value1 = -at(i - 1, j - 1) + at(i + 1, j - 1) - 2 * at(i - 1, j)
                + 2 * at(i + 1, j)
                - at(i - 1, j + 1)
                + at(i + 1, j + 1);
            let value2 = -at(i, j - 1) + at(i + 2, j - 1) - 2 * at(i, j) + 2 * at(i + 2, j)
                - at(i, j + 1)
                + at(i + 2, j + 1);
            if (value1 - value2).abs() > limit {
                points.push(RowCol::new(i, j));
            }
        }
    }

    points
}

/// Computes the minimal axis-aligned box containing every point.
pub fn bounding_box(points: &[RowCol]) -> PixKitResult<Region> {
    let first = points
        .first()
        .ok_or(PixKitError::EmptyInput("bounding box needs at least one point"))?;

    let mut row_min = first.row;
    let mut row_max = first.row;
    let mut col_min = first.col;
    let mut col_max = first.col;
    for p in points {
        row_min = row_min.min(p.row);
        row_max = row_max.max(p.row);
        col_min = col_min.min(p.col);
        col_max = col_max.max(p.col);
    }

    Ok(Region::new(
        RowCol::new(row_min, col_min),
        RowCol::new(1 + row_max - row_min, 1 + col_max - col_min),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Colorspace;
    use crate::sample::Sample;

    #[test]
    fn bounding_box_encloses_all_points() {
        let points = [RowCol::new(1, 1), RowCol::new(3, 4), RowCol::new(2, 0)];
        let region = bounding_box(&points).unwrap();
        assert_eq!(region.top_left, RowCol::new(1, 0));
        assert_eq!(region.extents, RowCol::new(3, 5));
    }

    #[test]
    fn bounding_box_of_single_point_has_unit_extents() {
        let region = bounding_box(&[RowCol::new(4, 7)]).unwrap();
        assert_eq!(region.top_left, RowCol::new(4, 7));
        assert_eq!(region.extents, RowCol::new(1, 1));
    }

    #[test]
    fn bounding_box_rejects_empty_input() {
        let err = bounding_box(&[]).err().unwrap();
        assert_eq!(
            err,
            PixKitError::EmptyInput("bounding box needs at least one point")
        );
    }

    #[test]
    fn contour_flags_columns_beside_a_step_edge() {
        // Left half dark, right half bright; the edge runs between columns
        // 2 and 3.
        let mut data = vec![0 as Sample; 36];
        for row in 0..6 {
            for col in 3..6 {
                data[row * 6 + col] = 100;
            }
        }
        let img = Image::from_vec(data, 6, 6, 1, Colorspace::Gray).unwrap();

        let points = find_contour(&img, 50);
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.col == 1 || p.col == 3));

        let region = bounding_box(&points).unwrap();
        assert_eq!(region.top_left, RowCol::new(1, 1));
        assert_eq!(region.extents, RowCol::new(4, 3));
    }

    #[test]
    fn contour_keeps_duplicates_between_passes() {
        let mut data = vec![0 as Sample; 25];
        data[2 * 5 + 2] = 100;
        let img = Image::from_vec(data, 5, 5, 1, Colorspace::Gray).unwrap();

        let points = find_contour(&img, 50);
        let hits = points
            .iter()
            .filter(|p| **p == RowCol::new(1, 1))
            .count();
        assert_eq!(hits, 2, "both passes report the same corner point");
    }
}
