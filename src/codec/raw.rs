//! Headerless binary dumps.
//!
//! Images are dumped one unsigned byte per sample in native row-major,
//! channel-interleaved order; regions as four little-endian `i32` values
//! (top-left row, top-left col, extents row, extents col); histograms as a
//! sequence of little-endian `u32` counts. The same raw image layout is the
//! ingestion format for collaborator buffers.

use std::io::{Read, Write};
use std::path::Path;

use crate::image::{Colorspace, Image, Region};
use crate::sample::{index_to_sample, sample_to_index};
use crate::util::{PixKitError, PixKitResult};

/// Writes every sample of `image` as an unsigned byte.
pub fn write_image_raw<W: Write>(image: &Image, writer: &mut W) -> PixKitResult<()> {
    let mut row = Vec::with_capacity(image.row_stride());
    for i in 0..image.rows() {
        row.clear();
        row.extend(
            image
                .row(i)
                .expect("row index within image")
                .iter()
                .map(|&s| sample_to_index(s)),
        );
        writer.write_all(&row)?;
    }
    Ok(())
}

/// Reads `rows * cols * chans` unsigned bytes into a new [`Image`].
pub fn read_image_raw<R: Read>(
    reader: &mut R,
    rows: usize,
    cols: usize,
    chans: usize,
    colorspace: Colorspace,
) -> PixKitResult<Image> {
    let mut image = Image::new(rows, cols, chans, colorspace)?;
    let mut bytes = vec![0u8; image.as_slice().len()];
    reader.read_exact(&mut bytes)?;
    for (d, &b) in image.as_mut_slice().iter_mut().zip(&bytes) {
        *d = index_to_sample(b);
    }
    Ok(image)
}

/// Writes a region as four little-endian `i32` values.
pub fn write_region_raw<W: Write>(region: Region, writer: &mut W) -> PixKitResult<()> {
    for value in [
        region.top_left.row,
        region.top_left.col,
        region.extents.row,
        region.extents.col,
    ] {
        let value = i32::try_from(value)
            .map_err(|_| PixKitError::InvalidInput("region coordinate exceeds i32"))?;
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}

/// Writes histogram counts as little-endian `u32` values.
pub fn write_histogram_raw<W: Write>(counts: &[u32], writer: &mut W) -> PixKitResult<()> {
    for &count in counts {
        writer.write_all(&count.to_le_bytes())?;
    }
    Ok(())
}

/// Dumps `image` to a file.
pub fn save_image_raw<P: AsRef<Path>>(path: P, image: &Image) -> PixKitResult<()> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_image_raw(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Loads a raw dump from a file.
pub fn load_image_raw<P: AsRef<Path>>(
    path: P,
    rows: usize,
    cols: usize,
    chans: usize,
    colorspace: Colorspace,
) -> PixKitResult<Image> {
    let mut reader = std::io::BufReader::new(std::fs::File::open(path)?);
    read_image_raw(&mut reader, rows, cols, chans, colorspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RowCol;

    #[test]
    fn image_round_trip_preserves_bytes() {
        let bytes: Vec<u8> = (0..24).map(|i| (i * 11) as u8).collect();
        let img = Image::from_index_bytes(&bytes, 2, 4, 3, Colorspace::Bgr).unwrap();

        let mut dump = Vec::new();
        write_image_raw(&img, &mut dump).unwrap();
        assert_eq!(dump, bytes);

        let back = read_image_raw(&mut dump.as_slice(), 2, 4, 3, Colorspace::Bgr).unwrap();
        assert_eq!(back.as_slice(), img.as_slice());
    }

    #[test]
    fn read_rejects_short_input() {
        let bytes = [0u8; 5];
        let err = read_image_raw(&mut bytes.as_slice(), 2, 2, 2, Colorspace::Bgr)
            .err()
            .unwrap();
        assert!(matches!(err, PixKitError::Io { .. }));
    }

    #[test]
    fn region_dump_is_four_le_ints() {
        let region = Region::new(RowCol::new(1, 2), RowCol::new(3, 4));
        let mut dump = Vec::new();
        write_region_raw(region, &mut dump).unwrap();
        assert_eq!(
            dump,
            [1u8, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 4, 0, 0, 0]
        );
    }

    #[test]
    fn histogram_dump_is_le_u32s() {
        let mut dump = Vec::new();
        write_histogram_raw(&[1, 0x01020304], &mut dump).unwrap();
        assert_eq!(dump, [1u8, 0, 0, 0, 4, 3, 2, 1]);
    }
}
