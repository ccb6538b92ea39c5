//! Classic uncompressed Windows bitmap encoder and decoder.
//!
//! Layout: 14-byte file header (`BM` signature, file size, reserved, data
//! offset) + 40-byte info header + pixel rows stored bottom-up, each padded
//! to a 4-byte boundary. Field offsets are fixed and must match the classic
//! layout so standard viewers can open the output. Internally rows are kept
//! top-down and samples signed; the codec remaps on the way through.

use std::io::Write;
use std::path::Path;

use crate::image::{Colorspace, Image};
use crate::sample::{index_to_sample, sample_to_index};
use crate::trace::{trace_event, trace_span};
use crate::util::{PixKitError, PixKitResult};

const DATA_OFFSET_OFFSET: usize = 0x000A;
const WIDTH_OFFSET: usize = 0x0012;
const HEIGHT_OFFSET: usize = 0x0016;
const BITS_PER_PIXEL_OFFSET: usize = 0x001C;
const HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
/// 300 dpi in pixels per meter.
const RESOLUTION: u32 = 11811;

/// Decodes a bitmap byte stream into an [`Image`].
///
/// Channel count is derived from bits-per-pixel; 8 maps to
/// [`Colorspace::Gray`], 24 to [`Colorspace::Bgr`] and 32 to
/// [`Colorspace::Bgra`]. Rows are flipped to top-down order and every byte
/// is remapped to the signed sample representation.
pub fn decode(data: &[u8]) -> PixKitResult<Image> {
    let _guard = trace_span!("bmp_decode", len = data.len()).entered();

    if data.len() < (HEADER_SIZE + INFO_HEADER_SIZE) as usize {
        return Err(PixKitError::InvalidBitmap {
            reason: "truncated header",
        });
    }
    if &data[..2] != b"BM" {
        return Err(PixKitError::InvalidBitmap {
            reason: "missing BM signature",
        });
    }

    let data_offset = read_u32(data, DATA_OFFSET_OFFSET) as usize;
    let width = read_i32(data, WIDTH_OFFSET);
    let height = read_i32(data, HEIGHT_OFFSET);
    let bits_per_pixel = read_u16(data, BITS_PER_PIXEL_OFFSET);
    if width <= 0 || height <= 0 {
        return Err(PixKitError::InvalidBitmap {
            reason: "non-positive dimensions",
        });
    }

    let chans = usize::from(bits_per_pixel) / 8;
    let colorspace = match (bits_per_pixel % 8, chans) {
        (0, 1) => Colorspace::Gray,
        (0, 3) => Colorspace::Bgr,
        (0, 4) => Colorspace::Bgra,
        _ => return Err(PixKitError::UnsupportedChannels { chans }),
    };

    let rows = height as usize;
    let cols = width as usize;
    let mut image = Image::new(rows, cols, chans, colorspace)?;
    let unpadded_row = cols * chans;
    let padded_row = pad_to_four(unpadded_row);

    let needed = data_offset + padded_row * (rows - 1) + unpadded_row;
    if data.len() < needed {
        return Err(PixKitError::InvalidBitmap {
            reason: "truncated pixel data",
        });
    }

    // File rows run bottom-up; store them top-down.
    for i in 0..rows {
        let src = data_offset + i * padded_row;
        let dst = image
            .row_mut(rows - 1 - i)
            .expect("row index within freshly sized image");
        for (d, &b) in dst.iter_mut().zip(&data[src..src + unpadded_row]) {
            *d = index_to_sample(b);
        }
    }

    trace_event!("bmp_decoded", rows = rows, cols = cols, chans = chans);
    Ok(image)
}

/// Encodes `image` as an uncompressed bitmap.
///
/// Single-channel images are written as three identical channels since the
/// format has no 8-bit uncompressed flavor without a palette; 2-channel and
/// more-than-4-channel images are rejected before any byte reaches the
/// writer. The input image is not modified.
pub fn encode<W: Write>(image: &Image, writer: &mut W) -> PixKitResult<()> {
    let chans = image.chans();
    if !matches!(chans, 1 | 3 | 4) {
        return Err(PixKitError::UnsupportedChannels { chans });
    }
    let _guard = trace_span!(
        "bmp_encode",
        rows = image.rows(),
        cols = image.cols(),
        chans = chans
    )
    .entered();

    let out_chans = if chans == 1 { 3 } else { chans };
    let rows = image.rows();
    let cols = image.cols();
    let unpadded_row = cols * out_chans;
    let padded_row = pad_to_four(unpadded_row);
    let data_offset = HEADER_SIZE + INFO_HEADER_SIZE;

    // File header.
    writer.write_all(b"BM")?;
    write_u32(writer, data_offset + (padded_row * rows) as u32)?;
    write_u32(writer, 0)?; // reserved
    write_u32(writer, data_offset)?;

    // Info header.
    write_u32(writer, INFO_HEADER_SIZE)?;
    write_i32(writer, cols as i32)?;
    write_i32(writer, rows as i32)?;
    write_u16(writer, 1)?; // planes
    write_u16(writer, (out_chans * 8) as u16)?;
    write_u32(writer, 0)?; // no compression
    write_u32(writer, (unpadded_row * rows) as u32)?;
    write_u32(writer, RESOLUTION)?;
    write_u32(writer, RESOLUTION)?;
    write_u32(writer, 0)?; // color table size
    write_u32(writer, 0)?; // important colors

    // Pixel rows, bottom-up, unsigned, padded to 4 bytes.
    let mut file_row = vec![0u8; padded_row];
    for i in (0..rows).rev() {
        let row = image.row(i).expect("row index within image");
        if chans == 1 {
            for (p, &s) in row.iter().enumerate() {
                let b = sample_to_index(s);
                file_row[3 * p] = b;
                file_row[3 * p + 1] = b;
                file_row[3 * p + 2] = b;
            }
        } else {
            for (d, &s) in file_row.iter_mut().zip(row) {
                *d = sample_to_index(s);
            }
        }
        writer.write_all(&file_row)?;
    }
    Ok(())
}

/// Reads a bitmap file from disk.
pub fn read_bmp<P: AsRef<Path>>(path: P) -> PixKitResult<Image> {
    let data = std::fs::read(path)?;
    decode(&data)
}

/// Writes `image` to disk as a bitmap file.
pub fn write_bmp<P: AsRef<Path>>(path: P, image: &Image) -> PixKitResult<()> {
    let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
    encode(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn pad_to_four(len: usize) -> usize {
    len + (4 - len % 4) % 4
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_i32(data: &[u8], offset: usize) -> i32 {
    read_u32(data, offset) as i32
}

fn write_u16<W: Write>(writer: &mut W, value: u16) -> std::io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

fn write_u32<W: Write>(writer: &mut W, value: u32) -> std::io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

fn write_i32<W: Write>(writer: &mut W, value: i32) -> std::io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}
