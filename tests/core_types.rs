use pixkit::{
    index_to_sample, sample_to_index, Colorspace, Image, Kernel, PixKitError, Region, RowCol,
    Sample,
};

#[test]
fn image_rejects_invalid_dimensions() {
    let err = Image::new(0, 4, 1, Colorspace::Gray).err().unwrap();
    assert_eq!(
        err,
        PixKitError::InvalidDimensions {
            rows: 0,
            cols: 4,
            chans: 1,
        }
    );

    let err = Image::from_vec(vec![0; 5], 2, 3, 1, Colorspace::Gray)
        .err()
        .unwrap();
    assert_eq!(err, PixKitError::BufferTooSmall { needed: 6, got: 5 });
}

#[test]
fn resize_restores_storage_invariant() {
    let mut img = Image::new(3, 4, 2, Colorspace::Bgr).unwrap();
    for (rows, cols, chans) in [(5usize, 7usize, 1usize), (1, 1, 4), (6, 2, 3)] {
        img.resize(rows, cols, chans).unwrap();
        assert_eq!(img.as_slice().len(), rows * cols * chans);
        assert_eq!(img.row_stride(), cols * chans);
        assert_eq!(img.col_stride(), chans);
    }
}

#[test]
fn sample_codec_round_trips_every_value() {
    for raw in 0..=u8::MAX {
        assert_eq!(sample_to_index(index_to_sample(raw)), raw);
    }
    for value in Sample::MIN..=Sample::MAX {
        assert_eq!(index_to_sample(sample_to_index(value)), value);
    }
}

#[test]
fn crop_matches_reference_values() {
    let data: Vec<Sample> = (0..16).collect();
    let mut img = Image::from_vec(data, 4, 4, 1, Colorspace::Gray).unwrap();
    img.crop(Region::new(RowCol::new(1, 1), RowCol::new(2, 2)))
        .unwrap();
    assert_eq!(img.as_slice(), &[5, 6, 9, 10]);
}

#[test]
fn invalid_region_is_a_typed_error() {
    let mut img = Image::new(4, 4, 1, Colorspace::Gray).unwrap();
    let before = img.as_slice().to_vec();
    let err = img
        .crop(Region::new(RowCol::new(1, 1), RowCol::new(4, 4)))
        .err()
        .unwrap();
    assert!(matches!(err, PixKitError::InvalidRegion { .. }));
    assert_eq!(img.as_slice(), before.as_slice());
}

#[test]
fn kernel_storage_covers_output_channels() {
    let mut kernel = Kernel::new(3, 3, 1, 2).unwrap();
    assert_eq!(kernel.as_slice().len(), 18);
    assert_eq!(kernel.output_chan_stride(), 9);

    kernel.resize(5, 5, 3, 1).unwrap();
    assert_eq!(kernel.as_slice().len(), 75);
    assert_eq!(kernel.row_stride(), 15);
    assert_eq!(kernel.output_chan_stride(), 75);
}

#[test]
fn gray_fill_color_uses_bgr_weights() {
    let mut img = Image::new(1, 1, 1, Colorspace::Gray).unwrap();
    // Pure green in index space: 0.587 * 255 = 149.685 -> 150.
    img.vertical_pad([0, 255, 0], 1, 0).unwrap();
    assert_eq!(sample_to_index(img.sample(0, 0, 0).unwrap()), 150);
}
