#![cfg(feature = "rayon")]

use pixkit::{filter, filter_par, gaussian_blur, sobel, Colorspace, Image, Plan, Rescale, RowCol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_image(rows: usize, cols: usize, chans: usize, seed: u64) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    let bytes: Vec<u8> = (0..rows * cols * chans)
        .map(|_| rng.random_range(0..=255))
        .collect();
    Image::from_index_bytes(&bytes, rows, cols, chans, Colorspace::Bgr).unwrap()
}

#[test]
fn parallel_filter_matches_scalar_exactly() {
    let input = random_image(64, 48, 3, 7);
    let kernel = gaussian_blur(5, 1.2, 3).unwrap();
    let plan = Plan {
        rescale: Some(Rescale {
            scale: 1.0 / 128.0,
            bias: 0.0,
        }),
        ..Plan::default()
    };

    let mut sequential = Image::new(64, 48, 1, Colorspace::Gray).unwrap();
    let mut parallel = Image::new(64, 48, 1, Colorspace::Gray).unwrap();
    filter(&mut sequential, &input, &kernel, &plan).unwrap();
    filter_par(&mut parallel, &input, &kernel, &plan).unwrap();
    assert_eq!(sequential.as_slice(), parallel.as_slice());
}

#[test]
fn parallel_filter_matches_scalar_with_strides_and_padding() {
    let input = random_image(33, 37, 1, 13);
    let kernel = sobel(1).unwrap();
    let plan = Plan {
        top_left: RowCol::new(1, 1),
        strides: RowCol::new(3, 3),
        pad_val: 17,
        rescale: Some(Rescale {
            scale: 0.25,
            bias: 1.0,
        }),
    };

    let mut sequential = Image::new(11, 12, 2, Colorspace::Gray).unwrap();
    let mut parallel = Image::new(11, 12, 2, Colorspace::Gray).unwrap();
    filter(&mut sequential, &input, &kernel, &plan).unwrap();
    filter_par(&mut parallel, &input, &kernel, &plan).unwrap();
    assert_eq!(sequential.as_slice(), parallel.as_slice());
}
