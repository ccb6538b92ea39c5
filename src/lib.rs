//! PixKit is an embedded-friendly image processing core: strided in-memory
//! pixel buffers plus pixel-level algorithms.
//!
//! The crate owns no tasks, threads or global state; callers hand in
//! [`Image`] and [`Kernel`] buffers and every operation runs synchronously
//! to completion. Samples are stored signed for arithmetic and remapped to
//! unsigned bytes at the file and collaborator boundaries. Optional
//! features: `rayon` (row-parallel filtering), `image-io` (PNG/JPEG loading
//! via the `image` crate) and `tracing` (span/event emission).

pub mod analyze;
pub mod codec;
pub mod color;
pub mod filter;
pub mod image;
pub mod kernel;
pub mod render;
pub mod sample;
mod trace;
pub mod util;

pub use analyze::{bounding_box, find_contour};
pub use codec::debayer::{debayer_stream, Method};
pub use filter::{filter, Plan, Rescale};
pub use image::{Colorspace, Dimension, Image, Region, RowCol};
pub use kernel::generators::{gaussian_blur, laplacian, sobel};
pub use kernel::Kernel;
pub use render::{draw_rect, paint};
pub use sample::{
    bankers_round, index_to_sample, round_to_odd, sample_to_index, saturating_add,
    uncollated_replication, Sample,
};
pub use util::{PixKitError, PixKitResult};

#[cfg(feature = "rayon")]
pub use filter::rayon::filter_par;
