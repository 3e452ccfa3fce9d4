//! Measure an object in a photo against a reference object of known size.
//!
//! This crate provides:
//! - re-exports of the core types and the contour selector,
//! - the per-image dimension calculator ([`calculate_dimensions`],
//!   [`measure_image`]) which also writes an annotated copy of the image,
//! - the folder-level batch driver ([`process_images`], [`process_batch`]),
//! - JSON config/report helpers and the `pothole-measure` CLI (feature `cli`).
//!
//! ## Quickstart
//!
//! ```no_run
//! use pothole_measure::process_images;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let results = process_images("photos", 1.0, 1.0, "photos/labelled")?;
//! for (filename, (width, height, _ref_height)) in &results {
//!     println!("{filename}: {width:.2} x {height:.2}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## How an image is measured
//!
//! The contour selector sweeps 16 Canny threshold pairs and keeps the regions
//! of the pair that produced the single largest region passing the area and
//! aspect-ratio bands. Of those regions the largest is taken as the object
//! and the second largest as the reference. No other check is made that the
//! second region really is the reference marker.
//!
//! ## API map
//! - `pothole_measure::core`: regions, bounding boxes, measurements, logging.
//! - `pothole_measure::contours`: threshold sweep and region filter.
//! - [`measure_image`] / [`calculate_dimensions`]: one image.
//! - [`process_batch`] / [`process_images`]: one folder.

pub use pothole_measure_contours as contours;
pub use pothole_measure_core as core;

mod batch;
mod io;
mod measure;

pub use batch::{
    is_supported_image, output_file_name, process_batch, process_images, BatchError,
    IMAGE_EXTENSIONS, OUTPUT_PREFIX,
};
pub use io::{BatchConfig, BatchFailure, BatchReport, ConfigIoError};
pub use measure::{
    calculate_dimensions, draw_overlay, measure_image, pick_object_and_reference,
    scale_to_reference, ImageMeasurement, MeasureError, OBJECT_COLOR, REFERENCE_COLOR,
    STROKE_WIDTH,
};

pub use pothole_measure_contours::SelectorParams;
pub use pothole_measure_core::{BoundingBox, Calibration, Measurement, Region};
