//! Contour selection by threshold sweep.
//!
//! Pipeline, repeated for every threshold pair of a fixed grid:
//! - Canny edge map (`imageproc::edges::canny`),
//! - external outlines only, compressed to polygon vertices,
//! - area band + bounding-box aspect band filter.
//!
//! The output is the filtered list of the pair that produced the single
//! largest accepted region, cut right after that region.

mod filter;
mod outline;
mod params;
mod sweep;

pub use filter::passes_filter;
pub use outline::{extract_external_outlines, simplify_outline};
pub use params::SelectorParams;
pub use sweep::{select_best_regions, select_best_regions_with, SweepState};

pub use pothole_measure_core::{BoundingBox, Region, ThresholdPair};
