//! Core types for reference-scaled object measurement.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete edge detector or image type: outlines are plain
//! `nalgebra` integer points and everything else is derived from them.

mod logger;
mod measurement;
mod region;
mod threshold;

pub use measurement::{Calibration, Measurement};
pub use region::{polygon_area, BoundingBox, Region};
pub use threshold::{threshold_grid, ThresholdPair};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
