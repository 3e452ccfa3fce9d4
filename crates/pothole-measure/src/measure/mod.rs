//! Per-image dimension calculator.
//!
//! Load, select regions, scale the largest region by the second largest,
//! draw the overlay and save the annotated copy.

mod error;
mod overlay;
mod pipeline;

pub use error::MeasureError;
pub use overlay::{draw_overlay, OBJECT_COLOR, REFERENCE_COLOR, STROKE_WIDTH};
pub use pipeline::{
    calculate_dimensions, measure_image, pick_object_and_reference, scale_to_reference,
    ImageMeasurement,
};
