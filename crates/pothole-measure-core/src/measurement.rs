use serde::{Deserialize, Serialize};

/// Physical size of the reference object, constant for a whole batch.
///
/// Any consistent unit works; measurements come out in the same unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub ref_length: f64,
    pub ref_height: f64,
}

impl Calibration {
    pub fn new(ref_length: f64, ref_height: f64) -> Self {
        Self {
            ref_length,
            ref_height,
        }
    }
}

/// Physical dimensions computed for one image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub filename: String,
    pub width: f64,
    pub height: f64,
    /// Calibration reference height, passed through unchanged.
    pub ref_height: f64,
}

impl Measurement {
    /// `(width, height, ref_height)` in the order the batch result uses.
    pub fn dimensions(&self) -> (f64, f64, f64) {
        (self.width, self.height, self.ref_height)
    }
}
