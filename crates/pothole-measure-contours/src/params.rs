use pothole_measure_core::{threshold_grid, ThresholdPair};
use serde::{Deserialize, Serialize};

/// Parameters of the contour selector.
///
/// Both bands are exclusive on both ends.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectorParams {
    /// Low hysteresis thresholds, swept as the outer loop.
    pub low_thresholds: Vec<u16>,
    /// High hysteresis thresholds, swept as the inner loop.
    pub high_thresholds: Vec<u16>,
    /// Minimal region area in pixels².
    pub min_area: f64,
    /// Maximal region area in pixels².
    pub max_area: f64,
    /// Minimal bounding-box `width / height`.
    pub min_aspect_ratio: f64,
    /// Maximal bounding-box `width / height`.
    pub max_aspect_ratio: f64,
}

impl Default for SelectorParams {
    fn default() -> Self {
        Self {
            low_thresholds: vec![50, 100, 150, 200],
            high_thresholds: vec![100, 150, 200, 250],
            min_area: 100.0,
            max_area: 5000.0,
            min_aspect_ratio: 0.5,
            max_aspect_ratio: 2.0,
        }
    }
}

impl SelectorParams {
    /// Threshold pairs in sweep order.
    pub fn threshold_pairs(&self) -> Vec<ThresholdPair> {
        threshold_grid(&self.low_thresholds, &self.high_thresholds)
    }
}
