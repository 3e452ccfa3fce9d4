use crate::{extract_external_outlines, passes_filter, SelectorParams};
use image::GrayImage;
use imageproc::edges::canny;
use log::{debug, trace};
use pothole_measure_core::Region;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Best-so-far selection while sweeping threshold pairs.
#[derive(Clone, Debug, Default)]
pub struct SweepState {
    best: Vec<Region>,
    max_area: f64,
}

impl SweepState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer the current filtered list, whose last element was just accepted.
    ///
    /// If that element is strictly larger than every region seen so far, the
    /// whole list (as built up to now) becomes the new best set. Returns
    /// whether a snapshot was taken.
    pub fn observe(&mut self, filtered: &[Region]) -> bool {
        let Some(latest) = filtered.last() else {
            return false;
        };
        if latest.area() > self.max_area {
            self.max_area = latest.area();
            self.best = filtered.to_vec();
            return true;
        }
        false
    }

    /// Largest accepted area seen so far (0 before the first acceptance).
    #[inline]
    pub fn max_area(&self) -> f64 {
        self.max_area
    }

    #[inline]
    pub fn best(&self) -> &[Region] {
        &self.best
    }

    pub fn into_best(self) -> Vec<Region> {
        self.best
    }
}

/// Run the threshold sweep with default parameters.
pub fn select_best_regions(gray: &GrayImage) -> Vec<Region> {
    select_best_regions_with(gray, &SelectorParams::default())
}

/// Run the threshold sweep.
///
/// Returns the filtered regions of the threshold pair that produced the
/// largest accepted region, in outline discovery order, up to and including
/// that region. The first pair (and first outline) to reach a given maximum
/// wins ties. Empty when no outline passes the filter at any pair.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(gray, params), fields(width = gray.width(), height = gray.height()))
)]
pub fn select_best_regions_with(gray: &GrayImage, params: &SelectorParams) -> Vec<Region> {
    let mut state = SweepState::new();

    for pair in params.threshold_pairs() {
        let (weak, strong) = pair.ordered();
        let edges = canny(gray, weak, strong);
        let outlines = extract_external_outlines(&edges);
        let num_outlines = outlines.len();

        let mut filtered: Vec<Region> = Vec::new();
        for outline in outlines {
            let Some(region) = Region::from_outline(outline) else {
                continue;
            };
            if !passes_filter(&region, params) {
                continue;
            }
            filtered.push(region);
            if state.observe(&filtered) {
                trace!(
                    "thresholds ({}, {}): new max area {:.1} with {} regions",
                    pair.low,
                    pair.high,
                    state.max_area(),
                    filtered.len()
                );
            }
        }

        debug!(
            "thresholds ({}, {}): {} outlines, {} accepted",
            pair.low,
            pair.high,
            num_outlines,
            filtered.len()
        );
    }

    state.into_best()
}
