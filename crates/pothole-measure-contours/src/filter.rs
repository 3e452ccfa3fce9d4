use crate::SelectorParams;
use pothole_measure_core::Region;

/// Area and aspect-ratio gate applied to every outline.
///
/// Regions without height never reach the aspect division and are rejected.
pub fn passes_filter(region: &Region, params: &SelectorParams) -> bool {
    let area = region.area();
    if !(params.min_area < area && area < params.max_area) {
        return false;
    }
    match region.aspect_ratio() {
        Some(ratio) => params.min_aspect_ratio < ratio && ratio < params.max_aspect_ratio,
        None => false,
    }
}
