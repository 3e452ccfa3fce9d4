//! Outline extraction from binary edge maps.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use nalgebra::Point2;

/// Extract top-level outer outlines from a binary edge map.
///
/// Any non-zero pixel is foreground. Hole borders and outlines nested inside
/// another outline are dropped. Each outline is returned already compressed
/// by [`simplify_outline`], in discovery (raster) order.
pub fn extract_external_outlines(edges: &GrayImage) -> Vec<Vec<Point2<i32>>> {
    find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .map(|c| {
            let points: Vec<Point2<i32>> =
                c.points.iter().map(|p| Point2::new(p.x, p.y)).collect();
            simplify_outline(&points)
        })
        .collect()
}

/// Drop vertices lying in the middle of a straight run.
///
/// The outline is treated as closed. Repeated consecutive points collapse
/// into one, then a vertex is removed when the incoming and outgoing steps
/// point the same way. Turning points and reversals are kept, so the
/// enclosed area is unchanged.
pub fn simplify_outline(points: &[Point2<i32>]) -> Vec<Point2<i32>> {
    let mut dedup: Vec<Point2<i32>> = Vec::with_capacity(points.len());
    for &p in points {
        if dedup.last() != Some(&p) {
            dedup.push(p);
        }
    }
    while dedup.len() > 1 && dedup.first() == dedup.last() {
        dedup.pop();
    }

    let n = dedup.len();
    if n < 3 {
        return dedup;
    }

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let prev = dedup[(i + n - 1) % n];
        let cur = dedup[i];
        let next = dedup[(i + 1) % n];

        let a = cur - prev;
        let b = next - cur;
        let cross = a.x * b.y - a.y * b.x;
        let dot = a.x * b.x + a.y * b.y;
        if cross == 0 && dot > 0 {
            continue;
        }
        out.push(cur);
    }

    if out.is_empty() {
        return dedup;
    }
    out
}
