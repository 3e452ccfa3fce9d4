use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel units.
///
/// `width`/`height` count pixels, so a single point has a 1x1 box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Smallest box enclosing every point, `None` for an empty slice.
    pub fn from_points(points: &[Point2<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            x: min_x,
            y: min_y,
            width: (max_x - min_x) as u32 + 1,
            height: (max_y - min_y) as u32 + 1,
        })
    }

    /// `width / height`, or `None` when the box has no height.
    #[inline]
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height == 0 {
            return None;
        }
        Some(self.width as f64 / self.height as f64)
    }

    /// Inclusive bottom-right corner `(x + width, y + height)`.
    ///
    /// This is one pixel past the last covered pixel, matching how the
    /// overlay rectangles are stroked.
    #[inline]
    pub fn far_corner(&self) -> Point2<i32> {
        Point2::new(self.x + self.width as i32, self.y + self.height as i32)
    }
}

/// Candidate object outline with its derived area and bounding box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    outline: Vec<Point2<i32>>,
    area: f64,
    bbox: BoundingBox,
}

impl Region {
    /// Build a region from a closed outline (last point connects to the first).
    ///
    /// Returns `None` for an empty outline.
    pub fn from_outline(outline: Vec<Point2<i32>>) -> Option<Self> {
        let bbox = BoundingBox::from_points(&outline)?;
        let area = polygon_area(&outline);
        Some(Self {
            outline,
            area,
            bbox,
        })
    }

    #[inline]
    pub fn outline(&self) -> &[Point2<i32>] {
        &self.outline
    }

    /// Enclosed polygon area in pixels².
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Bounding-box aspect ratio (`width / height`).
    #[inline]
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.bbox.aspect_ratio()
    }
}

/// Unsigned shoelace area of a closed polygon.
pub fn polygon_area(points: &[Point2<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    (twice as f64 * 0.5).abs()
}
