use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use nalgebra::Point2;
use pothole_measure_core::{BoundingBox, Region};

/// Outline and box color of the measured object.
pub const OBJECT_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
/// Outline and box color of the reference object.
pub const REFERENCE_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
/// Stroke width in pixels for every overlay primitive.
pub const STROKE_WIDTH: u32 = 2;

/// Draw both outlines, then both bounding boxes, in place.
pub fn draw_overlay(canvas: &mut RgbImage, object: &Region, reference: &Region) {
    draw_outline(canvas, object.outline(), OBJECT_COLOR);
    draw_outline(canvas, reference.outline(), REFERENCE_COLOR);
    draw_bbox(canvas, object.bbox(), OBJECT_COLOR);
    draw_bbox(canvas, reference.bbox(), REFERENCE_COLOR);
}

fn draw_outline(canvas: &mut RgbImage, outline: &[Point2<i32>], color: Rgb<u8>) {
    let n = outline.len();
    if n == 0 {
        return;
    }
    for i in 0..n {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        for d in 0..STROKE_WIDTH as i32 {
            let d = d as f32;
            draw_line_segment_mut(
                canvas,
                (a.x as f32 + d, a.y as f32),
                (b.x as f32 + d, b.y as f32),
                color,
            );
            draw_line_segment_mut(
                canvas,
                (a.x as f32, a.y as f32 + d),
                (b.x as f32, b.y as f32 + d),
                color,
            );
        }
    }
}

// The rectangle covers (x, y)..=(x + w, y + h); the stroke grows inwards.
fn draw_bbox(canvas: &mut RgbImage, bbox: BoundingBox, color: Rgb<u8>) {
    let far = bbox.far_corner();
    for d in 0..STROKE_WIDTH as i32 {
        let w = far.x - bbox.x + 1 - 2 * d;
        let h = far.y - bbox.y + 1 - 2 * d;
        if w <= 0 || h <= 0 {
            break;
        }
        let rect = Rect::at(bbox.x + d, bbox.y + d).of_size(w as u32, h as u32);
        draw_hollow_rect_mut(canvas, rect, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: i32, y: i32, side: i32) -> Region {
        Region::from_outline(vec![
            Point2::new(x, y),
            Point2::new(x, y + side),
            Point2::new(x + side, y + side),
            Point2::new(x + side, y),
        ])
        .expect("non-empty")
    }

    #[test]
    fn overlay_strokes_outline_and_box() {
        let mut canvas = RgbImage::new(100, 60);
        let object = square(10, 10, 30);
        let reference = square(60, 20, 15);
        draw_overlay(&mut canvas, &object, &reference);

        // outline vertex and its 2 px stroke
        assert_eq!(*canvas.get_pixel(10, 10), OBJECT_COLOR);
        assert_eq!(*canvas.get_pixel(11, 20), OBJECT_COLOR);
        assert_eq!(*canvas.get_pixel(60, 25), REFERENCE_COLOR);
        assert_eq!(*canvas.get_pixel(61, 25), REFERENCE_COLOR);

        // box far corner is one past the last outline pixel (bbox 31 x 31)
        assert_eq!(*canvas.get_pixel(41, 41), OBJECT_COLOR);
        assert_eq!(*canvas.get_pixel(40, 41), OBJECT_COLOR);

        // interior and far background untouched
        assert_eq!(*canvas.get_pixel(25, 25), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(90, 5), Rgb([0, 0, 0]));
    }

    #[test]
    fn overlay_clips_at_image_border() {
        let mut canvas = RgbImage::new(20, 20);
        let object = square(5, 5, 30);
        let reference = square(-3, -3, 4);
        draw_overlay(&mut canvas, &object, &reference);
        assert_eq!(canvas.dimensions(), (20, 20));
        assert_eq!(*canvas.get_pixel(5, 5), OBJECT_COLOR);
    }
}
