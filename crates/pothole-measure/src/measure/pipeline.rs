use super::{draw_overlay, MeasureError};
use image::{DynamicImage, ImageReader};
use log::{debug, info};
use pothole_measure_contours::{select_best_regions_with, SelectorParams};
use pothole_measure_core::{BoundingBox, Calibration, Measurement, Region};
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Result of measuring one image, with the regions it was derived from.
#[derive(Clone, Debug)]
pub struct ImageMeasurement {
    /// Largest selected region, taken as the measured object.
    pub object: Region,
    /// Second largest selected region, taken as the reference.
    pub reference: Region,
    pub width: f64,
    pub height: f64,
    /// Calibration reference height, passed through unchanged.
    pub ref_height: f64,
}

impl ImageMeasurement {
    /// `(width, height, ref_height)`.
    pub fn dimensions(&self) -> (f64, f64, f64) {
        (self.width, self.height, self.ref_height)
    }

    pub fn into_measurement(self, filename: impl Into<String>) -> Measurement {
        Measurement {
            filename: filename.into(),
            width: self.width,
            height: self.height,
            ref_height: self.ref_height,
        }
    }
}

/// Measure one image with default selector parameters.
///
/// Returns `(object_width, object_height, ref_height)`. The third element is
/// the `ref_height` argument itself, not a measured value.
pub fn calculate_dimensions(
    image_path: impl AsRef<Path>,
    ref_length: f64,
    ref_height: f64,
    output_image_path: impl AsRef<Path>,
) -> Result<(f64, f64, f64), MeasureError> {
    let calibration = Calibration::new(ref_length, ref_height);
    let measured = measure_image(
        image_path.as_ref(),
        &calibration,
        &SelectorParams::default(),
        output_image_path.as_ref(),
    )?;
    Ok(measured.dimensions())
}

/// Measure one image and write its annotated copy to `output_image_path`.
///
/// The output format follows the output path extension; the output has the
/// pixel size of the input.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(calibration, params), fields(path = %image_path.display()))
)]
pub fn measure_image(
    image_path: &Path,
    calibration: &Calibration,
    params: &SelectorParams,
    output_image_path: &Path,
) -> Result<ImageMeasurement, MeasureError> {
    let image = load_image(image_path)?;
    let gray = image.to_luma8();

    let regions = select_best_regions_with(&gray, params);
    debug!("{}: {} regions selected", image_path.display(), regions.len());
    let (object, reference) = pick_object_and_reference(regions)?;
    let (width, height) = scale_to_reference(object.bbox(), reference.bbox(), calibration)?;

    let mut canvas = image.into_rgb8();
    draw_overlay(&mut canvas, &object, &reference);
    canvas.save(output_image_path).map_err(|source| MeasureError::Save {
        path: output_image_path.to_path_buf(),
        source,
    })?;
    info!("processed image saved as {}", output_image_path.display());

    Ok(ImageMeasurement {
        object,
        reference,
        width,
        height,
        ref_height: calibration.ref_height,
    })
}

/// Rank regions by area (descending, stable) and return `(object, reference)`.
pub fn pick_object_and_reference(regions: Vec<Region>) -> Result<(Region, Region), MeasureError> {
    let found = regions.len();
    let mut ranked = regions;
    ranked.sort_by(|a, b| b.area().total_cmp(&a.area()));

    let mut ranked = ranked.into_iter();
    match (ranked.next(), ranked.next()) {
        (Some(object), Some(reference)) => Ok((object, reference)),
        _ => Err(MeasureError::InsufficientRegions { found }),
    }
}

/// Convert the object box to physical units using the reference box.
///
/// Width and height are scaled independently:
/// `object.width * ref_length / reference.width` and
/// `object.height * ref_height / reference.height`.
pub fn scale_to_reference(
    object: BoundingBox,
    reference: BoundingBox,
    calibration: &Calibration,
) -> Result<(f64, f64), MeasureError> {
    if reference.width == 0 || reference.height == 0 {
        return Err(MeasureError::DegenerateReference {
            width: reference.width,
            height: reference.height,
        });
    }
    let scale_w = calibration.ref_length / reference.width as f64;
    let scale_h = calibration.ref_height / reference.height as f64;
    Ok((object.width as f64 * scale_w, object.height as f64 * scale_h))
}

fn load_image(path: &Path) -> Result<DynamicImage, MeasureError> {
    let load = || -> Result<DynamicImage, image::ImageError> {
        Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
    };
    load().map_err(|source| MeasureError::Load {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn bbox(width: u32, height: u32) -> BoundingBox {
        BoundingBox {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    fn rect_region(x: i32, y: i32, w: i32, h: i32) -> Region {
        Region::from_outline(vec![
            Point2::new(x, y),
            Point2::new(x, y + h),
            Point2::new(x + w, y + h),
            Point2::new(x + w, y),
        ])
        .expect("non-empty")
    }

    #[test]
    fn scales_each_axis_by_the_reference() {
        let calibration = Calibration::new(2.5, 4.0);
        let (w, h) = scale_to_reference(bbox(75, 36), bbox(25, 48), &calibration).expect("scale");
        assert_relative_eq!(w, 75.0 / 25.0 * 2.5);
        assert_relative_eq!(h, 36.0 / 48.0 * 4.0);
    }

    #[test]
    fn degenerate_reference_is_an_error() {
        let calibration = Calibration::new(1.0, 1.0);
        let err = scale_to_reference(bbox(10, 10), bbox(0, 5), &calibration).unwrap_err();
        assert!(matches!(
            err,
            MeasureError::DegenerateReference {
                width: 0,
                height: 5
            }
        ));
    }

    #[test]
    fn largest_is_object_second_is_reference() {
        let regions = vec![
            rect_region(0, 0, 20, 20),
            rect_region(50, 0, 40, 40),
            rect_region(0, 50, 30, 30),
        ];
        let (object, reference) = pick_object_and_reference(regions).expect("two regions");
        assert_eq!(object.area(), 1600.0);
        assert_eq!(reference.area(), 900.0);
    }

    #[test]
    fn fewer_than_two_regions_is_insufficient() {
        let err = pick_object_and_reference(vec![rect_region(0, 0, 20, 20)]).unwrap_err();
        assert!(matches!(err, MeasureError::InsufficientRegions { found: 1 }));
        let err = pick_object_and_reference(Vec::new()).unwrap_err();
        assert!(matches!(err, MeasureError::InsufficientRegions { found: 0 }));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_image(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, MeasureError::Load { .. }));
        assert!(err.to_string().starts_with("couldn't load image at"));
    }
}
