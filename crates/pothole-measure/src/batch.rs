//! Folder-level batch driver.

use crate::io::{BatchConfig, BatchFailure, BatchReport};
use crate::measure::measure_image;
use log::{debug, info, warn};
use pothole_measure_core::Calibration;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Prefix of every annotated output file name.
pub const OUTPUT_PREFIX: &str = "processed_";

/// Recognized file name endings (case-sensitive).
pub const IMAGE_EXTENSIONS: [&str; 2] = [".jpg", ".png"];

/// Errors that stop a whole batch.
#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    #[error("couldn't create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("couldn't list input directory {}: {source}", .path.display())]
    ListInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whether a file name ends with one of [`IMAGE_EXTENSIONS`].
pub fn is_supported_image(name: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Annotated output name for an input file name.
pub fn output_file_name(name: &str) -> String {
    format!("{OUTPUT_PREFIX}{name}")
}

/// Measure every `.jpg`/`.png` file of `input_dir`, writing annotated copies
/// into `output_dir` (created if needed).
///
/// Images that cannot be measured are logged and left out of the result.
pub fn process_images(
    input_dir: impl AsRef<Path>,
    ref_length: f64,
    ref_height: f64,
    output_dir: impl AsRef<Path>,
) -> Result<Vec<(String, (f64, f64, f64))>, BatchError> {
    let cfg = BatchConfig::new(
        input_dir.as_ref(),
        output_dir.as_ref(),
        Calibration::new(ref_length, ref_height),
    );
    Ok(process_batch(&cfg)?.results())
}

/// Run a batch described by `cfg`.
///
/// Files are visited in directory listing order. Per-image failures end up
/// in [`BatchReport::failures`]; only directory-level problems are errors.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(cfg), fields(input = %cfg.input_dir.display()))
)]
pub fn process_batch(cfg: &BatchConfig) -> Result<BatchReport, BatchError> {
    fs::create_dir_all(&cfg.output_dir).map_err(|source| BatchError::CreateOutputDir {
        path: cfg.output_dir.clone(),
        source,
    })?;

    let list_err = |source| BatchError::ListInput {
        path: cfg.input_dir.clone(),
        source,
    };
    let entries = fs::read_dir(&cfg.input_dir).map_err(list_err)?;

    let calibration = cfg.calibration();
    let mut report = BatchReport::new(cfg);

    for entry in entries {
        let entry = entry.map_err(list_err)?;
        let Some(filename) = entry.file_name().to_str().map(str::to_owned) else {
            debug!("skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if !is_supported_image(&filename) {
            continue;
        }
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            debug!("skipping directory {filename}");
            continue;
        }

        let image_path = cfg.input_dir.join(&filename);
        let output_path = cfg.output_dir.join(output_file_name(&filename));

        match measure_image(&image_path, &calibration, &cfg.selector, &output_path) {
            Ok(measured) => report.measurements.push(measured.into_measurement(filename)),
            Err(err) => {
                warn!("{filename}: {err}");
                report.failures.push(BatchFailure {
                    filename,
                    error: err.to_string(),
                });
            }
        }
    }

    info!(
        "batch done: {} measured, {} skipped",
        report.measurements.len(),
        report.failures.len()
    );
    Ok(report)
}
