//! JSON configuration and report helpers for batch runs.

use pothole_measure_contours::SelectorParams;
use pothole_measure_core::{Calibration, Measurement};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum ConfigIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn default_ref_size() -> f64 {
    1.0
}

/// Everything one batch run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Physical width of the reference object.
    #[serde(default = "default_ref_size")]
    pub ref_length: f64,
    /// Physical height of the reference object.
    #[serde(default = "default_ref_size")]
    pub ref_height: f64,
    #[serde(default)]
    pub selector: SelectorParams,
    /// Where to write the JSON report, if anywhere.
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

impl BatchConfig {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        calibration: Calibration,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ref_length: calibration.ref_length,
            ref_height: calibration.ref_height,
            selector: SelectorParams::default(),
            report_path: None,
        }
    }

    #[inline]
    pub fn calibration(&self) -> Calibration {
        Calibration::new(self.ref_length, self.ref_height)
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// An image that was listed but could not be measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchFailure {
    pub filename: String,
    pub error: String,
}

/// Outcome of a batch run, in processing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub calibration: Calibration,
    pub measurements: Vec<Measurement>,
    #[serde(default)]
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Empty report for the given config.
    pub fn new(cfg: &BatchConfig) -> Self {
        Self {
            input_dir: cfg.input_dir.clone(),
            output_dir: cfg.output_dir.clone(),
            calibration: cfg.calibration(),
            measurements: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// `(filename, (width, height, ref_height))` for every measured image.
    pub fn results(&self) -> Vec<(String, (f64, f64, f64))> {
        self.measurements
            .iter()
            .map(|m| (m.filename.clone(), m.dimensions()))
            .collect()
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg: BatchConfig =
            serde_json::from_str(r#"{ "input_dir": "in", "output_dir": "out" }"#).expect("parse");
        assert_eq!(cfg.calibration(), Calibration::new(1.0, 1.0));
        assert_eq!(cfg.selector, SelectorParams::default());
        assert!(cfg.report_path.is_none());
    }

    #[test]
    fn selector_overrides_are_partial() {
        let cfg: BatchConfig = serde_json::from_str(
            r#"{
                "input_dir": "in",
                "output_dir": "out",
                "ref_length": 21.0,
                "selector": { "max_area": 20000.0 }
            }"#,
        )
        .expect("parse");
        assert_eq!(cfg.ref_length, 21.0);
        assert_eq!(cfg.ref_height, 1.0);
        assert_eq!(cfg.selector.max_area, 20000.0);
        assert_eq!(cfg.selector.min_area, 100.0);
    }

    #[test]
    fn report_floats_survive_a_json_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = BatchConfig::new("in", "out", Calibration::new(2.0, 5.0));
        let mut report = BatchReport::new(&cfg);
        report.measurements.push(Measurement {
            filename: "scene.png".to_string(),
            width: 62.0 / 32.0 * 2.0,
            height: 9.761904761904761,
            ref_height: 5.0,
        });
        let path = dir.path().join("report.json");
        report.write_json(&path).expect("write");

        let loaded = BatchReport::load_json(&path).expect("load");
        assert_eq!(loaded, report);
        assert_eq!(
            loaded.measurements[0].height.to_bits(),
            9.761904761904761f64.to_bits()
        );
    }

    #[test]
    fn results_keep_processing_order() {
        let cfg = BatchConfig::new("in", "out", Calibration::new(1.0, 3.0));
        let mut report = BatchReport::new(&cfg);
        for (name, w) in [("b.png", 2.0), ("a.jpg", 4.0)] {
            report.measurements.push(Measurement {
                filename: name.to_string(),
                width: w,
                height: 1.0,
                ref_height: 3.0,
            });
        }
        assert_eq!(
            report.results(),
            vec![
                ("b.png".to_string(), (2.0, 1.0, 3.0)),
                ("a.jpg".to_string(), (4.0, 1.0, 3.0)),
            ]
        );
    }
}
