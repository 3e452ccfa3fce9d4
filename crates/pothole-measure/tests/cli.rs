mod common;

use assert_cmd::Command;
use pothole_measure::{BatchConfig, BatchReport, Calibration};
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("pothole-measure").expect("binary")
}

#[test]
fn prints_dimensions_for_each_image() {
    let input = tempdir().expect("tempdir");
    common::write_scene(input.path(), "road.png", &common::reference_and_object());
    let output = input.path().join("out");

    cli()
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(&output)
        .args(["--log-level", "warn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pothole dimensions for each image:"))
        .stdout(predicate::str::contains("road.png"));

    assert!(output.join("processed_road.png").is_file());
}

#[test]
fn writes_report_from_config_file() {
    let input = tempdir().expect("tempdir");
    common::write_scene(input.path(), "road.png", &common::reference_and_object());
    let work = tempdir().expect("tempdir");
    let report_path = work.path().join("report.json");

    let mut cfg = BatchConfig::new(
        input.path(),
        work.path().join("out"),
        Calibration::new(1.0, 1.0),
    );
    cfg.report_path = Some(report_path.clone());
    let cfg_path = work.path().join("config.json");
    cfg.write_json(&cfg_path).expect("write config");

    cli()
        .arg("--config")
        .arg(&cfg_path)
        .args(["--ref-height", "3.0"])
        .assert()
        .success();

    let report = BatchReport::load_json(&report_path).expect("load report");
    assert_eq!(report.calibration, Calibration::new(1.0, 3.0));
    assert_eq!(report.measurements.len(), 1);
    assert_eq!(report.measurements[0].ref_height, 3.0);
}

#[test]
fn missing_input_dir_fails() {
    let work = tempdir().expect("tempdir");
    cli()
        .arg("--input")
        .arg(work.path().join("absent"))
        .arg("--output")
        .arg(work.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("couldn't list input directory"));
}

#[test]
fn input_flag_is_required_without_config() {
    cli()
        .args(["--output", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input is required"));
}
