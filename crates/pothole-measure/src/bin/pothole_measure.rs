//! pothole-measure CLI: measure every photo in a folder against a reference.

use clap::Parser;
use log::LevelFilter;
use pothole_measure::{process_batch, BatchConfig, Calibration};
use std::path::PathBuf;
use std::process::ExitCode;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "pothole-measure")]
#[command(
    about = "Measure the largest object in each .jpg/.png photo against a reference object of known size"
)]
#[command(version)]
struct Cli {
    /// JSON batch config. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Folder with the input photos.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Folder for the annotated copies (created if missing).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Physical width of the reference object.
    #[arg(long)]
    ref_length: Option<f64>,

    /// Physical height of the reference object.
    #[arg(long)]
    ref_height: Option<f64>,

    /// Write a JSON report with every measurement and failure.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    init_logging(cli.log_level)?;

    let cfg = resolve_config(cli)?;
    let report = process_batch(&cfg)?;

    println!("Pothole dimensions for each image:");
    for (filename, (width, height, ref_height)) in report.results() {
        println!("{filename}: ({width}, {height}, {ref_height})");
    }

    if let Some(path) = &cfg.report_path {
        report.write_json(path)?;
        log::info!("report written to {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging(level: LevelFilter) -> CliResult<()> {
    pothole_measure::core::init_tracing(false, level);
    Ok(())
}

#[cfg(not(feature = "tracing"))]
fn init_logging(level: LevelFilter) -> CliResult<()> {
    pothole_measure::core::init_with_level(level)?;
    Ok(())
}

fn resolve_config(cli: Cli) -> CliResult<BatchConfig> {
    let mut cfg = match &cli.config {
        Some(path) => BatchConfig::load_json(path)?,
        None => {
            let input = cli.input.clone().ok_or("--input is required without --config")?;
            let output = cli
                .output
                .clone()
                .ok_or("--output is required without --config")?;
            BatchConfig::new(input, output, Calibration::new(1.0, 1.0))
        }
    };

    if let Some(input) = cli.input {
        cfg.input_dir = input;
    }
    if let Some(output) = cli.output {
        cfg.output_dir = output;
    }
    if let Some(ref_length) = cli.ref_length {
        cfg.ref_length = ref_length;
    }
    if let Some(ref_height) = cli.ref_height {
        cfg.ref_height = ref_height;
    }
    if let Some(report) = cli.report {
        cfg.report_path = Some(report);
    }
    Ok(cfg)
}
