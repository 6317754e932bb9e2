use clap::Parser;
use scanflow::image::io::load_rgb_image;
use scanflow::{EdgeConfig, FeatureScanner, ScanConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str = r#"{
  "frame": "frame_a.png",
  "reference_frame": "frame_b.png",
  "tilt_deg": 0.0,
  "spacing": 10.0,
  "bin_count": 64,
  "min_contrast": 600.0
}"#;

#[derive(Parser, Debug)]
#[command(author, version, about = "ScanFlow CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
struct Config {
    /// Frame to scan.
    frame: PathBuf,
    /// Optional second frame to align against.
    #[serde(default)]
    reference_frame: Option<PathBuf>,
    #[serde(default)]
    tilt_deg: f32,
    #[serde(default = "default_spacing")]
    spacing: f32,
    #[serde(default = "default_bin_count")]
    bin_count: usize,
    #[serde(default = "default_min_contrast")]
    min_contrast: f32,
}

fn default_spacing() -> f32 {
    10.0
}

fn default_bin_count() -> usize {
    64
}

fn default_min_contrast() -> f32 {
    600.0
}

#[derive(Debug, Serialize)]
struct FrameReport {
    segments: usize,
    points: usize,
    chains: usize,
}

#[derive(Debug, Serialize)]
struct Report {
    frame: FrameReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_frame: Option<FrameReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset_weight: Option<f32>,
}

fn scan_frame(
    path: &PathBuf,
    tilt: f32,
    config: &ScanConfig,
) -> Result<FeatureScanner, Box<dyn std::error::Error>> {
    let buffer = load_rgb_image(path)?;
    let mut scanner = FeatureScanner::new();
    scanner.scan(&buffer.view(), tilt, config)?;
    Ok(scanner)
}

fn run(config: Config) -> Result<Report, Box<dyn std::error::Error>> {
    let scan_config = ScanConfig {
        spacing: config.spacing,
        bin_count: config.bin_count,
        edge: EdgeConfig {
            min_contrast: config.min_contrast,
        },
    };
    let tilt = config.tilt_deg.to_radians();

    let scanner = scan_frame(&config.frame, tilt, &scan_config)?;
    let table = scanner.table().expect("scan populated the table");
    let frame = FrameReport {
        segments: scanner.segments().len(),
        points: scanner.points().len(),
        chains: table.chains().len(),
    };

    let mut report = Report {
        frame,
        reference_frame: None,
        offset: None,
        offset_weight: None,
    };

    if let Some(reference_path) = &config.reference_frame {
        let reference = scan_frame(reference_path, tilt, &scan_config)?;
        let reference_table = reference.table().expect("scan populated the table");

        let offset = table.calculate_offset(reference_table)?;
        report.reference_frame = Some(FrameReport {
            segments: reference.segments().len(),
            points: reference.points().len(),
            chains: reference_table.chains().len(),
        });
        report.offset = offset.value();
        report.offset_weight = Some(offset.weight());
    }

    Ok(report)
}

fn main() {
    let cli = Cli::parse();

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return;
    }

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
            .init();
    }

    let config_text = match fs::read_to_string(&cli.config) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read {}: {err}", cli.config.display());
            std::process::exit(1);
        }
    };
    let config: Config = match serde_json::from_str(&config_text) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to parse {}: {err}", cli.config.display());
            std::process::exit(1);
        }
    };

    match run(config) {
        Ok(report) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).expect("report serializes")
            );
        }
        Err(err) => {
            eprintln!("scan failed: {err}");
            std::process::exit(1);
        }
    }
}
