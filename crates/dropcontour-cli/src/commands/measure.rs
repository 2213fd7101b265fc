use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dropcontour_core::droplet::{droplet_boundary, ellipses_analysis, EllipseSummary};
use dropcontour_core::ellipse::EllipseFit;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;

use crate::settings::load_config;
use crate::summary::print_measure_summary;

#[derive(Args)]
pub struct MeasureArgs {
    /// Input images
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write an image with the fitted ellipses next to each input
    #[arg(long)]
    pub save_ellipses: bool,

    /// Write an image with the traced contours next to each input
    #[arg(long)]
    pub save_contours: bool,

    /// Write the measured ellipses as TOML
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Measurements of one image.
pub struct ImageMeasurement {
    pub path: PathBuf,
    pub fit_attempts: usize,
    pub summary: EllipseSummary,
}

#[derive(Serialize)]
struct Report {
    images: Vec<ImageReport>,
}

#[derive(Serialize)]
struct ImageReport {
    path: String,
    fit_attempts: usize,
    count: usize,
    ellipses: Vec<EllipseFit>,
}

pub fn run(args: &MeasureArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?.boundary;
    config.save_ellipses |= args.save_ellipses;
    config.save_contours |= args.save_contours;

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Measuring droplets");

    let measurements: Vec<ImageMeasurement> = args
        .files
        .par_iter()
        .map(|path| {
            let result = droplet_boundary(path, &config)
                .with_context(|| format!("Failed to measure {}", path.display()));
            pb.inc(1);
            result.map(|boundary| ImageMeasurement {
                path: path.clone(),
                fit_attempts: boundary.fit_attempts,
                summary: ellipses_analysis(&boundary.ellipses),
            })
        })
        .collect::<Result<_>>()?;

    pb.finish_with_message("Droplets measured");

    print_measure_summary(&measurements);

    if let Some(ref output) = args.output {
        let report = Report {
            images: measurements
                .iter()
                .map(|m| ImageReport {
                    path: m.path.display().to_string(),
                    fit_attempts: m.fit_attempts,
                    count: m.summary.count,
                    ellipses: m.summary.sorted.clone(),
                })
                .collect(),
        };
        std::fs::write(output, toml::to_string_pretty(&report)?)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("Results saved to {}", output.display());
    }

    Ok(())
}
