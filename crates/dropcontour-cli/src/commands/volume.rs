use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dropcontour_core::droplet::estimate_volume_from_path;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::settings::load_config;
use crate::summary::print_volume_summary;

#[derive(Args)]
pub struct VolumeArgs {
    /// Input images
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Physical length of one pixel (overrides the config)
    #[arg(long)]
    pub pixel_size: Option<f64>,
}

pub fn run(args: &VolumeArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?.volume;
    if let Some(size) = args.pixel_size {
        config.pixel_to_um = size;
    }

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Estimating volumes");

    let estimates = args
        .files
        .par_iter()
        .map(|path| {
            let estimate = estimate_volume_from_path(path, &config)
                .with_context(|| format!("Failed to estimate volume of {}", path.display()));
            pb.inc(1);
            estimate.map(|e| (path.clone(), e))
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Volumes estimated");

    for (path, estimate) in &estimates {
        print_volume_summary(path, estimate);
    }
    Ok(())
}
