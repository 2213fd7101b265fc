use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dropcontour_core::droplet::contour_finder;

use crate::settings::load_config;
use crate::summary::print_regions_summary;

#[derive(Args)]
pub struct FindArgs {
    /// Input image
    pub file: PathBuf,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Save the contrast-enhanced crop
    #[arg(long)]
    pub save_contrast: bool,

    /// Save the binarized crop
    #[arg(long)]
    pub save_binarized: bool,

    /// Save the contour overlay
    #[arg(long)]
    pub save_contours: bool,
}

pub fn run(args: &FindArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?.finder;
    config.save_contrast |= args.save_contrast;
    config.save_binarized |= args.save_binarized;
    config.save_contours |= args.save_contours;

    let regions = contour_finder(&args.file, &config)
        .with_context(|| format!("Failed to find contours in {}", args.file.display()))?;

    print_regions_summary(&args.file, &regions);
    Ok(())
}
