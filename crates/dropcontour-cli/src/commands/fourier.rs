use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dropcontour_core::consts::DEFAULT_FOURIER_ORDER;
use dropcontour_core::droplet::find_contour_regions;
use dropcontour_core::fourier::contour_fourier_features;
use dropcontour_core::io::image_io::load_image;

use crate::settings::load_config;

#[derive(Args)]
pub struct FourierArgs {
    /// Input image
    pub file: PathBuf,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of harmonics
    #[arg(long, default_value_t = DEFAULT_FOURIER_ORDER)]
    pub order: usize,
}

/// Print the elliptic Fourier descriptors of every region the finder keeps.
pub fn run(args: &FourierArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?.finder;
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let regions = find_contour_regions(&frame, &config)?;

    for (i, contour) in regions.contours.iter().enumerate() {
        let fd = contour_fourier_features(contour, args.order);
        println!("Region {} (area {:.0}, DC {:.2}, {:.2})", i + 1, regions.areas[i], fd.a0, fd.c0);
        println!("{:>4}  {:>10}  {:>10}  {:>10}  {:>10}", "n", "a", "b", "c", "d");
        for (n, row) in fd.coefficients.outer_iter().enumerate() {
            println!(
                "{:>4}  {:>10.4}  {:>10.4}  {:>10.4}  {:>10.4}",
                n + 1,
                row[0],
                row[1],
                row[2],
                row[3]
            );
        }
        println!();
    }
    Ok(())
}
