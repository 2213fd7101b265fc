use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dropcontour_core::detection::detect_droplet_boundary;
use dropcontour_core::io::crop::crop_and_remove_nozzle;
use dropcontour_core::io::image_io::load_image;
use dropcontour_core::nozzle::measure_nozzle_diameter;

#[derive(Args)]
pub struct NozzleArgs {
    /// Input image
    pub file: PathBuf,

    /// Columns to drop from the left edge before measuring
    #[arg(long, default_value_t = 0)]
    pub x_offset: usize,

    /// Rows to drop from the top edge before measuring
    #[arg(long, default_value_t = 0)]
    pub y_offset: usize,
}

pub fn run(args: &NozzleArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let frame = crop_and_remove_nozzle(&frame, args.x_offset, args.y_offset)?;
    let edges = detect_droplet_boundary(&frame);

    let rects = measure_nozzle_diameter(&edges);
    println!("{:>5}  {:>10}  {:>10}  {:>10}", "#", "Width", "Height", "Diameter");
    println!("{}", "-".repeat(42));
    for (i, rect) in rects.iter().enumerate() {
        println!(
            "{:>5}  {:>10.2}  {:>10.2}  {:>10.2}",
            i + 1,
            rect.width,
            rect.height,
            rect.diameter()
        );
    }
    Ok(())
}
