use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dropcontour_core::consts::DEFAULT_HIGH_PASS_RADIUS;
use dropcontour_core::filters::high_pass_filter;
use dropcontour_core::io::image_io::{derived_path, load_image, save_png};

#[derive(Args)]
pub struct HighPassArgs {
    /// Input image
    pub file: PathBuf,

    /// Radius of the suppressed low-frequency disc
    #[arg(short, long, default_value_t = DEFAULT_HIGH_PASS_RADIUS)]
    pub radius: usize,

    /// Output path (default: <input>_highpass.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &HighPassArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let filtered = high_pass_filter(&frame, args.radius);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| derived_path(&args.file, "_highpass.png"));
    save_png(&filtered, &output)?;
    println!("Saved to {}", output.display());
    Ok(())
}
