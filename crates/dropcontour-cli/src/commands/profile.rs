use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dropcontour_core::profile::gradient_labeling;

use crate::settings::load_config;

#[derive(Args)]
pub struct ProfileArgs {
    /// Input image
    pub file: PathBuf,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Save the binarized image used for the profiles
    #[arg(long)]
    pub save_binarized: bool,

    /// Write the profiles as TOML instead of printing them
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ProfileArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?.profile;
    config.save_binarized |= args.save_binarized;

    let profiles = gradient_labeling(&args.file, &config)
        .with_context(|| format!("Failed to profile {}", args.file.display()))?;

    let toml_str = toml::to_string_pretty(&profiles)?;
    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Profiles saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }
    Ok(())
}
