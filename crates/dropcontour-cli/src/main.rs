mod commands;
mod settings;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dropcontour", about = "Droplet boundary extraction and measurement")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit ellipses to the droplets in one or more images
    Measure(commands::measure::MeasureArgs),
    /// Find candidate droplet regions in an image
    Find(commands::find::FindArgs),
    /// Estimate droplet volumes by stacking row slices
    Volume(commands::volume::VolumeArgs),
    /// Compute foreground sum and gradient profiles
    Profile(commands::profile::ProfileArgs),
    /// Print elliptic Fourier descriptors of the found regions
    Fourier(commands::fourier::FourierArgs),
    /// Suppress low spatial frequencies with an FFT high-pass
    Highpass(commands::highpass::HighPassArgs),
    /// Measure the nozzle with minimum-area rectangles
    Nozzle(commands::nozzle::NozzleArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Measure(args) => commands::measure::run(args),
        Commands::Find(args) => commands::find::run(args),
        Commands::Volume(args) => commands::volume::run(args),
        Commands::Profile(args) => commands::profile::run(args),
        Commands::Fourier(args) => commands::fourier::run(args),
        Commands::Highpass(args) => commands::highpass::run(args),
        Commands::Nozzle(args) => commands::nozzle::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
