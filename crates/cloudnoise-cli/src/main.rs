//! Command-line front end: generate a cloud-noise grid, then edit and export it
//! through an interactive command loop.

mod export;
mod repl;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cloudnoise_core::{CloudGenerator, NoiseConfig};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "cloudnoise", about = "Octave-blended value noise generator")]
struct Args {
    /// JSON file with generation parameters; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(short, long)]
    width: Option<usize>,

    /// Grid height in cells.
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Number of octaves to blend.
    #[arg(short, long)]
    octaves: Option<u32>,

    /// Fixed seed for reproducible output (default: clock).
    #[arg(short, long)]
    seed: Option<u64>,

    /// PNG path used by the `save` command.
    #[arg(long, default_value = "PerlinNoise.png")]
    output: PathBuf,

    /// Save once and exit without starting the command loop.
    #[arg(long)]
    batch: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<NoiseConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                NoiseConfig::from_json(&json).with_context(|| format!("parsing config {}", path.display()))?
            }
            None => NoiseConfig::default(),
        };
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        if let Some(o) = self.octaves {
            config.octaves = o;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.resolve_config()?;

    let result = CloudGenerator::new().generate(&config)?;
    info!("seed {} (pass --seed {} to reproduce)", result.seed, result.seed);
    let mut colours = result.colours;

    if args.batch {
        export::save_png(&colours, &args.output)?;
        println!("Saved {}", args.output.display());
        return Ok(());
    }

    let stdin = io::stdin();
    repl::Session::new(&mut colours, stdin.lock(), io::stdout(), args.output.clone()).run()
}
