use clap::Parser;
use std::path::PathBuf;

use terramap::PreviewFormat;

#[derive(Parser)]
#[command(name = "terramap", version, about = "TERRAMAP CLI")]
pub struct CliArgs {
    /// Input raster image (e.g. a satellite map)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path for the three-color preview image
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output path for the land table
    #[arg(long, default_value = "land.csv")]
    pub land_table: PathBuf,

    /// Output path for the water table
    #[arg(long, default_value = "water.csv")]
    pub water_table: PathBuf,

    /// Upper bound on the number of rows either table may hold
    #[arg(long, default_value_t = 10_000)]
    pub budget: usize,

    /// Seed for the land attribute sampler; reuse a seed to reproduce a run
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Preview format (png or jpeg)
    #[arg(short = 'f', long, value_enum, default_value_t = PreviewFormat::PNG)]
    pub format: PreviewFormat,

    /// JSON params preset; when given it overrides --budget, --seed and --format
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
