//! Draws a standard-normal vector and prints the correlation matrix it
//! parameterizes, once through the explicit chain and once through the
//! pipeline entry point.

use std::error::Error as StdError;

use clap::Parser;
use hypercorr::{
    AngleEmbed, AngleMatrix, AngleToCorrelation, CorrelationMatrix, Error, Squash, Transform,
    VecToCorrelation,
};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng, thread_rng};
use statrs::distribution::Normal;
use tracing_subscriber::{EnvFilter, fmt};

/// Print a random correlation matrix built from hyperspherical angles
#[derive(Parser)]
#[command(name = "corr-demo")]
#[command(version)]
#[command(about = "Print a random correlation matrix built from hyperspherical angles")]
struct Cli {
    /// Side length of the correlation matrix (at least 1)
    #[arg(
        short,
        long,
        default_value_t = 4,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    dim: usize,

    /// Seed for the raw vector; drawn at random when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn StdError>> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let seed = cli.seed.unwrap_or_else(|| thread_rng().next_u64());
    tracing::info!(dim = cli.dim, seed, "drawing raw vector");

    let pipeline = VecToCorrelation::new(cli.dim);
    let len = pipeline.input_len().ok_or(Error::Dimension {
        expected: usize::MAX,
        actual: 0,
        n: cli.dim,
    })?;

    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0)?;
    let raw: Vec<f64> = normal.sample_iter(&mut rng).take(len).collect();

    // Explicit chain, one step at a time
    let angles: Vec<f64> = Squash.apply(&raw);
    let theta: hypercorr::Result<AngleMatrix<f64>> = AngleEmbed::new(cli.dim - 1).apply(&angles);
    let chained: CorrelationMatrix<f64> = AngleToCorrelation.apply(&theta?);
    println!("{}", chained);

    let direct: hypercorr::Result<CorrelationMatrix<f64>> = pipeline.apply(&raw);
    println!("{}", direct?);

    Ok(())
}
