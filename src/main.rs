//! Curve demo driver.
//!
//! Builds a random mix of ellipses, circles and helices, prints each curve's
//! point and derivative at one angle, then ranks the circles by radius.
//!
//! Usage:
//! ```text
//! cargo run                                   # 100 curves at pi/4
//! cargo run -- --count 10 --seed 42           # reproducible run
//! RUST_LOG=curve3d=debug cargo run            # library diagnostics
//! ```

use std::f64::consts::FRAC_PI_4;

use clap::Parser;
use curve3d::operations::creation::{GeneratorParams, RandomCurves};
use curve3d::operations::query::{RadiusSummary, SelectCircles};
use curve3d::{ParametricCurve, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "curve3d")]
#[command(about = "Evaluate random 3D curves and rank the circles by radius")]
struct Args {
    /// Number of curves to generate.
    #[arg(long, default_value_t = 100)]
    count: usize,

    /// Angle in radians at which every curve is evaluated.
    #[arg(long, default_value_t = FRAC_PI_4)]
    angle: f64,

    /// Seed for the random generator. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Smallest value a generated parameter can take.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min: i32,

    /// Largest value a generated parameter can take.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    max: i32,
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for curve3d.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curve3d=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curve3d=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let params = GeneratorParams {
        min: args.min,
        max: args.max,
    };
    let curves = RandomCurves::new(params).execute(&mut rng, args.count)?;
    info!(count = curves.len(), angle = args.angle, "evaluating curves");

    for curve in &curves {
        println!("Point: {}", curve.calculate(args.angle));
        println!("Derivative: {}", curve.derivative(args.angle));
    }

    let circles = SelectCircles::new().execute(&curves);
    if let Some(summary) = RadiusSummary::from_circles(&circles) {
        println!("first: {}, last: {}", summary.first, summary.last);
        println!("Total Sum of Radii: {}", summary.total);
    } else {
        warn!("no circles to rank");
    }
    Ok(())
}
