//! Tool to measure the Euclidean distance between two points
//!
//! Points are given as `x,y,z` triples. The coordinate type is picked on the
//! command line, so integral grids and continuous space go through the same
//! generic code.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, info, LevelFilter};
use num_traits::AsPrimitive;

use point3d::{Axis, Point};

/// Type alias for the error type used throughout this tool
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Coordinate type used for both points
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Coords {
    /// 64-bit signed integers, measured in 128-bit arithmetic
    Int,
    /// 64-bit floating point
    Float,
}

/// Point Distance Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prints the Euclidean distance between two 3D points",
    long_about = None
)]
struct Args {
    /// Coordinate type for both points
    #[arg(short, long, value_enum, default_value_t = Coords::Float)]
    coords: Coords,

    /// Increase log verbosity (repeatable); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// First point as x,y,z
    #[arg(allow_hyphen_values = true)]
    from: String,

    /// Second point as x,y,z
    #[arg(allow_hyphen_values = true)]
    to: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Parses both points as `Point<C>` and measures between them
fn measure<C>(from: &str, to: &str) -> Result<f64>
where
    C: FromStr + Clone + fmt::Display + Sub<Output = C> + Mul<Output = C> + Add<Output = C>,
    C: AsPrimitive<f64>,
    C::Err: fmt::Display,
{
    let a: Point<C> = from.parse()?;
    let b: Point<C> = to.parse()?;
    debug!("parsed points {} and {}", a, b);
    Ok(a.distance_from(&b))
}

/// Parses integer points and measures them in 128-bit arithmetic
///
/// Differences of `i64` coordinates always fit in `i128`; their squared sum
/// is checked before measuring so far-apart points report an error.
fn measure_int(from: &str, to: &str) -> Result<f64> {
    let a = widen(from.parse()?);
    let b = widen(to.parse()?);
    debug!("parsed points {} and {}", a, b);

    let squared = Axis::ALL.iter().try_fold(0i128, |sum, &axis| {
        let diff = a[axis] - b[axis];
        diff.checked_mul(diff).and_then(|sq| sum.checked_add(sq))
    });
    if squared.is_none() {
        return Err(format!("points {} and {} are too far apart to measure", a, b).into());
    }

    Ok(a.distance_from(&b))
}

fn widen(p: Point<i64>) -> Point<i128> {
    let (x, y, z) = p.into_tuple();
    Point::new(x.into(), y.into(), z.into())
}

fn run(args: Args) -> Result<()> {
    info!("measuring with {:?} coordinates", args.coords);
    let distance = match args.coords {
        Coords::Int => measure_int(&args.from, &args.to)?,
        Coords::Float => measure::<f64>(&args.from, &args.to)?,
    };

    println!("{}", distance);
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
