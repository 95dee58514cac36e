//! Solve both region queries for a target file.
//!
//! Usage:
//!   chronal_regions input.txt                  Default threshold (10000)
//!   chronal_regions input.txt --threshold 32   Custom threshold

use clap::Parser;
use manhattan_regions::{parse_targets, RegionError, RegionPartitioner};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "chronal_regions")]
#[command(about = "Largest finite Manhattan region and safe-region size for a target list")]
struct Args {
    /// File with one "<x>, <y>" target per line
    input: PathBuf,

    /// Count coordinates whose total distance to all targets is below this
    #[arg(short, long, default_value_t = 10_000)]
    threshold: i64,
}

fn solve(args: &Args) -> Result<(usize, usize), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.input)
        .map_err(|e| format!("reading {}: {}", args.input.display(), e))?;
    let coords = parse_targets(&text)?;

    let mut partitioner = RegionPartitioner::new(&coords)?;
    partitioner.fill();
    let largest = partitioner.largest_finite_region()?;
    let safe = partitioner.count_under_threshold(args.threshold);
    Ok((largest, safe))
}

fn main() -> ExitCode {
    let args = Args::parse();

    match solve(&args) {
        Ok((largest, safe)) => {
            println!("Part 1:\n\t largest area = {}", largest);
            println!("Part 2:\n\t region size = {}", safe);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let Some(RegionError::EmptyTargets) = e.downcast_ref::<RegionError>() {
                eprintln!("error: {} has no targets", args.input.display());
            } else {
                eprintln!("error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
