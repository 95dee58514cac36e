//! Benchmark grid fill and threshold counting on random targets.
//!
//! Run with: cargo run --release --bin bench_partition
//!
//! Usage:
//!   bench_partition                Run default size (50 targets)
//!   bench_partition 50 200 1k      Run multiple target counts
//!   bench_partition --extent 1000  Larger bounding box
//!   bench_partition -n 10          Run 10 iterations (for profiling)
//!
//! For per-pass timing from inside the library, build with: --features timing

use clap::Parser;
use manhattan_regions::{validation, Coord, PartitionConfig, RegionPartitioner};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('k') {
        (stripped, 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

#[derive(Parser)]
#[command(name = "bench_partition")]
#[command(about = "Benchmark Manhattan region partitioning at various scales")]
struct Args {
    /// Target counts to benchmark (e.g., 50, 200, 1k)
    #[arg(value_parser = parse_count)]
    sizes: Vec<usize>,

    /// Targets are drawn from [0, extent) on both axes
    #[arg(short, long, default_value_t = 400)]
    extent: i64,

    /// Random seed
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Threshold for the total-distance count
    #[arg(short, long, default_value_t = 10_000)]
    threshold: i64,

    /// Sum every distance instead of stopping at the threshold
    #[arg(long)]
    no_early_exit: bool,

    /// Number of iterations to run (useful for profiling)
    #[arg(short = 'n', long, default_value_t = 1)]
    repeat: usize,
}

fn generate_targets(n: usize, extent: i64, seed: u64) -> Vec<Coord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| Coord::new(rng.gen_range(0..extent), rng.gen_range(0..extent)))
        .collect()
}

fn ms_since(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn main() {
    let args = Args::parse();

    println!("manhattan-regions Benchmark");
    println!("===========================\n");

    let sizes: Vec<usize> = if args.sizes.is_empty() {
        vec![50]
    } else {
        args.sizes.clone()
    };

    println!("Configuration:");
    println!("  seed = {}", args.seed);
    println!("  extent = {}", args.extent);
    println!("  threshold = {}", args.threshold);
    println!("  sizes = {:?}", sizes);
    if args.no_early_exit {
        println!("  early exit = disabled");
    }
    #[cfg(feature = "parallel")]
    println!("  parallel = {} threads", rayon::current_num_threads());
    #[cfg(feature = "timing")]
    println!("  timing = enabled (per-pass timing will be printed)");

    let config = PartitionConfig {
        early_exit: !args.no_early_exit,
    };

    for &n in &sizes {
        if n == 0 || args.extent <= 0 {
            println!("\nSkipping n = {} (need at least one target and a positive extent)", n);
            continue;
        }

        println!("\n{}", "=".repeat(60));
        println!("Benchmarking n = {}", n);
        println!("{}", "=".repeat(60));

        let targets = generate_targets(n, args.extent, args.seed);

        for iter in 0..args.repeat.max(1) {
            let mut partitioner = match RegionPartitioner::with_config(&targets, config.clone()) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("  error: {}", e);
                    break;
                }
            };
            let b = partitioner.bounding_box();
            let cells = b.num_cells();

            let t_fill = Instant::now();
            partitioner.fill();
            let fill_ms = ms_since(t_fill);

            let t_region = Instant::now();
            let largest = partitioner.largest_finite_region().unwrap_or(0);
            let region_ms = ms_since(t_region);

            let t_count = Instant::now();
            let safe = partitioner.count_under_threshold(args.threshold);
            let count_ms = ms_since(t_count);

            let report = validation::validate(&partitioner);

            println!(
                "  [{}] cells={} fill={:.1}ms largest={} ({:.1}ms) under={} ({:.1}ms) ties={} valid={}",
                iter + 1,
                cells,
                fill_ms,
                largest,
                region_ms,
                safe,
                count_ms,
                report.tie_cells,
                report.is_valid()
            );
        }
    }
}
