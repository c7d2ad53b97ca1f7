//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of puzzles on *your* machine.
//! - Loads the dictionary once, then solves each puzzle several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few solutions:          `cargo run --bin bench_local --release -- -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparable numbers.
//! - Puzzles live in `PUZZLES` below.
//! - Dictionary I/O and printing are kept outside the timed section.

use std::hint::black_box;
use std::time::Instant;

use clap::Parser;

use letterboxed::search::SolutionPair;
use letterboxed::solver::{self, SolveConfig};
use letterboxed::word_list::WordList;

/// Simple local benchmark runner: load the dictionary once, time several puzzles.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dictionary.txt")
    )]
    dictionary: String,

    /// Number of repeats per puzzle (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many solutions per puzzle (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

const PUZZLES: &[&str] = &[
    "XLBOCUIMQAYT",
    "MATDLBEUNRIX",
    "ABCDEFGHIJKL",
    "RMEWCLTGKAPI",
];

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load the dictionary once. This I/O is *not* included in per-puzzle timing.
    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let list = WordList::load_from_path(&cli.dictionary)?;
    eprintln!("Loaded {} words in {:.3}s", list.len(), t_load.elapsed().as_secs_f64());

    let mut summary: Vec<(&str, f64, usize)> = Vec::with_capacity(PUZZLES.len());

    for (idx, &letters) in PUZZLES.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, letters);
        let config = SolveConfig::new(letters, &list);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_solutions: Vec<SolutionPair> = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let result = match solver::solve(black_box(&config)) {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("  ✗ Run {}/{} failed: {}", rep + 1, cli.num_repeats, e.display_detailed());
                    continue;
                }
            };
            let solve_secs = t_solve.elapsed().as_secs_f64();

            times.push(solve_secs);
            last_solutions = result.solutions;

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} solutions)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                last_solutions.len()
            );
        }

        let med = median(times);

        for pair in last_solutions.iter().take(cli.print_limit) {
            println!("{pair}");
        }

        eprintln!("  → median {:.3}s over {} run(s)", med, cli.num_repeats);
        summary.push((letters, med, last_solutions.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<12} | {:>10} | {:>11}", "puzzle", "median (s)", "# solutions");
    eprintln!("{:-<12}-+-{:-<10}-+-{:-<11}", "", "", "");
    for (letters, med, num_solutions) in &summary {
        eprintln!("{letters:<12} | {med:>10.3} | {num_solutions:>11}");
    }

    Ok(())
}
