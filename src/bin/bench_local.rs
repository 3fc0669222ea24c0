//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for puzzle generation on *your* machine.
//! - Loads the vocabulary list once, then generates with each seed several
//!   times and reports the median.
//! - Also reports how full each layout came out (clue counts), since a
//!   faster run that places fewer words is not a win.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release -- -w vocab.txt`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -w vocab.txt -r 5`
//! - Print the last grid per seed:   `cargo run --bin bench_local --release -- -w vocab.txt -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - I/O (printing) is kept outside the timed section.
//! - One warm-up run per seed is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use kumiko::generator;
use kumiko::vocab::VocabList;
use std::hint::black_box;
use std::time::Instant;

/// Simple local benchmark runner: load the vocabulary once, time generation
/// across a handful of fixed seeds.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the vocabulary list file (term;clue per line)
    #[arg(short = 'w', long)]
    vocab_list: String,

    /// Number of repeats per seed (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print the final grid for each seed (outside the timed section)
    #[arg(short = 'p', long = "print", default_value_t = false)]
    print_grids: bool,
}

/// Fixed seeds so runs are comparable across machines and builds.
const SEEDS: [u64; 6] = [0, 1, 7, 42, 1000, 987_654_321];

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    // safe: f64 durations are never NaN in this context
    xs.sort_by(|a, b| a.partial_cmp(b).expect("f64 durations should not be NaN"));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load the vocabulary once. This I/O is *not* included in per-seed timing.
    eprintln!("Loading vocabulary from: {}", cli.vocab_list);
    let t_load = Instant::now();
    let vocab = VocabList::load_from_path(&cli.vocab_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!("Loaded {} entries in {:.3}s", vocab.entries.len(), load_secs);

    // (seed, median seconds, clue count of the last run)
    let mut summary: Vec<(u64, f64, usize)> = Vec::with_capacity(SEEDS.len());

    for (idx, &seed) in SEEDS.iter().enumerate() {
        eprintln!("\n[{:02}] seed {}", idx + 1, seed);

        // One *warm-up* execution per seed to "touch" code paths / caches.
        // We intentionally ignore its timing.
        let _warmup = generator::generate_puzzle_seeded(&vocab.entries, seed);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_clue_count = 0;
        let mut last_render = String::new();

        for rep in 0..cli.num_repeats {
            // Keep only the *core* operation inside the timed region.
            let t_generate = Instant::now();
            let puzzle =
                generator::generate_puzzle_seeded(black_box(&vocab.entries), black_box(seed));
            let generate_secs = t_generate.elapsed().as_secs_f64();

            // Prevent the compiler from proving the result unused and eliding work.
            let _keep = black_box(puzzle.clue_count());

            times.push(generate_secs);
            last_clue_count = puzzle.clue_count();
            if cli.print_grids {
                last_render = puzzle.render();
            }

            eprintln!(
                "  run {:>2}/{:>2}: {:.4}s ({} clues)",
                rep + 1,
                cli.num_repeats,
                generate_secs,
                last_clue_count
            );
        }

        // Prefer median for small N--it's less sensitive to noisy outliers.
        let med = median(times);

        if cli.print_grids {
            println!("{last_render}\n");
        }

        eprintln!(
            "  → median {:.4}s over {} run(s); last run produced {} {}",
            med,
            cli.num_repeats,
            last_clue_count,
            pluralizer(last_clue_count, "clue".into(), None)
        );

        summary.push((seed, med, last_clue_count));
    }

    // Compact summary at the end for a quick scan across all seeds.
    eprintln!("\n==== Summary ====");
    eprintln!("{:>12} | {:>10} | {:>8}", "seed", "median (s)", "# clues");
    eprintln!("{:-<12}-+-{:-<10}-+-{:-<8}", "", "", "");
    for (seed, med, clue_count) in &summary {
        eprintln!("{seed:>12} | {med:>10.4} | {clue_count:>8}");
    }

    Ok(())
}

// TODO? put this elsewhere
fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0]), 3.0);
        assert_eq!(median(vec![3.0, 1.0]), 2.0);
        assert_eq!(median(vec![5.0, 1.0, 3.0]), 3.0);
    }

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "clue".into(), None), "clues");
        assert_eq!(pluralizer(1, "clue".into(), None), "clue");
        assert_eq!(pluralizer(2, "clue".into(), None), "clues");
        assert_eq!(pluralizer(1, "axis".into(), Some("axes".into())), "axis");
        assert_eq!(pluralizer(2, "axis".into(), Some("axes".into())), "axes");
    }
}
