use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use kumiko::errors::PuzzleError;
use kumiko::generator;
use kumiko::vocab::VocabList;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Kumiko crossword generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the vocabulary list file (term;clue per line)
    vocab_list: String,

    /// Seed for the layout shuffle (omit for a fresh layout every run)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Minimum combined number of across/down clues to accept
    #[arg(short = 'c', long, default_value_t = 2)]
    min_clues: usize,

    /// Emit the puzzle as JSON instead of rendered text
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

/// Entry point of the Kumiko CLI generator.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("KUMIKO_DEBUG").is_ok();
    kumiko::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a PuzzleError
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the Kumiko CLI generator.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the vocabulary list from disk.
/// 3. Generate a puzzle from it (seeded if requested).
/// 4. Check the degenerate-puzzle post-condition against `--min-clues`.
/// 5. Print the grid and clue lists (or JSON) on stdout.
/// 6. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (unreadable vocabulary file,
/// not enough suitable words) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Load the vocabulary list from disk
    let t_load = Instant::now();
    let vocab = VocabList::load_from_path(&cli.vocab_list)
        .map_err(|e| PuzzleError::VocabRead { path: cli.vocab_list.clone(), source: e })?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Generate the puzzle
    let t_generate = Instant::now();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let puzzle = generator::generate_puzzle(&vocab.entries, &mut rng);
    let generate_secs = t_generate.elapsed().as_secs_f64();

    // 3. The generator never raises; a too-sparse result is the caller's
    //    failure condition to detect.
    if puzzle.clue_count() < cli.min_clues {
        return Err(Box::new(PuzzleError::NotEnoughWords {
            clue_count: puzzle.clue_count(),
            required: cli.min_clues,
        }));
    }

    // 4. Print the puzzle on stdout
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
    } else {
        println!("{}", puzzle.render());

        println!("\nヨコのカギ (across)");
        for entry in &puzzle.across {
            println!("{:>3}. {} [{}]", entry.number, entry.clue, entry.text);
        }

        println!("\nタテのカギ (down)");
        for entry in &puzzle.down {
            println!("{:>3}. {} [{}]", entry.number, entry.clue, entry.text);
        }
    }

    // 5. Print diagnostics (vocabulary size, timings, clue counts) to stderr
    eprintln!(
        "Loaded {} entries in {:.3}s; generated in {:.3}s ({} across, {} down).",
        vocab.entries.len(),
        load_secs,
        generate_secs,
        puzzle.across.len(),
        puzzle.down.len()
    );

    Ok(())
}
