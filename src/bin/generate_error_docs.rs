//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `PuzzleError` implementation via its `code()`,
//! `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use kumiko::errors::PuzzleError;
use std::io;

/// Helper to create all `PuzzleError` variants for documentation
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::VocabRead {
            path: "vocab.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        PuzzleError::NotEnoughWords { clue_count: 1, required: 2 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Puzzle Errors\n");
    println!("Errors reported by the callers around the generator (CLI, WASM). The generator core itself never raises.\n");

    for error in all_puzzle_error_variants() {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{}", help_text);
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{}", error);
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }

    println!("## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: not enough suitable words: 1 clue(s), need at least 2 (K002)");
    println!("```\n");
    println!("1. Note the error code (e.g., `K002`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");
}
