//! Error types for the outer surfaces, with error codes and helpful messages.
//!
//! The generator core never raises (unsuitable words are filtered silently,
//! unplaceable words are dropped silently); these errors belong to the
//! callers around it, the CLI and the WASM bindings.
//!
//! # Error Codes
//!
//! - K001: `VocabRead` (Vocabulary file could not be read)
//! - K002: `NotEnoughWords` (Generated puzzle is degenerate)
//!
//! # Examples
//!
//! ```
//! use kumiko::errors::PuzzleError;
//!
//! fn check(clue_count: usize) -> Result<(), PuzzleError> {
//!     if clue_count < 2 {
//!         return Err(PuzzleError::NotEnoughWords { clue_count, required: 2 });
//!     }
//!     Ok(())
//! }
//!
//! match check(1) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Errors reported by the CLI and WASM callers around the generator.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to read vocabulary list from '{path}': {source}")]
    VocabRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("not enough suitable words: {clue_count} clue(s), need at least {required}")]
    NotEnoughWords { clue_count: usize, required: usize },
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::VocabRead { .. } => "K001",
            PuzzleError::NotEnoughWords { .. } => "K002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::VocabRead { .. } => "Vocabulary file could not be read",
            PuzzleError::NotEnoughWords { .. } => "Generated puzzle is degenerate",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::VocabRead { .. } => {
                "The vocabulary list path could not be opened or decoded as UTF-8. \
                 The expected format is one `term;clue` pair per line."
            }
            PuzzleError::NotEnoughWords { .. } => {
                "Too few words survived filtering and placement to form a coherent \
                 puzzle. The generator itself never fails; this is the caller-side \
                 check on the finished puzzle's clue count."
            }
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::VocabRead { .. } => {
                Some("Check the path and the file encoding; each line should look like 'ねこ;cat'")
            }
            PuzzleError::NotEnoughWords { .. } => Some(
                "Add more vocabulary entries, or entries that share characters so they can intersect",
            ),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
