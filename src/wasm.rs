use crate::errors::PuzzleError;
use crate::generator;
use crate::log::init_logger;
use crate::vocab::{VocabEntry, VocabList};
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "K002", "W001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<PuzzleError> for WasmError {
    fn from(e: PuzzleError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        // Format a comprehensive error message
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        // Create a JavaScript Error object with the formatted message
        js_sys::Error::new(&msg).into()
    }
}

/// Initialize Kumiko logging with the specified debug setting.
///
/// # Arguments
/// * `debug_enabled` - If true, use Debug log level; if false, use Info log level
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    // 1. Set up panic hook
    console_error_panic_hook::set_once();

    // 2. Initialize logging with the provided debug setting
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
    if !debug_enabled {
        log::info!("Debug logging disabled");
    }
}

/// JS entry: (entries: Array<{id?, term, clue}>, seed?: number)
/// returns the puzzle object: grid, across, down, clueLocations.
///
/// Pass a seed to reproduce a layout exactly; omit it for a fresh shuffle
/// on every call.
#[wasm_bindgen]
pub fn generate_puzzle_wasm(entries: JsValue, seed: Option<u32>) -> Result<JsValue, JsValue> {
    // entries: Array<{id, term, clue}> -> Vec<VocabEntry>
    let entries: Vec<VocabEntry> = serde_wasm_bindgen::from_value(entries).map_err(|e| {
        // Create a structured error for deserialization failures
        WasmError {
            code: "W001".to_string(),
            message: format!("entries must be an array of {{term, clue}} records: {e}"),
            description: "Invalid vocabulary format".to_string(),
            details: "The entries parameter must be a JavaScript array of objects with \
                      string `term` and `clue` fields (and an optional numeric `id`)."
                .to_string(),
            help: Some(
                "Ensure you're passing records like [{term: 'ねこ', clue: 'cat'}]".to_string(),
            ),
        }
    })?;

    let puzzle = match seed {
        Some(seed) => generator::generate_puzzle_seeded(&entries, u64::from(seed)),
        None => {
            use rand::rngs::StdRng;
            use rand::SeedableRng;
            // StdRng seeds itself from the browser's crypto source here
            // (getrandom's `js` feature).
            generator::generate_puzzle(&entries, &mut StdRng::from_entropy())
        }
    };

    to_value(&puzzle).map_err(|e| {
        WasmError {
            code: "W002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize puzzle".to_string(),
            details: "The generated puzzle could not be converted to JavaScript format."
                .to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Parse a newline-separated vocabulary list string into entry records.
///
/// Each line of the input should be in the `term;clue` format. Malformed
/// lines are skipped silently. Returns the surviving entries as a `JsValue`
/// array of `{id, term, clue}` objects, suitable for feeding straight back
/// into [`generate_puzzle_wasm`].
///
/// # Errors
/// Returns a `JsValue` error if serialization of the parsed list fails.
#[wasm_bindgen]
pub fn parse_vocab_list(text: &str) -> Result<JsValue, JsValue> {
    let vocab = VocabList::parse_from_str(text);
    to_value(&vocab.entries).map_err(|e| {
        WasmError {
            code: "W003".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize vocabulary list".to_string(),
            details: "The vocabulary list could not be converted to JavaScript format."
                .to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}

/// Generate a debug report for troubleshooting.
///
/// This function creates a formatted debug report that users can copy/paste
/// when reporting issues. It includes the error message, generation
/// parameters, and environment information.
#[wasm_bindgen]
pub fn get_debug_info(error_message: &str, entry_count: usize, seed: Option<u32>) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails (infallible operation)
    // we use `let _ =` to explicitly ignore the Result without panicking
    let _ = writeln!(&mut report, "=== KUMIKO DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Vocabulary Entries: {}", entry_count);
    let _ = writeln!(
        &mut report,
        "Seed: {}",
        seed.map(|s| s.to_string()).unwrap_or_else(|| "entropy".to_string())
    );
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Instructions");
    let _ = writeln!(&mut report, "Please copy this entire report and paste it when reporting the issue.");
    let _ = writeln!(&mut report, "GitHub Issues: https://github.com/kumiko-xw/kumiko-rust/issues");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("Error K002: not enough suitable words", 3, Some(42));

        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== KUMIKO DEBUG REPORT ===");
        assert_eq!(lines[1], format!("Version: {}", env!("CARGO_PKG_VERSION")));
        assert!(lines[2].starts_with("Generated: ")); // Dynamic timestamp
        assert_eq!(lines[4], "## Error");
        assert_eq!(lines[5], "Error K002: not enough suitable words");

        let input_idx = lines.iter().position(|&l| l == "## Input").unwrap();
        assert_eq!(lines[input_idx + 1], "Vocabulary Entries: 3");
        assert_eq!(lines[input_idx + 2], "Seed: 42");
    }

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_get_debug_info_entropy_seed() {
        let report = get_debug_info("err", 0, None);
        assert!(report.contains("Seed: entropy"));
    }
}
