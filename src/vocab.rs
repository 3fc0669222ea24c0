//! `vocab` — Module to load the vocabulary list a puzzle is generated from.
//!
//! This module is responsible for reading a vocabulary list (either from a
//! file, or from an in-memory string — the latter is important for
//! WebAssembly/browser builds, since direct file I/O isn't allowed there).
//!
//! The output is a `VocabList` struct containing a flat `Vec<VocabEntry>`.
//! Entries carry the target-language term and its translation (the clue);
//! no study metadata is kept, because the generator only needs those two
//! fields.
//!
//! The parsing logic:
//! - Each line in the input is expected to be in the format `term;clue`.
//! - Lines without a semicolon are skipped silently.
//! - Duplicate terms are dropped, keeping the first occurrence.
//!
//! This module is designed to be **WASM-friendly** — no `std::fs` calls are
//! made unless we're on a native build. The public API provides:
//! - `parse_from_str(...)` — works everywhere, including WASM.
//! - `load_from_path(...)` — **native-only** convenience method to read from
//!   a file path.

use std::collections::HashSet;

/// One vocabulary record: the term to place on the grid and the translation
/// that becomes its clue.
///
/// `id` is whatever identifier the caller's store uses; the generator never
/// reads it, but it survives serde round trips so browser callers can hand
/// their records over unchanged.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VocabEntry {
    #[serde(default)]
    pub id: u32,
    pub term: String,
    pub clue: String,
}

/// Struct representing a processed, ready-to-use vocabulary list.
///
/// The `entries` vector preserves input order (the normalizer does its own
/// ordering later); duplicates by term have already been removed.
#[derive(Debug, Clone)]
pub struct VocabList {
    pub entries: Vec<VocabEntry>,
}

impl VocabList {
    /// Parse a raw vocabulary list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem — you
    /// can pass the contents of a file fetched via JavaScript `fetch()` or
    /// read from the File API directly into this function.
    ///
    /// # Arguments
    /// * `contents` — The raw file contents as a `&str`. Each line should be
    ///   `term;clue`.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines.
    /// 2. Skips empty lines and lines without a `;` separator.
    /// 3. Splits each valid line into `term` and `clue` parts, trimming
    ///    whitespace around both.
    /// 4. Skips lines whose term or clue is empty after trimming.
    /// 5. Drops duplicate terms, keeping the first occurrence (we keep the
    ///    first rather than sort-and-dedup because input order must survive
    ///    for the normalizer's stable sort).
    ///
    /// Line numbers (1-based) double as entry ids.
    pub fn parse_from_str(contents: &str) -> VocabList {
        let mut seen: HashSet<String> = HashSet::new();

        let entries = contents
            .lines()
            .enumerate()
            .filter_map(|(line_no, raw_line)| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }

                // Split on the first ';' only, so clues containing semicolons
                // stay intact.
                let (term_raw, clue_raw) = line.split_once(';')?;
                let term = term_raw.trim();
                let clue = clue_raw.trim();
                if term.is_empty() || clue.is_empty() {
                    return None;
                }

                if !seen.insert(term.to_string()) {
                    return None;
                }

                Some(VocabEntry {
                    id: (line_no + 1) as u32,
                    term: term.to_string(),
                    clue: clue.to_string(),
                })
            })
            .collect();

        VocabList { entries }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// This method is **not available** in WebAssembly builds, because
    /// browsers cannot read files from arbitrary paths.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<VocabList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read vocabulary list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &VocabList) -> Vec<&str> {
        list.entries.iter().map(|e| e.term.as_str()).collect()
    }

    #[test]
    fn test_parse_basic() {
        let input = "ねこ;cat\nいぬ;dog\nとり;bird";
        let list = VocabList::parse_from_str(input);

        assert_eq!(terms(&list), vec!["ねこ", "いぬ", "とり"]);
        assert_eq!(list.entries[0].clue, "cat");
        assert_eq!(list.entries[2].id, 3);
    }

    #[test]
    fn test_parse_preserves_input_order() {
        let input = "さかな;fish\nあり;ant\nぞう;elephant";
        let list = VocabList::parse_from_str(input);

        assert_eq!(terms(&list), vec!["さかな", "あり", "ぞう"]);
    }

    #[test]
    fn test_parse_deduplicates_keeping_first() {
        let input = "ねこ;cat\nいぬ;dog\nねこ;feline\nねこ;kitty";
        let list = VocabList::parse_from_str(input);

        assert_eq!(terms(&list), vec!["ねこ", "いぬ"]);
        assert_eq!(list.entries[0].clue, "cat");
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let input = "ねこ;cat\n\n\nいぬ;dog\n\n";
        let list = VocabList::parse_from_str(input);

        assert_eq!(terms(&list), vec!["ねこ", "いぬ"]);
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let input = "ねこ;cat\nno_separator\nいぬ;dog\n;clue only\nterm only;";
        let list = VocabList::parse_from_str(input);

        assert_eq!(terms(&list), vec!["ねこ", "いぬ"]);
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let input = "  ねこ  ;  cat  \n  いぬ  ;  dog  ";
        let list = VocabList::parse_from_str(input);

        assert_eq!(terms(&list), vec!["ねこ", "いぬ"]);
        assert_eq!(list.entries[1].clue, "dog");
    }

    #[test]
    fn test_parse_keeps_semicolons_inside_clue() {
        let input = "ねこ;cat; also kitty";
        let list = VocabList::parse_from_str(input);

        assert_eq!(list.entries[0].clue, "cat; also kitty");
    }

    #[test]
    fn test_parse_empty_input() {
        let list = VocabList::parse_from_str("");
        assert!(list.entries.is_empty());
    }
}
