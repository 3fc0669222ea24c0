//! `candidates` — turn raw vocabulary entries into an ordered placement list.
//!
//! This is the front of the generation pipeline: it masks the chōon, drops
//! terms the grid can't hold, and orders what's left so the placement engine
//! sees the longest word first and the rest in random order.
//!
//! Rejection here is always silent: a vocabulary entry that can't appear in
//! a puzzle simply doesn't, and the caller learns about thin input from the
//! finished puzzle's clue count, not from an error.

use crate::grid::GRID_SIZE;
use crate::kana::{mask_chouon, KanaChar};
use crate::vocab::VocabEntry;
use rand::Rng;

/// A vocabulary entry that survived filtering, ready for placement.
///
/// `text` is the *masked* term (chōon replaced by the placeholder); the
/// original spelling is restored when the finished puzzle is emitted.
/// `clue` is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub clue: String,
}

/// Filter and order vocabulary entries for placement.
///
/// 1. Mask the chōon in each term (the clue is left alone).
/// 2. Drop entries whose masked term contains any character outside
///    hiragana/katakana/ideographs/placeholder, is empty, or is longer than
///    the grid side (those can never be placed anywhere).
/// 3. Sort by character count, descending, so the most structurally useful
///    word seeds the grid. The sort is stable, keeping input order among
///    equal lengths until the shuffle below.
/// 4. Shuffle everything *except* the first element, so placement always
///    starts from a maximal-length anchor while repeated runs still vary
///    which words follow it.
pub fn normalize<R: Rng>(entries: &[VocabEntry], rng: &mut R) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = entries
        .iter()
        .filter_map(|entry| {
            let text = mask_chouon(&entry.term);
            let len = text.chars().count();
            if len == 0 || len > GRID_SIZE {
                log::debug!("skipping '{}': length {len} unusable", entry.term);
                return None;
            }
            if !text.chars().all(|c| c.is_grid_char()) {
                log::debug!("skipping '{}': contains non-script characters", entry.term);
                return None;
            }
            Some(Candidate { text, clue: entry.clue.clone() })
        })
        .collect();

    candidates.sort_by_key(|c| std::cmp::Reverse(c.text.chars().count()));

    if candidates.len() > 1 {
        shuffle(&mut candidates[1..], rng);
    }

    candidates
}

/// Fisher–Yates shuffle over an injected RNG.
fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(term: &str, clue: &str) -> VocabEntry {
        VocabEntry { id: 0, term: term.to_string(), clue: clue.to_string() }
    }

    fn texts(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_longest_word_stays_first() {
        let entries = vec![
            entry("ねこ", "cat"),
            entry("さかな", "fish"),
            entry("とけい", "clock"),
            entry("でんしゃ", "train"),
        ];

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let candidates = normalize(&entries, &mut rng);
            assert_eq!(candidates[0].text, "でんしゃ");
            assert_eq!(candidates.len(), 4);
        }
    }

    #[test]
    fn test_filters_mixed_script_terms() {
        let entries = vec![
            entry("ねこ", "cat"),
            entry("cat", "cat in latin letters"),
            entry("ねこ2", "numbered cat"),
            entry("ね こ", "spaced cat"),
        ];
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(texts(&normalize(&entries, &mut rng)), vec!["ねこ"]);
    }

    #[test]
    fn test_chouon_is_masked_in_text_not_clue() {
        let entries = vec![entry("カレー", "curry (long vowel)")];
        let mut rng = StdRng::seed_from_u64(0);
        let candidates = normalize(&entries, &mut rng);

        assert_eq!(candidates.len(), 1);
        assert!(!candidates[0].text.contains(crate::kana::CHOUON));
        assert_eq!(candidates[0].clue, "curry (long vowel)");
    }

    #[test]
    fn test_drops_terms_longer_than_grid() {
        let oversized: String = std::iter::repeat('あ').take(GRID_SIZE + 1).collect();
        let entries = vec![entry(&oversized, "too long"), entry("ねこ", "cat")];
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(texts(&normalize(&entries, &mut rng)), vec!["ねこ"]);
    }

    #[test]
    fn test_same_seed_same_order() {
        let entries: Vec<VocabEntry> =
            ["ひこうき", "じてんしゃ", "くるま", "ふね", "でんしゃ", "バス"]
                .iter()
                .map(|t| entry(t, "vehicle"))
                .collect();

        let a = normalize(&entries, &mut StdRng::seed_from_u64(7));
        let b = normalize(&entries, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(normalize(&[], &mut rng).is_empty());
    }
}
