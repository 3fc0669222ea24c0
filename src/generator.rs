//! The placement engine: greedy, single-pass crossword layout.
//!
//! Words are considered in the order the normalizer produced (longest
//! first, the rest shuffled). The first word is written unconditionally
//! across the center of the empty grid; every later word is tried at every
//! cell where one of its characters matches a character of an
//! already-placed word, perpendicular to that word. Among the feasible
//! spots the first strictly-best-scoring one wins, where the score is the
//! number of already-filled cells the word would coincide with. A word with
//! no feasible spot is dropped and never retried: a bad early placement
//! can cost later words their place, and that is accepted behavior, not a
//! bug. There is no backtracking and no time budget, just one forward pass
//! over the candidate list followed by clue extraction.
//!
//! # Examples
//!
//! ```
//! use kumiko::generator;
//! use kumiko::vocab::VocabEntry;
//!
//! let entries = vec![
//!     VocabEntry { id: 1, term: "こども".into(), clue: "child".into() },
//!     VocabEntry { id: 2, term: "こめ".into(), clue: "rice".into() },
//! ];
//! let puzzle = generator::generate_puzzle_seeded(&entries, 42);
//!
//! assert_eq!(puzzle.clue_count(), 2);
//! assert!(!puzzle.is_degenerate());
//! ```
//!
//! The generator never fails; an input with no usable words just produces
//! an empty, degenerate puzzle:
//!
//! ```
//! use kumiko::generator;
//!
//! let puzzle = generator::generate_puzzle_seeded(&[], 0);
//! assert!(puzzle.is_degenerate());
//! ```

use crate::candidates::{normalize, Candidate};
use crate::grid::{Direction, Grid, PlacedWord, Placement, GRID_SIZE};
use crate::puzzle::Puzzle;
use crate::vocab::VocabEntry;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a puzzle from vocabulary entries using the given randomness
/// source. Pure apart from consuming the RNG: same entries + same RNG state
/// produce the identical puzzle.
pub fn generate_puzzle<R: Rng>(entries: &[VocabEntry], rng: &mut R) -> Puzzle {
    let candidates = normalize(entries, rng);
    let candidate_count = candidates.len();

    let (grid, placed) = place_all(candidates);
    info!(
        "placed {}/{} candidates ({} cells filled)",
        placed.len(),
        candidate_count,
        grid.filled_count()
    );

    Puzzle::from_layout(&grid, &placed)
}

/// Convenience wrapper: generate with a `StdRng` seeded from `seed`, so
/// callers (and tests) can reproduce a layout exactly.
pub fn generate_puzzle_seeded(entries: &[VocabEntry], seed: u64) -> Puzzle {
    generate_puzzle(entries, &mut StdRng::seed_from_u64(seed))
}

/// Run the greedy pass over an ordered candidate list.
fn place_all(candidates: Vec<Candidate>) -> (Grid, Vec<PlacedWord>) {
    let mut grid = Grid::default();
    let mut placed: Vec<PlacedWord> = Vec::new();
    let mut iter = candidates.into_iter();

    // Seed word: across, centered on the middle row. The normalizer only
    // emits grid-sized words and the grid is empty, so no feasibility check
    // is needed.
    if let Some(seed) = iter.next() {
        let chars: Vec<char> = seed.text.chars().collect();
        let row = GRID_SIZE / 2;
        let col = (GRID_SIZE - chars.len()) / 2;
        grid = grid.with_word(&chars, row, col, Direction::Across);
        debug!("seed '{}' across at ({row}, {col})", seed.text);
        placed.push(PlacedWord {
            text: seed.text,
            clue: seed.clue,
            row,
            col,
            direction: Direction::Across,
        });
    }

    for candidate in iter {
        let chars: Vec<char> = candidate.text.chars().collect();
        match best_placement(&grid, &placed, &chars) {
            Some(p) => {
                grid = grid.with_word(&chars, p.row, p.col, p.direction);
                debug!(
                    "placed '{}' {} at ({}, {}), score {}",
                    candidate.text, p.direction, p.row, p.col, p.score
                );
                placed.push(PlacedWord {
                    text: candidate.text,
                    clue: candidate.clue,
                    row: p.row,
                    col: p.col,
                    direction: p.direction,
                });
            }
            None => debug!("dropping '{}': no feasible placement", candidate.text),
        }
    }

    (grid, placed)
}

/// Enumerate every (placed word, matching character pair) and keep the
/// first feasible placement with the strictly highest score. An equal score
/// never displaces the incumbent, so layout is deterministic for a fixed
/// candidate order.
fn best_placement(grid: &Grid, placed: &[PlacedWord], chars: &[char]) -> Option<Placement> {
    let mut best: Option<Placement> = None;

    for word in placed {
        let direction = word.direction.perpendicular();

        for (i, wc) in word.text.chars().enumerate() {
            for (j, &cc) in chars.iter().enumerate() {
                if wc != cc {
                    continue;
                }

                // The intersection is the placed word's i-th cell; backing
                // up j steps along the perpendicular gives our start. That
                // start can fall off the grid, which score_placement treats
                // as out of bounds.
                let (int_row, int_col) = match word.direction {
                    Direction::Across => (word.row as isize, word.col as isize + i as isize),
                    Direction::Down => (word.row as isize + i as isize, word.col as isize),
                };
                let (row, col) = match direction {
                    Direction::Across => (int_row, int_col - j as isize),
                    Direction::Down => (int_row - j as isize, int_col),
                };

                if let Some(score) = grid.score_placement(chars, row, col, direction) {
                    if best.map_or(true, |b| score > b.score) {
                        best = Some(Placement {
                            row: row as usize,
                            col: col as usize,
                            direction,
                            score,
                        });
                    }
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(text: &str) -> Candidate {
        Candidate { text: text.to_string(), clue: format!("clue for {text}") }
    }

    #[test]
    fn test_seed_word_is_centered() {
        let (grid, placed) = place_all(vec![candidate("あいうえお")]);

        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].row, 7);
        assert_eq!(placed[0].col, 5);
        assert_eq!(placed[0].direction, Direction::Across);
        assert_eq!(grid.at(7, 5), Some('あ'));
        assert_eq!(grid.at(7, 9), Some('お'));
        assert_eq!(grid.filled_count(), 5);
    }

    #[test]
    fn test_two_words_cross_on_shared_character() {
        let (grid, placed) = place_all(vec![candidate("こども"), candidate("ねこ")]);

        assert_eq!(placed.len(), 2);
        // len(こども) + len(ねこ) − 1 shared cell
        assert_eq!(grid.filled_count(), 4);
        assert_eq!(placed[1].direction, Direction::Down);
    }

    #[test]
    fn test_word_with_no_shared_character_is_dropped() {
        let (grid, placed) = place_all(vec![candidate("こども"), candidate("さかな")]);

        assert_eq!(placed.len(), 1);
        assert_eq!(grid.filled_count(), 3);
    }

    #[test]
    fn test_higher_scoring_placement_wins() {
        // Two parallel down words ending in こ, one column apart on each
        // side. An across word starting and ending in こ can bridge both
        // (score 2) or hang off just one of them (score 1); the double
        // intersection must win.
        let grid = Grid::default()
            .with_word(&"ねこ".chars().collect::<Vec<_>>(), 6, 4, Direction::Down)
            .with_word(&"とこ".chars().collect::<Vec<_>>(), 6, 8, Direction::Down);
        let placed = vec![
            PlacedWord {
                text: "ねこ".into(),
                clue: "cat".into(),
                row: 6,
                col: 4,
                direction: Direction::Down,
            },
            PlacedWord {
                text: "とこ".into(),
                clue: "alcove".into(),
                row: 6,
                col: 8,
                direction: Direction::Down,
            },
        ];

        let chars: Vec<char> = "こあいうこ".chars().collect();
        let best = best_placement(&grid, &placed, &chars).unwrap();

        assert_eq!(best.score, 2);
        assert_eq!((best.row, best.col), (7, 4));
        assert_eq!(best.direction, Direction::Across);
    }

    #[test]
    fn test_empty_candidate_list() {
        let (grid, placed) = place_all(Vec::new());
        assert!(placed.is_empty());
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_first_found_wins_score_ties() {
        // こい can hang off either こ of ここあ at equal score; the tie must
        // resolve to the earliest pair enumerated, which is the placed
        // word's first matching character.
        let (_, placed) = place_all(vec![candidate("ここあ"), candidate("こい")]);

        assert_eq!(placed.len(), 2);
        // ここあ sits at row 7, cols 6..8; both こ cells tie at score 1, so
        // the crossing word starts on the first one (col 6).
        assert_eq!(placed[1].col, 6);
        assert_eq!(placed[1].row, 7);
        assert_eq!(placed[1].direction, Direction::Down);
    }
}
