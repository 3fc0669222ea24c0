//! `puzzle` — clue numbering and the immutable output structure.
//!
//! The extraction pass walks the finished grid in row-major order and gives
//! a number to every cell that begins an across and/or down run of length
//! ≥ 2. A single cell can carry one number serving both directions. The
//! numbered entries are matched back to the placed words by their start
//! cell and direction, and the chōon is restored everywhere on the way out:
//! the consuming UI never sees the internal placeholder.

use crate::grid::{Direction, Grid, PlacedWord, GRID_SIZE};
use crate::kana::restore_chouon;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// One numbered clue: where the word starts, which way it runs, its answer
/// text, and the translation shown to the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClueEntry {
    pub number: u32,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
    pub text: String,
    pub clue: String,
}

/// The finished puzzle. Constructed once per generation call; immutable
/// thereafter; the UI keeps its own separate user-filled grid and compares
/// it against `grid` when checking answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    /// Row-major cells; `None` cells never hold a letter in this puzzle.
    pub grid: Vec<Vec<Option<char>>>,
    pub across: Vec<ClueEntry>,
    pub down: Vec<ClueEntry>,
    /// Start cell → clue number. Serialized as a list of
    /// `{row, col, number}` records, since JSON objects can't key on pairs.
    #[serde(serialize_with = "serialize_clue_locations")]
    pub clue_locations: HashMap<(usize, usize), u32>,
}

impl Puzzle {
    /// Number the finished grid and build the sorted clue lists.
    ///
    /// `grid` and `placed` still carry the masked placeholder; everything
    /// emitted here is restored to the original spelling.
    #[must_use]
    pub fn from_layout(grid: &Grid, placed: &[PlacedWord]) -> Puzzle {
        let mut across = Vec::new();
        let mut down = Vec::new();
        let mut clue_locations = HashMap::new();
        let mut next_number = 0u32;

        let cells = grid.rows();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if cells[row][col].is_none() {
                    continue;
                }
                let (r, c) = (row as isize, col as isize);

                // A run head has nothing before it and at least one letter
                // after it, in the run's direction.
                let is_across_start = grid.at(r, c - 1).is_none() && grid.at(r, c + 1).is_some();
                let is_down_start = grid.at(r - 1, c).is_none() && grid.at(r + 1, c).is_some();

                if !is_across_start && !is_down_start {
                    continue;
                }

                next_number += 1;
                clue_locations.insert((row, col), next_number);

                if is_across_start {
                    if let Some(entry) = clue_for(placed, next_number, row, col, Direction::Across)
                    {
                        across.push(entry);
                    }
                }
                if is_down_start {
                    if let Some(entry) = clue_for(placed, next_number, row, col, Direction::Down) {
                        down.push(entry);
                    }
                }
            }
        }

        // The row-major scan already yields ascending numbers, but sorted
        // order is part of the contract, not an accident of iteration.
        across.sort_by_key(|e| e.number);
        down.sort_by_key(|e| e.number);

        let restored = grid.restored();
        Puzzle {
            grid: restored.rows().iter().map(|row| row.to_vec()).collect(),
            across,
            down,
            clue_locations,
        }
    }

    /// The clue number at a start cell, if any.
    #[must_use]
    pub fn number_at(&self, row: usize, col: usize) -> Option<u32> {
        self.clue_locations.get(&(row, col)).copied()
    }

    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.across.len() + self.down.len()
    }

    /// The caller-side failure signal: too few clues to make a coherent
    /// puzzle. The generator itself never raises; callers inspect this and
    /// present a "not enough suitable words" state instead of a near-empty
    /// grid.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.clue_count() < 2
    }

    /// Plain-text rendering of the grid, one row per line, empty cells as
    /// a katakana middle dot (full-width, so columns line up).
    #[must_use]
    pub fn render(&self) -> String {
        self.grid
            .iter()
            .map(|row| row.iter().map(|cell| cell.unwrap_or('・')).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Look up the placed word starting at `(row, col)` in `direction` and turn
/// it into a numbered, restored clue entry. The isolation rules guarantee a
/// match exists for every run head; if the lookup ever misses, the head is
/// skipped rather than panicking.
fn clue_for(
    placed: &[PlacedWord],
    number: u32,
    row: usize,
    col: usize,
    direction: Direction,
) -> Option<ClueEntry> {
    placed
        .iter()
        .find(|w| w.row == row && w.col == col && w.direction == direction)
        .map(|w| ClueEntry {
            number,
            direction,
            row,
            col,
            text: restore_chouon(&w.text),
            clue: w.clue.clone(),
        })
}

fn serialize_clue_locations<S: Serializer>(
    locations: &HashMap<(usize, usize), u32>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Location {
        row: usize,
        col: usize,
        number: u32,
    }

    let mut entries: Vec<_> = locations.iter().collect();
    entries.sort_by_key(|(_, &number)| number);

    let mut seq = serializer.serialize_seq(Some(entries.len()))?;
    for (&(row, col), &number) in entries {
        seq.serialize_element(&Location { row, col, number })?;
    }
    seq.end()
}
