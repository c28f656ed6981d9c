use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Fill and correctness flags derived from the entry grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Completion {
    pub is_filled: bool,
    pub is_correct: bool,
}

impl Completion {
    /// Compare the player's entries against the answers cell by cell
    pub fn check(entries: &Grid, answers: &Grid) -> Self {
        let mut all_filled = true;
        let mut all_correct = true;

        for pos in entries.positions() {
            let entry = entries.get(pos);
            if entry.is_empty() {
                all_filled = false;
            }
            if entry != answers.get(pos) {
                all_correct = false;
            }
        }

        Self {
            is_filled: all_filled,
            is_correct: all_filled && all_correct,
        }
    }
}
