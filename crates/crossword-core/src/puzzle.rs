use crate::grid::{Direction, Grid, Position, Square};
use crate::numbering::{self, Numbering};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder clue text used by the sample puzzle
pub const PLACEHOLDER_CLUE: &str = "---";

/// Clue text keyed by clue number, one map per direction.
///
/// On the wire the keys are strings (`{"across": {"1": "..."}}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Clues {
    #[serde(default)]
    pub across: BTreeMap<u32, String>,
    #[serde(default)]
    pub down: BTreeMap<u32, String>,
}

impl Clues {
    pub fn for_direction(&self, direction: Direction) -> &BTreeMap<u32, String> {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    pub fn get(&self, number: u32, direction: Direction) -> Option<&str> {
        self.for_direction(direction).get(&number).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }
}

/// A loaded puzzle: the answer grid, its clue numbers and the clue text.
///
/// Immutable once built; loading a new puzzle replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    answers: Grid,
    numbering: Numbering,
    clues: Clues,
}

impl Puzzle {
    /// Build a puzzle from an answer grid and its clues
    pub fn new(answers: Grid, clues: Clues) -> Self {
        let numbering = Numbering::for_size(answers.size());
        Self {
            answers,
            numbering,
            clues,
        }
    }

    /// The sample puzzle shown before anything is loaded: consecutive
    /// letters in row-major order and a placeholder for every clue.
    pub fn sample(size: usize) -> Self {
        let rows = (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| {
                        let offset = ((y * size + x) % 26) as u8;
                        Square::Letter((b'A' + offset) as char)
                    })
                    .collect()
            })
            .collect();

        let clues = Clues {
            across: numbering::across_numbers(size)
                .map(|n| (n, PLACEHOLDER_CLUE.to_string()))
                .collect(),
            down: numbering::down_numbers(size)
                .map(|n| (n, PLACEHOLDER_CLUE.to_string()))
                .collect(),
        };

        Self::new(Grid::from_rows(rows), clues)
    }

    pub fn size(&self) -> usize {
        self.answers.size()
    }

    pub fn answers(&self) -> &Grid {
        &self.answers
    }

    pub fn answer(&self, pos: Position) -> Square {
        self.answers.get(pos)
    }

    pub fn numbering(&self) -> &Numbering {
        &self.numbering
    }

    pub fn clues(&self) -> &Clues {
        &self.clues
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::sample(crate::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_puzzle() {
        let puzzle = Puzzle::sample(5);
        assert_eq!(puzzle.size(), 5);
        assert_eq!(puzzle.answer(Position::new(0, 0)), Square::Letter('A'));
        assert_eq!(puzzle.answer(Position::new(4, 0)), Square::Letter('E'));
        assert_eq!(puzzle.answer(Position::new(4, 4)), Square::Letter('Y'));

        let across: Vec<_> = puzzle.clues().across.keys().copied().collect();
        let down: Vec<_> = puzzle.clues().down.keys().copied().collect();
        assert_eq!(across, vec![1, 6, 7, 8, 9]);
        assert_eq!(down, vec![1, 2, 3, 4, 5]);
        assert_eq!(puzzle.clues().get(6, Direction::Across), Some(PLACEHOLDER_CLUE));
    }

    #[test]
    fn test_sample_wraps_alphabet() {
        let puzzle = Puzzle::sample(6);
        // 27th cell wraps back to A
        assert_eq!(puzzle.answer(Position::new(2, 4)), Square::Letter('A'));
    }

    #[test]
    fn test_clues_string_keys() {
        let clues: Clues =
            serde_json::from_str(r#"{"across": {"1": "Feline"}, "down": {"2": "Canine"}}"#).unwrap();
        assert_eq!(clues.get(1, Direction::Across), Some("Feline"));
        assert_eq!(clues.get(2, Direction::Down), Some("Canine"));
        assert_eq!(clues.get(2, Direction::Across), None);
    }

    #[test]
    fn test_numbering_follows_answer_size() {
        let puzzle = Puzzle::sample(4);
        assert_eq!(puzzle.numbering().len(), 7);
        assert_eq!(puzzle.numbering().number_at(Position::new(0, 3)), Some(7));
    }
}
