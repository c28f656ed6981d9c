//! Wire types exchanged with the puzzle-generation backend.
//!
//! The backend is an external service; these types only describe the
//! request it accepts and the response it returns, and turn that response
//! into a validated [`Puzzle`].

use crate::error::PuzzleError;
use crate::grid::{Direction, Grid, Position, Square};
use crate::numbering;
use crate::puzzle::{Clues, Puzzle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of an answer grid as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GridRow {
    /// A whole row written as one word, e.g. `"CRANE"`
    Word(String),
    /// One string per square, e.g. `["C", "R", "A", "N", "E"]`
    Squares(Vec<String>),
}

impl GridRow {
    fn cells(&self) -> Vec<String> {
        match self {
            GridRow::Word(word) => word.chars().map(String::from).collect(),
            GridRow::Squares(squares) => squares.clone(),
        }
    }
}

/// The load payload: an answer grid plus across/down clue text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    pub grid: Vec<GridRow>,
    #[serde(default)]
    pub clues: Clues,
}

impl PuzzleData {
    /// Validate the grid shape and build a [`Puzzle`]
    pub fn into_puzzle(self) -> Result<Puzzle, PuzzleError> {
        let size = self.grid.len();
        if size == 0 {
            return Err(PuzzleError::EmptyGrid);
        }

        let mut rows = Vec::with_capacity(size);
        for (y, row) in self.grid.iter().enumerate() {
            let cells = row.cells();
            if cells.len() != size {
                return Err(PuzzleError::NotSquare {
                    row: y,
                    expected: size,
                    found: cells.len(),
                });
            }
            let squares = cells
                .iter()
                .enumerate()
                .map(|(x, cell)| {
                    Square::try_from(cell.as_str())
                        .map_err(|reason| PuzzleError::InvalidSquare { x, y, reason })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(squares);
        }

        Ok(Puzzle::new(Grid::from_rows(rows), self.clues))
    }
}

impl From<&Puzzle> for PuzzleData {
    fn from(puzzle: &Puzzle) -> Self {
        let grid = puzzle
            .answers()
            .rows()
            .map(|row| GridRow::Squares(row.iter().map(|&s| String::from(s)).collect()))
            .collect();
        Self {
            grid,
            clues: puzzle.clues().clone(),
        }
    }
}

/// Parameters sent to the generation backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRequest {
    pub theme: String,
    #[serde(default)]
    pub regenerate: bool,
    pub max_words: u32,
    pub max_attempts: u32,
    pub theme_words: u32,
    pub word_tokens: u32,
    pub hint_tokens: u32,
}

impl Default for PuzzleRequest {
    fn default() -> Self {
        Self {
            theme: String::new(),
            regenerate: false,
            max_words: 100,
            max_attempts: 15,
            theme_words: 3,
            word_tokens: 500,
            hint_tokens: 300,
        }
    }
}

impl PuzzleRequest {
    /// Request a puzzle for `theme` with default generation parameters
    pub fn new(theme: &str) -> Result<Self, PuzzleError> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(PuzzleError::EmptyTheme);
        }
        Ok(Self {
            theme: theme.to_string(),
            ..Self::default()
        })
    }
}

/// Response returned by the generation backend.
///
/// The grid and the clues arrive as JSON documents embedded in strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub grid_json: Option<String>,
    #[serde(default)]
    pub clues_json: Option<String>,
}

impl PuzzleResponse {
    /// Decode the embedded documents into a load payload
    pub fn to_puzzle_data(&self) -> Result<PuzzleData, PuzzleError> {
        let grid_json = self
            .grid_json
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(PuzzleError::MissingField { field: "gridJson" })?;
        let clues_json = self
            .clues_json
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(PuzzleError::MissingField { field: "cluesJson" })?;

        let grid: Vec<GridRow> = serde_json::from_str(grid_json)?;
        let mut clues: Clues = serde_json::from_str(clues_json)?;
        clues.across = across_by_row(clues.across, grid.len());

        Ok(PuzzleData { grid, clues })
    }

    pub fn into_puzzle(self) -> Result<Puzzle, PuzzleError> {
        let data = self.to_puzzle_data()?;
        log::info!(
            "decoded generated puzzle {:?} for theme '{}'",
            self.id,
            self.theme
        );
        data.into_puzzle()
    }
}

/// The backend keys across clues by row, `"1"` to `"N"`. Move row `k`
/// to the number its entry carries in the grid (`1`, then `N + 1` ...).
/// Keys above `N` are already entry numbers and stay put.
fn across_by_row(across: BTreeMap<u32, String>, size: usize) -> BTreeMap<u32, String> {
    across
        .into_iter()
        .map(|(key, clue)| match key as usize {
            row if (1..=size).contains(&row) => {
                let start = Position::new(0, row - 1);
                (numbering::entry_number(start, Direction::Across, size), clue)
            }
            _ => (key, clue),
        })
        .collect()
}

/// Parse a puzzle document that is either a load payload
/// (`{"grid": ..., "clues": ...}`) or a backend response
/// (`{"gridJson": "...", "cluesJson": "..."}`).
pub fn parse_puzzle_json(text: &str) -> Result<Puzzle, PuzzleError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.get("gridJson").is_some() || value.get("cluesJson").is_some() {
        let response: PuzzleResponse = serde_json::from_value(value)?;
        response.into_puzzle()
    } else {
        let data: PuzzleData = serde_json::from_value(value)?;
        data.into_puzzle()
    }
}
