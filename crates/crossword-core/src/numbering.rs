//! Clue numbering for fully open grids.
//!
//! Every cell of the top row starts an across entry and a down entry is
//! started by every cell of the left column, so numbers run `1..=N`
//! along the top row and `N+1..=2N-1` down the left column. The top-left
//! cell carries number 1 for both directions. Grids with block cells are
//! not supported by this scheme.

use crate::grid::{Direction, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A cell that carries a clue number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedCell {
    pub position: Position,
    pub number: u32,
}

/// Clue numbers keyed by cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Numbering {
    numbers: HashMap<Position, u32>,
}

impl Numbering {
    /// Number an open `size` x `size` grid
    pub fn for_size(size: usize) -> Self {
        let mut numbers = HashMap::with_capacity(size * 2);
        let mut count = 1;
        for x in 0..size {
            numbers.insert(Position::new(x, 0), count);
            count += 1;
        }
        for y in 1..size {
            numbers.insert(Position::new(0, y), count);
            count += 1;
        }
        Self { numbers }
    }

    pub fn number_at(&self, pos: Position) -> Option<u32> {
        self.numbers.get(&pos).copied()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Numbered cells sorted by number
    pub fn cells(&self) -> Vec<NumberedCell> {
        let mut cells: Vec<_> = self
            .numbers
            .iter()
            .map(|(&position, &number)| NumberedCell { position, number })
            .collect();
        cells.sort_by_key(|c| c.number);
        cells
    }
}

/// Clue numbers of the across entries of an open grid: `1, N+1, ..., 2N-1`
pub fn across_numbers(size: usize) -> impl Iterator<Item = u32> {
    let n = size as u32;
    (size > 0)
        .then_some(1)
        .into_iter()
        .chain((1..n).map(move |y| n + y))
}

/// Clue numbers of the down entries of an open grid: `1..=N`
pub fn down_numbers(size: usize) -> impl Iterator<Item = u32> {
    1..=size as u32
}

/// First cell of the entry labelled `number` in `direction`.
///
/// Across entries start in the left column (1 on the top row, `N + y`
/// below it); down entries start in the top row (`x + 1`). Returns
/// `None` when no such entry exists.
pub fn entry_start(number: u32, direction: Direction, size: usize) -> Option<Position> {
    let n = size as u32;
    let pos = match direction {
        Direction::Across if number == 1 => Position::origin(),
        Direction::Across => {
            let y = number.checked_sub(n)?;
            if y == 0 {
                return None;
            }
            Position::new(0, y as usize)
        }
        Direction::Down => Position::new(number.checked_sub(1)? as usize, 0),
    };
    pos.in_bounds(size).then_some(pos)
}

/// Number of the entry the cursor is in
pub fn entry_number(pos: Position, direction: Direction, size: usize) -> u32 {
    match direction {
        Direction::Across if pos.y == 0 => 1,
        Direction::Across => (pos.y + size) as u32,
        Direction::Down => (pos.x + 1) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_by_five_numbers() {
        let numbering = Numbering::for_size(5);
        assert_eq!(numbering.len(), 9);

        for x in 0..5 {
            assert_eq!(numbering.number_at(Position::new(x, 0)), Some(x as u32 + 1));
        }
        assert_eq!(numbering.number_at(Position::new(0, 1)), Some(6));
        assert_eq!(numbering.number_at(Position::new(0, 2)), Some(7));
        assert_eq!(numbering.number_at(Position::new(0, 3)), Some(8));
        assert_eq!(numbering.number_at(Position::new(0, 4)), Some(9));
        assert_eq!(numbering.number_at(Position::new(1, 1)), None);
    }

    #[test]
    fn test_cells_sorted() {
        let cells = Numbering::for_size(3).cells();
        let numbers: Vec<_> = cells.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(cells[3].position, Position::new(0, 1));
    }

    #[test]
    fn test_entry_lists() {
        assert_eq!(across_numbers(5).collect::<Vec<_>>(), vec![1, 6, 7, 8, 9]);
        assert_eq!(down_numbers(5).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(across_numbers(0).count(), 0);
    }

    #[test]
    fn test_entry_start() {
        assert_eq!(entry_start(1, Direction::Across, 5), Some(Position::new(0, 0)));
        assert_eq!(entry_start(6, Direction::Across, 5), Some(Position::new(0, 1)));
        assert_eq!(entry_start(9, Direction::Across, 5), Some(Position::new(0, 4)));
        assert_eq!(entry_start(3, Direction::Down, 5), Some(Position::new(2, 0)));
        assert_eq!(entry_start(5, Direction::Down, 5), Some(Position::new(4, 0)));
    }

    #[test]
    fn test_entry_start_rejects_unknown_numbers() {
        assert_eq!(entry_start(3, Direction::Across, 5), None);
        assert_eq!(entry_start(5, Direction::Across, 5), None);
        assert_eq!(entry_start(10, Direction::Across, 5), None);
        assert_eq!(entry_start(0, Direction::Down, 5), None);
        assert_eq!(entry_start(6, Direction::Down, 5), None);
    }

    #[test]
    fn test_entry_number_inverts_entry_start() {
        for number in across_numbers(7) {
            let pos = entry_start(number, Direction::Across, 7).unwrap();
            assert_eq!(entry_number(pos, Direction::Across, 7), number);
        }
        for number in down_numbers(7) {
            let pos = entry_start(number, Direction::Down, 7).unwrap();
            assert_eq!(entry_number(pos, Direction::Down, 7), number);
        }
    }
}
