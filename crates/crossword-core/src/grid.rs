use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default grid size (5x5)
pub const DEFAULT_SIZE: usize = 5;

/// A cell coordinate: `x` is the column, `y` is the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Top-left cell
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Check whether this position lies inside an `size` x `size` grid
    pub fn in_bounds(&self, size: usize) -> bool {
        self.x < size && self.y < size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Typing direction of the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Across,
    Down,
}

impl Direction {
    /// The other direction
    pub fn toggled(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "across" => Ok(Direction::Across),
            "down" => Ok(Direction::Down),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

/// Contents of a single grid cell.
///
/// On the wire a square is a string: `""` for an empty square and a
/// one-letter string otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Square {
    #[default]
    Empty,
    Letter(char),
}

impl Square {
    /// Build a letter square, normalising to uppercase.
    /// Returns `None` for anything that is not an ASCII letter.
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Square::Letter(c.to_ascii_uppercase()))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }

    pub fn is_filled(&self) -> bool {
        !self.is_empty()
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Square::Empty => None,
            Square::Letter(c) => Some(*c),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Square::Empty),
            (Some(c), None) => {
                Square::letter(c).ok_or_else(|| format!("'{}' is not a letter", s))
            }
            _ => Err(format!("'{}' is not a single letter", s)),
        }
    }
}

impl TryFrom<String> for Square {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Square::try_from(s.as_str())
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.as_char().map(String::from).unwrap_or_default()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Letter(c) => write!(f, "{}", c),
        }
    }
}

/// A square N x N grid of squares, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    squares: Vec<Square>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Build a grid from rows. The caller guarantees the rows form a square.
    pub(crate) fn from_rows(rows: Vec<Vec<Square>>) -> Self {
        let size = rows.len();
        Self {
            size,
            squares: rows.into_iter().flatten().collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Square {
        self.squares[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, square: Square) {
        let idx = self.index(pos);
        self.squares[idx] = square;
    }

    /// Check if every square holds a letter
    pub fn is_filled(&self) -> bool {
        self.squares.iter().all(Square::is_filled)
    }

    /// Number of empty squares
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_empty()).count()
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.max(1))
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Square>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.in_bounds(self.size), "{} outside {}x{}", pos, self.size, self.size);
        pos.y * self.size + pos.x
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for square in row {
                write!(f, "{}", square)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_parsing() {
        assert_eq!(Square::try_from("a"), Ok(Square::Letter('A')));
        assert_eq!(Square::try_from("Q"), Ok(Square::Letter('Q')));
        assert_eq!(Square::try_from(""), Ok(Square::Empty));
        assert_eq!(Square::try_from(" "), Ok(Square::Empty));
        assert!(Square::try_from("AB").is_err());
        assert!(Square::try_from("7").is_err());
    }

    #[test]
    fn test_square_wire_format() {
        let json = serde_json::to_string(&vec![Square::Letter('C'), Square::Empty]).unwrap();
        assert_eq!(json, r#"["C",""]"#);
    }

    #[test]
    fn test_direction_toggle_and_parse() {
        assert_eq!(Direction::Across.toggled(), Direction::Down);
        assert_eq!(Direction::Down.toggled(), Direction::Across);
        assert_eq!("Down".parse::<Direction>(), Ok(Direction::Down));
        assert!("diagonal".parse::<Direction>().is_err());
    }

    #[test]
    fn test_grid_set_and_fill() {
        let mut grid = Grid::empty(2);
        assert_eq!(grid.empty_count(), 4);
        assert!(!grid.is_filled());

        for pos in grid.positions().collect::<Vec<_>>() {
            grid.set(pos, Square::Letter('X'));
        }
        assert!(grid.is_filled());
        assert_eq!(grid.get(Position::new(1, 0)), Square::Letter('X'));
        assert_eq!(grid.to_string(), "XX\nXX\n");
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::empty(2);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }
}
