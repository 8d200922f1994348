//! Letter/number grid addresses (`A1` .. `J10`).

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::config::{BOARD_SIZE, CELL_COUNT};

const GRID: usize = BOARD_SIZE as usize;

/// Errors produced when turning text or indices into a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Input was empty or only whitespace.
    Empty,
    /// Column letter outside `A..=J`.
    BadColumn(char),
    /// Row part missing, not a number, or written with a leading zero.
    BadRow,
    /// Numeric column/row outside the board.
    OutOfRange { col: usize, row: usize },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Empty => write!(f, "Coordinate is empty"),
            CoordError::BadColumn(c) => write!(f, "Column '{}' is not in A-J", c),
            CoordError::BadRow => write!(f, "Row must be a number from 1 to 10"),
            CoordError::OutOfRange { col, row } => {
                write!(f, "Coordinate ({}, {}) is outside the board", col, row)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}

/// One addressable cell position. Columns are letters `A..=J` and rows are
/// numbers `1..=10`; internally both are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Coordinate {
    col: u8,
    row: u8,
}

impl Coordinate {
    /// Build a coordinate from zero-based column and row.
    pub fn new(col: usize, row: usize) -> Result<Self, CoordError> {
        if col >= GRID || row >= GRID {
            return Err(CoordError::OutOfRange { col, row });
        }
        Ok(Self {
            col: col as u8,
            row: row as u8,
        })
    }

    /// Coordinate at a row-major index (`0 => A1`, `9 => J1`, `10 => A2`).
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::nth(index))
    }

    /// Caller guarantees `index < CELL_COUNT`.
    pub(crate) fn nth(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Self {
            col: (index % GRID) as u8,
            row: (index / GRID) as u8,
        }
    }

    /// Row-major index of this coordinate.
    pub fn index(self) -> usize {
        self.row as usize * GRID + self.col as usize
    }

    /// Zero-based column (`A` = 0).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Zero-based row (`1` = 0).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column letter, `'A'..='J'`.
    pub fn letter(self) -> char {
        (b'A' + self.col) as char
    }

    /// Row number as written, `1..=10`.
    pub fn number(self) -> usize {
        self.row as usize + 1
    }

    /// The coordinate `steps` columns to the right, if it is still on the board.
    pub fn step_right(self, steps: usize) -> Option<Self> {
        Self::new(self.col as usize + steps, self.row as usize).ok()
    }

    /// All 100 coordinates in row-major order: `A1, B1, .. J1, A2, .. J10`.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..CELL_COUNT).filter_map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.number())
    }
}

impl FromStr for Coordinate {
    type Err = CoordError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let mut chars = input.chars();
        let col_ch = chars.next().ok_or(CoordError::Empty)?.to_ascii_uppercase();
        if !('A'..='J').contains(&col_ch) {
            return Err(CoordError::BadColumn(col_ch));
        }
        let row_str = chars.as_str();
        if row_str.is_empty()
            || row_str.starts_with('0')
            || !row_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CoordError::BadRow);
        }
        let row: usize = row_str.parse().map_err(|_| CoordError::BadRow)?;
        if row == 0 || row > GRID {
            return Err(CoordError::BadRow);
        }
        Coordinate::new((col_ch as u8 - b'A') as usize, row - 1)
    }
}

impl TryFrom<String> for Coordinate {
    type Error = CoordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coordinate> for String {
    fn from(coord: Coordinate) -> Self {
        use alloc::string::ToString;
        coord.to_string()
    }
}
