use std::fmt;

use crate::board::{Cell, Digit};
use crate::errors::ParseBoardError;

/// An `n×n` sudoku grid with square sub-grids, `n = size²`.
///
/// Each cell holds either a definite digit or nothing. File formats are not
/// part of this crate; boards are built from in-memory data.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: u8,
    cells: Vec<Option<Digit>>,
}

impl Board {
    /// Creates an empty board with the given sub-grid size.
    ///
    /// # Panics
    /// Panics, if `size` is 0 or the side length `size²` exceeds 64.
    pub fn new(size: u8) -> Board {
        assert!(size > 0, "sub-grid size must be at least 1");
        assert!(size as u32 * size as u32 <= 64, "side length above 64 is unsupported");
        let side = (size * size) as usize;
        Board {
            size,
            cells: vec![None; side * side],
        }
    }

    /// Creates a board from a row-major byte slice, one byte per cell,
    /// with 0 denoting an empty cell.
    pub fn from_slice(size: u8, bytes: &[u8]) -> Result<Board, ParseBoardError> {
        let mut board = Board::new(size);
        let side = board.side();
        let expected = side as usize * side as usize;
        if bytes.len() != expected {
            return Err(ParseBoardError::WrongLength {
                expected,
                found: bytes.len(),
            });
        }
        for (index, &value) in bytes.iter().enumerate() {
            if value > side {
                return Err(ParseBoardError::EntryOutOfRange { index, value, side });
            }
            board.cells[index] = Digit::new_checked(value);
        }
        Ok(board)
    }

    /// Creates a board from row slices, one byte per cell, with 0 denoting
    /// an empty cell.
    ///
    /// The number of rows and the length of each row must equal the side
    /// length.
    pub fn from_rows(size: u8, rows: &[Vec<u8>]) -> Result<Board, ParseBoardError> {
        let mut board = Board::new(size);
        let side = board.side() as usize;
        if rows.len() != side {
            return Err(ParseBoardError::WrongLength {
                expected: side,
                found: rows.len(),
            });
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != side {
                return Err(ParseBoardError::WrongLength {
                    expected: side,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value > side as u8 {
                    return Err(ParseBoardError::EntryOutOfRange {
                        index: r * side + c,
                        value,
                        side: side as u8,
                    });
                }
                board.cells[r * side + c] = Digit::new_checked(value);
            }
        }
        Ok(board)
    }

    /// Returns the sub-grid size of this board.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the side length `size²`.
    #[inline]
    pub fn side(&self) -> u8 {
        self.size * self.size
    }

    /// Returns the digit in the given cell, if any.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index(self.side())]
    }

    /// Places a digit in the given cell.
    ///
    /// # Panics
    /// Panics, if the digit exceeds the side length.
    pub fn set(&mut self, cell: Cell, digit: Digit) {
        assert!(digit.get() <= self.side());
        let idx = cell.index(self.side());
        self.cells[idx] = Some(digit);
    }

    /// Checks whether every cell holds a digit.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over all cell positions, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let side = self.side();
        (0..side).flat_map(move |row| (0..side).map(move |col| Cell::new(row, col)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side();
        let width = if side > 9 { 3 } else { 2 };
        for row in 0..side {
            if row != 0 && row % self.size == 0 {
                writeln!(f)?;
            }
            for col in 0..side {
                if col != 0 && col % self.size == 0 {
                    write!(f, " ")?;
                }
                match self.get(Cell::new(row, col)) {
                    Some(digit) => write!(f, "{:>1$}", digit.get(), width)?,
                    None => write!(f, "{:>1$}", "_", width)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
