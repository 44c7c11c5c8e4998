/// A cell position on an `n×n` board, `n = size²`.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Row of the cell, starting at 0.
    pub row: u8,
    /// Column of the cell, starting at 0.
    pub col: u8,
}

impl Cell {
    /// Constructs a new cell position.
    #[inline]
    pub fn new(row: u8, col: u8) -> Cell {
        Cell { row, col }
    }

    /// Row-major index of this cell on a board with the given side length.
    #[inline]
    pub fn index(self, side: u8) -> usize {
        self.row as usize * side as usize + self.col as usize
    }

    /// Top-left corner of the sub-grid containing this cell, for the given
    /// sub-grid size.
    #[inline]
    pub fn subgrid_origin(self, size: u8) -> (u8, u8) {
        (self.row / size * size, self.col / size * size)
    }

    /// Index of the sub-grid containing this cell, counting sub-grids
    /// row-major.
    #[inline]
    pub(crate) fn subgrid_index(self, size: u8) -> usize {
        (self.row / size) as usize * size as usize + (self.col / size) as usize
    }
}
