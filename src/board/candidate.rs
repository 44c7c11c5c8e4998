use crate::board::{Cell, Digit};

/// Represents a digit in a specific cell
///
/// A candidate exists only while the digit violates no known row, column or
/// sub-grid assignment; the propagator produces and discards them each pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct Candidate {
    pub row: u8,
    pub col: u8,
    pub digit: Digit,
}

impl Candidate {
    /// Constructs a new candidate.
    ///
    /// # Panics
    /// Panics, if `digit` is 0.
    #[inline]
    pub fn new(row: u8, col: u8, digit: u8) -> Candidate {
        Candidate {
            row,
            col,
            digit: Digit::new(digit),
        }
    }

    /// Returns the cell of this candidate
    #[inline]
    pub fn cell(self) -> Cell {
        Cell::new(self.row, self.col)
    }
}
