//! Classical constraint propagation.
//!
//! Before any circuit is synthesized, the puzzle is shrunk by repeatedly
//! eliminating digits that a row, column or sub-grid already contains. Cells
//! left with a single candidate become fixed; the loop runs full passes until
//! a pass fixes nothing. What remains undetermined afterwards is exactly the
//! search space handed to the quantum stage.

use log::debug;

use crate::bitset::DigitSet;
use crate::board::{Board, Candidate, Cell, Digit};
use crate::errors::Error;

/// The result of running the propagator to its fixed point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    /// The board with all deduced digits filled in.
    pub board: Board,
    /// All determined cells (givens and deduced), row-major.
    pub fixed: Vec<Candidate>,
    /// All `(row, col, digit)` triples still possible for open cells,
    /// row-major and ascending in digit.
    pub open: Vec<Candidate>,
}

/// Fixed-point digit-exclusion propagator.
///
/// Termination is guaranteed: the set of fixed cells grows monotonically and
/// is bounded by the board area.
#[derive(Clone, Debug)]
pub struct Propagator {
    board: Board,
    row_used: Vec<DigitSet>,
    col_used: Vec<DigitSet>,
    subgrid_used: Vec<DigitSet>,
}

impl Propagator {
    /// Creates a propagator seeded with the exclusion sets of the given board.
    pub fn new(board: &Board) -> Propagator {
        let side = board.side() as usize;
        let mut propagator = Propagator {
            board: board.clone(),
            row_used: vec![DigitSet::NONE; side],
            col_used: vec![DigitSet::NONE; side],
            subgrid_used: vec![DigitSet::NONE; side],
        };
        for cell in board.cells() {
            if let Some(digit) = board.get(cell) {
                propagator.mark_used(cell, digit);
            }
        }
        propagator
    }

    fn mark_used(&mut self, cell: Cell, digit: Digit) {
        let size = self.board.size();
        self.row_used[cell.row as usize].insert(digit);
        self.col_used[cell.col as usize].insert(digit);
        self.subgrid_used[cell.subgrid_index(size)].insert(digit);
    }

    /// Digits not excluded for the given cell by its row, column or sub-grid.
    fn allowed(&self, cell: Cell) -> DigitSet {
        let size = self.board.size();
        let excluded = self.row_used[cell.row as usize]
            .union(self.col_used[cell.col as usize])
            .union(self.subgrid_used[cell.subgrid_index(size)]);
        DigitSet::all(self.board.side()).without(excluded)
    }

    /// Runs full exclusion passes until no pass fixes a new cell, then
    /// returns the reduced board together with the fixed and open candidates.
    ///
    /// A cell without any remaining candidate makes the puzzle infeasible and
    /// aborts propagation with [`Error::InfeasiblePuzzle`].
    pub fn propagate(mut self) -> Result<Reduction, Error> {
        let mut pass = 0usize;
        loop {
            pass += 1;
            let mut newly_fixed = Vec::new();
            for cell in self.board.cells() {
                if self.board.get(cell).is_some() {
                    continue;
                }
                let allowed = self.allowed(cell);
                match allowed.unique() {
                    Err(_) => {
                        return Err(Error::InfeasiblePuzzle {
                            row: cell.row,
                            col: cell.col,
                        })
                    }
                    Ok(Some(digit)) => newly_fixed.push((cell, digit)),
                    Ok(None) => {}
                }
            }
            if newly_fixed.is_empty() {
                debug!("propagation converged after {} passes", pass);
                break;
            }
            debug!("pass {}: fixed {} cells", pass, newly_fixed.len());
            for &(cell, digit) in &newly_fixed {
                self.board.set(cell, digit);
                self.mark_used(cell, digit);
            }
        }

        let mut fixed = Vec::new();
        let mut open = Vec::new();
        for cell in self.board.cells() {
            match self.board.get(cell) {
                Some(digit) => fixed.push(Candidate {
                    row: cell.row,
                    col: cell.col,
                    digit,
                }),
                None => {
                    for digit in self.allowed(cell).iter() {
                        open.push(Candidate {
                            row: cell.row,
                            col: cell.col,
                            digit,
                        });
                    }
                }
            }
        }
        Ok(Reduction {
            board: self.board,
            fixed,
            open,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Digit;

    fn board_4x4(bytes: &[u8; 16]) -> Board {
        Board::from_slice(2, bytes).unwrap()
    }

    #[test]
    fn single_given_survives() {
        let board = board_4x4(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let reduction = Propagator::new(&board).propagate().unwrap();
        assert_eq!(reduction.fixed, vec![Candidate::new(0, 0, 1)]);
        // no open candidate may conflict with the given
        for c in &reduction.open {
            assert!(!(c.row == 0 && c.col == 0));
            let same_house = c.row == 0 || c.col == 0 || (c.row < 2 && c.col < 2);
            assert!(!(same_house && c.digit == Digit::new(1)));
        }
    }

    #[test]
    fn nearly_complete_board_is_finished() {
        // one missing cell per row: propagation must fill all of them
        let board = board_4x4(&[1, 2, 3, 0, 3, 4, 0, 2, 2, 0, 4, 3, 0, 3, 2, 1]);
        let reduction = Propagator::new(&board).propagate().unwrap();
        assert!(reduction.open.is_empty());
        assert!(reduction.board.is_filled());
        assert_eq!(reduction.fixed.len(), 16);
    }

    #[test]
    fn fixed_digits_never_repeat_in_a_house() {
        let board = board_4x4(&[1, 0, 0, 0, 0, 4, 0, 0, 0, 2, 0, 0, 3, 0, 0, 0]);
        let reduction = Propagator::new(&board).propagate().unwrap();
        let mut rows = vec![DigitSet::NONE; 4];
        let mut cols = vec![DigitSet::NONE; 4];
        let mut subs = vec![DigitSet::NONE; 4];
        for c in &reduction.fixed {
            let sub = (c.row / 2 * 2 + c.col / 2) as usize;
            assert!(!rows[c.row as usize].contains(c.digit));
            assert!(!cols[c.col as usize].contains(c.digit));
            assert!(!subs[sub].contains(c.digit));
            rows[c.row as usize].insert(c.digit);
            cols[c.col as usize].insert(c.digit);
            subs[sub].insert(c.digit);
        }
    }

    #[test]
    fn exhausted_cell_is_infeasible() {
        // cell (0, 3) sees 1 and 2 in its row, 3 in its column and 4 in its
        // sub-grid: no digit remains
        let board = board_4x4(&[1, 2, 0, 0, 0, 0, 0, 4, 0, 0, 0, 3, 0, 0, 0, 0]);
        let err = Propagator::new(&board).propagate().unwrap_err();
        assert_eq!(err, Error::InfeasiblePuzzle { row: 0, col: 3 });
    }
}
