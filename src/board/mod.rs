//! Types for cells, digits and grids of a sudoku board
mod candidate;
mod digit;
mod grid;
mod position;

pub use self::{candidate::Candidate, digit::Digit, grid::Board, position::Cell};
