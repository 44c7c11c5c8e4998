//! The pipeline from a partially filled board to a search circuit.
//!
//! `Puzzle` strings the stages together: classical propagation, exact-cover
//! encoding and circuit synthesis. Boards that propagation finishes on its
//! own never reach the synthesizer.

use std::collections::BTreeMap;

use log::info;

use crate::board::{Board, Candidate, Cell, Digit};
use crate::encoding::{self, Subset, Universe};
use crate::errors::Error;
use crate::patterns::{self, Pattern};
use crate::propagate::{Propagator, Reduction};
use crate::synth::ExactCoverCircuit;

/// How open candidates are turned into exact-cover subsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EncodingStrategy {
    /// One subset per open candidate, covering its four constraints.
    Simple,
    /// One subset per valid whole-board placement pattern of a digit.
    Pattern,
}

/// An exact-cover encoding of a reduced puzzle, with enough bookkeeping to
/// map selected subsets back onto the board.
#[derive(Clone, Debug)]
pub struct Encoding {
    /// The constraint universe.
    pub universe: Universe,
    /// The subsets, keyed consecutively from 0.
    pub subsets: Vec<Subset>,
    placements: Vec<Vec<Candidate>>,
    reduction: Reduction,
}

impl Encoding {
    /// The reduction this encoding was built from.
    pub fn reduction(&self) -> &Reduction {
        &self.reduction
    }

    /// The candidates placed by choosing the subset with the given key.
    ///
    /// # Panics
    /// Panics, if the key is out of range.
    pub fn placements(&self, key: usize) -> &[Candidate] {
        &self.placements[key]
    }

    /// Applies the subsets with the given keys onto the reduced board.
    ///
    /// For an exact cover this yields a complete solution; partial or invalid
    /// selections yield a partially or inconsistently filled board, which is
    /// not checked here.
    ///
    /// # Panics
    /// Panics, if a key is out of range.
    pub fn solution_board(&self, selected: &[usize]) -> Board {
        let mut board = self.reduction.board.clone();
        for &key in selected {
            for c in &self.placements[key] {
                board.set(Cell::new(c.row, c.col), c.digit);
            }
        }
        board
    }
}

/// Outcome of [`Puzzle::synthesize`].
#[derive(Clone, Debug)]
pub enum Synthesis {
    /// Propagation alone completed the board; no circuit is needed.
    Solved(Board),
    /// The synthesized search circuit over the remaining candidates.
    Search(ExactCoverCircuit),
}

/// A sudoku instance to be reduced, encoded and synthesized.
#[derive(Clone, Debug)]
pub struct Puzzle {
    board: Board,
}

impl Puzzle {
    /// Creates a puzzle from a board.
    pub fn new(board: Board) -> Puzzle {
        Puzzle { board }
    }

    /// The board this puzzle was created from.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs constraint propagation to its fixed point.
    pub fn reduce(&self) -> Result<Reduction, Error> {
        Propagator::new(&self.board).propagate()
    }

    /// Reduces the puzzle and builds its exact-cover encoding.
    ///
    /// A fully propagated board yields an empty universe and no subsets.
    pub fn encode(&self, strategy: EncodingStrategy) -> Result<Encoding, Error> {
        let reduction = self.reduce()?;
        encode_reduction(reduction, strategy, self.board.size())
    }

    /// Reduces, encodes and synthesizes the search circuit.
    ///
    /// Returns [`Synthesis::Solved`] when propagation leaves no open cell.
    /// `num_solutions` is the caller's estimate of the number of exact covers
    /// and controls the iteration count.
    pub fn synthesize(
        &self,
        strategy: EncodingStrategy,
        num_solutions: usize,
    ) -> Result<Synthesis, Error> {
        let encoding = self.encode(strategy)?;
        if encoding.reduction.open.is_empty() {
            info!("propagation solved the puzzle, skipping synthesis");
            return Ok(Synthesis::Solved(encoding.reduction.board.clone()));
        }
        let circuit = ExactCoverCircuit::new(
            encoding.universe.clone(),
            encoding.subsets.clone(),
            num_solutions,
        )?;
        Ok(Synthesis::Search(circuit))
    }
}

fn encode_reduction(
    reduction: Reduction,
    strategy: EncodingStrategy,
    size: u8,
) -> Result<Encoding, Error> {
    let universe = encoding::build_universe(&reduction.open, size);
    let (subsets, placements) = match strategy {
        EncodingStrategy::Simple => {
            let subsets = encoding::build_simple_subsets(&reduction.open, &universe, size)?;
            let placements = reduction.open.iter().map(|&c| vec![c]).collect();
            (subsets, placements)
        }
        EncodingStrategy::Pattern => {
            let patterns = patterns::generate_patterns(&reduction.open, &reduction.fixed, size);
            let subsets =
                encoding::build_pattern_subsets(&patterns, &reduction.fixed, &universe, size)?;
            let placements = pattern_placements(&patterns, &reduction.fixed);
            (subsets, placements)
        }
    };
    debug_assert_eq!(subsets.len(), placements.len());
    info!(
        "encoded {} open candidates into {} subsets over {} universe elements",
        reduction.open.len(),
        subsets.len(),
        universe.len()
    );
    Ok(Encoding {
        universe,
        subsets,
        placements,
        reduction,
    })
}

/// Placements per pattern subset, in the key order of the subset builder.
///
/// A position fixed for the pattern's digit is already on the board and is
/// skipped; patterns with no unfixed position produce no subset and therefore
/// no placement entry either.
fn pattern_placements(
    patterns: &BTreeMap<Digit, Vec<Pattern>>,
    fixed: &[Candidate],
) -> Vec<Vec<Candidate>> {
    let mut omitted: BTreeMap<Digit, Vec<(u8, u8)>> = BTreeMap::new();
    for c in fixed {
        omitted.entry(c.digit).or_insert_with(Vec::new).push((c.row, c.col));
    }

    let mut placements = Vec::new();
    for (&digit, list) in patterns {
        let pre_satisfied = omitted.get(&digit).map(Vec::as_slice).unwrap_or(&[]);
        for pattern in list {
            let candidates: Vec<Candidate> = pattern
                .rows()
                .iter()
                .enumerate()
                .filter(|&(col, &row)| !pre_satisfied.contains(&(row, col as u8)))
                .map(|(col, &row)| Candidate {
                    row,
                    col: col as u8,
                    digit,
                })
                .collect();
            if !candidates.is_empty() {
                placements.push(candidates);
            }
        }
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_given() -> Puzzle {
        let mut bytes = [0u8; 16];
        bytes[0] = 1;
        Puzzle::new(Board::from_slice(2, &bytes).unwrap())
    }

    #[test]
    fn simple_placements_mirror_open_candidates() {
        let puzzle = single_given();
        let encoding = puzzle.encode(EncodingStrategy::Simple).unwrap();
        assert_eq!(encoding.subsets.len(), encoding.reduction().open.len());
        for (key, &candidate) in encoding.reduction().open.iter().enumerate() {
            assert_eq!(encoding.placements(key), &[candidate]);
        }
    }

    #[test]
    fn pattern_placements_align_with_subsets() {
        let puzzle = single_given();
        let encoding = puzzle.encode(EncodingStrategy::Pattern).unwrap();
        assert!(!encoding.subsets.is_empty());
        for subset in &encoding.subsets {
            // one placed cell per four covered constraints
            assert_eq!(
                encoding.placements(subset.key).len() * 4,
                subset.elements.len()
            );
        }
    }

    #[test]
    fn solution_board_fills_selected_candidates() {
        let puzzle = single_given();
        let encoding = puzzle.encode(EncodingStrategy::Simple).unwrap();
        let solution = [
            1, 2, 3, 4, //
            3, 4, 1, 2, //
            2, 1, 4, 3, //
            4, 3, 2, 1,
        ];
        let expected = Board::from_slice(2, &solution).unwrap();
        // look up the key of each solution candidate among the open ones
        let mut selected = Vec::new();
        for (index, &digit) in solution.iter().enumerate() {
            let candidate = Candidate::new(index as u8 / 4, index as u8 % 4, digit);
            if let Some(key) = encoding
                .reduction()
                .open
                .iter()
                .position(|&c| c == candidate)
            {
                selected.push(key);
            }
        }
        assert_eq!(selected.len(), 15);
        assert_eq!(encoding.solution_board(&selected), expected);
    }

    #[test]
    fn propagation_short_circuits_synthesis() {
        let board =
            Board::from_slice(2, &[1, 2, 3, 0, 3, 4, 0, 2, 2, 0, 4, 3, 0, 3, 2, 1]).unwrap();
        let puzzle = Puzzle::new(board);
        match puzzle.synthesize(EncodingStrategy::Simple, 1).unwrap() {
            Synthesis::Solved(solved) => assert!(solved.is_filled()),
            Synthesis::Search(_) => panic!("expected a solved board"),
        }
    }

    #[test]
    fn open_puzzle_synthesizes_a_search_circuit() {
        let puzzle = single_given();
        match puzzle.synthesize(EncodingStrategy::Simple, 1).unwrap() {
            Synthesis::Solved(_) => panic!("expected a search circuit"),
            Synthesis::Search(circuit) => {
                let encoding = puzzle.encode(EncodingStrategy::Simple).unwrap();
                assert_eq!(circuit.subset_count(), encoding.subsets.len());
                assert_eq!(circuit.universe_size(), encoding.universe.len());
            }
        }
    }
}
