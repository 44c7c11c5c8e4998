#![warn(missing_docs)]
//! Sudoku as a quantum search problem.
//!
//! ## Overview
//!
//! This library turns a partially filled sudoku board into an exact-cover
//! instance and synthesizes an amplitude-amplification circuit that searches
//! for its solutions. Classical constraint propagation runs first and shrinks
//! the search space; whatever it cannot decide becomes the universe and
//! subsets of an exact cover, which in turn determine the registers and gates
//! of the circuit. Circuits are plain gate lists, built for inspection and
//! resource estimation rather than execution.
//!
//! ## Example
//!
//! ```
//! use qudoku::{Board, EncodingStrategy, Puzzle, Synthesis};
//!
//! // a 4x4 board with a single given digit
//! let mut cells = [0u8; 16];
//! cells[0] = 1;
//! let board = Board::from_slice(2, &cells).unwrap();
//!
//! match Puzzle::new(board).synthesize(EncodingStrategy::Simple, 1).unwrap() {
//!     Synthesis::Solved(board) => println!("{}", board),
//!     Synthesis::Search(circuit) => {
//!         let resources = circuit.find_resources(None);
//!         println!(
//!             "{} qubits, {} gates, {} of them multi-controlled",
//!             resources.qubits, resources.gates, resources.mcx_gates
//!         );
//!     }
//! }
//! ```

pub mod bitset;
pub mod bitstring;
mod board;
pub mod circuit;
pub mod encoding;
mod errors;
mod patterns;
mod propagate;
mod resources;
mod solve;
mod synth;

pub use crate::board::{Board, Candidate, Cell, Digit};
pub use crate::errors::{Error, ParseBoardError};
pub use crate::patterns::{generate_patterns, Pattern};
pub use crate::propagate::{Propagator, Reduction};
pub use crate::resources::Resources;
pub use crate::solve::{Encoding, EncodingStrategy, Puzzle, Synthesis};
pub use crate::synth::{optimal_iterations, ExactCoverCircuit};
