//! Error types for board parsing, constraint propagation and circuit synthesis.

/// Error for [`Board::from_slice`](crate::Board::from_slice)
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// Slice length does not match the board area
    #[error("byte slice should have length {expected}, found {found}")]
    WrongLength {
        /// `side²` for the requested board
        expected: usize,
        /// actual slice length
        found: usize,
    },
    /// Slice contains an entry above the side length
    #[error("entry {value} at index {index} exceeds the side length {side}")]
    EntryOutOfRange {
        /// row-major cell index of the offending entry
        index: usize,
        /// the entry itself
        value: u8,
        /// side length of the board
        side: u8,
    },
}

/// Errors surfaced by the reduction and synthesis pipeline.
///
/// Every operation in this crate is a pure transform; none of these
/// conditions is retried or recovered from.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A cell has no remaining candidate digit. The puzzle admits no solution.
    #[error("cell ({row}, {col}) has no remaining candidate digit")]
    InfeasiblePuzzle {
        /// row of the contradictory cell
        row: u8,
        /// column of the contradictory cell
        col: u8,
    },
    /// The subset list is empty: propagation already solved the puzzle and
    /// there is nothing to search over.
    #[error("no subsets to search over; the puzzle is already fully determined")]
    EmptySearchSpace,
    /// The amplitude-amplification iteration formula is undefined for zero
    /// target solutions.
    #[error("number of solutions must be at least 1")]
    InvalidSolutionCount,
    /// A subset references an element that is not part of the universe.
    #[error("subset {subset} references an element missing from the universe")]
    InvalidEncodingInput {
        /// key of the offending subset
        subset: usize,
    },
    /// The counting registers are too narrow for the maximum number of
    /// subsets that can simultaneously cover one element.
    #[error("counter width {width} cannot represent up to {max_coverage} covering subsets")]
    OverflowRisk {
        /// counter width in qubits
        width: u32,
        /// maximum number of subsets covering a single universe element
        max_coverage: usize,
    },
    /// A bitstring has the wrong length for the board it belongs to.
    #[error("bitstring has length {found}, expected {expected}")]
    BitstringLength {
        /// expected length
        expected: usize,
        /// actual length
        found: usize,
    },
    /// A bitstring contains a character other than `'0'` or `'1'`.
    #[error("bitstring contains a character other than '0' or '1'")]
    BitstringChar,
}
