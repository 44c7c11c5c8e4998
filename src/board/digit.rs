use std::num::NonZeroU8;

// define digit separately because it has an offset
/// A digit that can be entered in a cell of a sudoku.
///
/// The upper bound depends on the board it is used with; digits are checked
/// against the side length at the board boundary, not here.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panics
    /// Panics, if `digit` is 0.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).expect("digit must be nonzero")
    }

    /// Constructs a new `Digit`. Returns `None` for 0.
    pub fn new_checked(digit: u8) -> Option<Self> {
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a new `Digit` from an index, i.e. `digit - 1`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Self::new(idx + 1)
    }

    /// Returns an iterator over all digits of a board with the given side length.
    pub fn all(side: u8) -> impl Iterator<Item = Self> {
        (1..=side).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the number contained within as `usize`, offset by `-1`.
    /// Guarantees that the numbering starts from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}
