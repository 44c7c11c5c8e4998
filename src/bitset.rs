//! A compact set of digits.
//!
//! Constraint propagation spends most of its time intersecting and unioning
//! sets of digits, so they are stored as bitmasks rather than hash sets.
//! The side length of a board is a runtime value here, which is why this is a
//! single u64-backed set instead of one fixed-size type per element kind.

use crate::board::Digit;

/// Set of digits `1..=side`, stored as a bitmask.
///
/// Bit `d - 1` is set iff digit `d` is in the set. Boards up to side length
/// 64 (sub-grid size 8) fit; larger boards are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u64);

/// Returned by [`DigitSet::unique`] when the set contains no digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty;

impl DigitSet {
    /// The empty set.
    pub const NONE: DigitSet = DigitSet(0);

    /// Set containing every digit of a board with the given side length.
    ///
    /// # Panics
    /// Panics if `side > 64`.
    pub fn all(side: u8) -> DigitSet {
        assert!(side <= 64);
        if side == 64 {
            DigitSet(!0)
        } else {
            DigitSet((1 << side) - 1)
        }
    }

    /// Inserts a digit into the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.as_index();
    }

    /// Checks whether `digit` is in the set.
    pub fn contains(&self, digit: Digit) -> bool {
        self.0 & (1 << digit.as_index()) != 0
    }

    /// Returns the set of digits in this set that aren't present in `other`.
    pub fn without(self, other: DigitSet) -> DigitSet {
        DigitSet(self.0 & !other.0)
    }

    /// Union of `self` and `other`.
    pub fn union(self, other: DigitSet) -> DigitSet {
        DigitSet(self.0 | other.0)
    }

    /// Returns the number of digits in this set.
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Checks whether this set contains any digit.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the only digit in this set, iff exactly 1 digit exists.
    /// Returns `Err(Empty)` for the empty set and `Ok(None)` for larger sets.
    pub fn unique(self) -> Result<Option<Digit>, Empty> {
        match self.len() {
            0 => Err(Empty),
            1 => Ok(Some(Digit::from_index(self.0.trailing_zeros() as u8))),
            _ => Ok(None),
        }
    }

    /// Iterator over the digits in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Iter(self.0)
    }
}

struct Iter(u64);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let bit_pos = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_index(bit_pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_len() {
        let set = DigitSet::all(9);
        assert_eq!(set.len(), 9);
        assert!(set.contains(Digit::new(1)));
        assert!(set.contains(Digit::new(9)));
    }

    #[test]
    fn unique() {
        let mut set = DigitSet::NONE;
        assert_eq!(set.unique(), Err(Empty));
        set.insert(Digit::new(4));
        assert_eq!(set.unique(), Ok(Some(Digit::new(4))));
        set.insert(Digit::new(7));
        assert_eq!(set.unique(), Ok(None));
    }

    #[test]
    fn without_removes_excluded_digits() {
        let mut used = DigitSet::NONE;
        used.insert(Digit::new(1));
        used.insert(Digit::new(3));
        let open = DigitSet::all(4).without(used);
        let digits: Vec<_> = open.iter().map(Digit::get).collect();
        assert_eq!(digits, vec![2, 4]);
    }
}
