//! Candidate ↔ bitstring interchange.
//!
//! Measurement post-processing tooling speaks fixed-width bitstrings, one per
//! digit: bit `row·n + col` (for side length `n`) is set iff the digit
//! occupies that cell. This module converts between that format and
//! candidate lists.

use std::collections::BTreeMap;

use crate::board::{Candidate, Digit};
use crate::errors::Error;

/// Encodes candidates as one bitstring per digit, each of length `side²`.
///
/// Every digit of the board gets an entry, including digits that occupy no
/// cell (their bitstring is all zeros).
pub fn encode(candidates: &[Candidate], size: u8) -> BTreeMap<Digit, String> {
    let side = (size * size) as usize;
    let mut bitstrings: BTreeMap<Digit, Vec<u8>> = Digit::all(side as u8)
        .map(|digit| (digit, vec![b'0'; side * side]))
        .collect();
    for c in candidates {
        let bits = bitstrings
            .get_mut(&c.digit)
            .unwrap_or_else(|| panic!("digit {} exceeds side length {}", c.digit.get(), side));
        bits[c.row as usize * side + c.col as usize] = b'1';
    }
    bitstrings
        .into_iter()
        .map(|(digit, bits)| (digit, bits.into_iter().map(char::from).collect()))
        .collect()
}

/// Decodes per-digit bitstrings back into candidates, ordered by digit, then
/// row-major by cell.
///
/// Every bitstring must have length `side²` and consist of `'0'`/`'1'` only.
pub fn decode(
    bitstrings: &BTreeMap<Digit, String>,
    size: u8,
) -> Result<Vec<Candidate>, Error> {
    let side = (size * size) as usize;
    let expected = side * side;
    let mut candidates = Vec::new();
    for (&digit, bits) in bitstrings {
        if bits.len() != expected {
            return Err(Error::BitstringLength {
                expected,
                found: bits.len(),
            });
        }
        for (index, ch) in bits.chars().enumerate() {
            match ch {
                '1' => candidates.push(Candidate {
                    row: (index / side) as u8,
                    col: (index % side) as u8,
                    digit,
                }),
                '0' => {}
                _ => return Err(Error::BitstringChar),
            }
        }
    }
    Ok(candidates)
}
