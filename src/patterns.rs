//! Per-digit placement patterns.
//!
//! The pattern encoding replaces "one subset per candidate" with "one subset
//! per way of placing a single digit on the whole board". A pattern assigns
//! one row to every column; it is kept only if those rows form a permutation,
//! since a digit must appear exactly once per row and once per column.

use std::collections::BTreeMap;

use crate::board::{Candidate, Digit};

/// One complete placement of a single digit: entry `col ↦ row`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<u8>);

impl Pattern {
    /// The row assigned to each column, indexed by column.
    pub fn rows(&self) -> &[u8] {
        &self.0
    }

    /// Number of columns, equal to the board side length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the pattern has no columns. Only possible for
    /// degenerate boards.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Promotes a partial assignment to a pattern, iff it is complete and its
    /// rows are pairwise distinct.
    fn from_partial(partial: &[Option<u8>]) -> Option<Pattern> {
        let mut rows = Vec::with_capacity(partial.len());
        let mut seen = 0u64;
        for entry in partial {
            let row = (*entry)?;
            let bit = 1u64 << row;
            if seen & bit != 0 {
                return None;
            }
            seen |= bit;
            rows.push(row);
        }
        Some(Pattern(rows))
    }
}

/// Enumerates, per digit, all full-board placements consistent with the fixed
/// cells and composed of open candidates.
///
/// Each digit starts from one partial pattern seeded with its fixed
/// placements. For every column that still has open candidates of that digit,
/// each partial pattern is branched once per candidate row and the parent is
/// discarded; this replaces the pattern set wholesale instead of accumulating
/// into it. Partial patterns that never complete, or complete without
/// pairwise-distinct rows, are dropped by the validity filter.
pub fn generate_patterns(
    open: &[Candidate],
    fixed: &[Candidate],
    size: u8,
) -> BTreeMap<Digit, Vec<Pattern>> {
    let side = (size * size) as usize;

    // digit -> col -> candidate rows, ordered for deterministic output
    let mut open_rows: BTreeMap<Digit, BTreeMap<u8, Vec<u8>>> = BTreeMap::new();
    for c in open {
        open_rows
            .entry(c.digit)
            .or_insert_with(BTreeMap::new)
            .entry(c.col)
            .or_insert_with(Vec::new)
            .push(c.row);
    }

    let mut patterns = BTreeMap::new();
    for digit in Digit::all(side as u8) {
        let mut seed = vec![None; side];
        for c in fixed.iter().filter(|c| c.digit == digit) {
            seed[c.col as usize] = Some(c.row);
        }
        let mut partials = vec![seed];

        if let Some(cols) = open_rows.get(&digit) {
            for (&col, rows) in cols {
                let mut branched = Vec::with_capacity(partials.len() * rows.len());
                for partial in &partials {
                    for &row in rows {
                        let mut child = partial.clone();
                        child[col as usize] = Some(row);
                        branched.push(child);
                    }
                }
                // branch-and-replace: the parents are gone for good
                partials = branched;
            }
        }

        let valid: Vec<_> = partials
            .iter()
            .filter_map(|partial| Pattern::from_partial(partial))
            .collect();
        patterns.insert(digit, valid);
    }
    patterns
}
