//! Exact-cover encoding of a reduced puzzle.
//!
//! Every surviving candidate must satisfy four constraints: its cell is
//! filled, its row has the digit, its column has the digit and its sub-grid
//! has the digit. The universe is the set of all constraints touched by at
//! least one candidate; a subset is the list of constraints one choice
//! (a candidate, or a whole-board pattern) satisfies. A sudoku solution is an
//! exact cover: a family of subsets hitting every universe element once.

use std::collections::{BTreeMap, HashMap};

use crate::board::{Candidate, Digit};
use crate::errors::Error;
use crate::patterns::Pattern;

/// One constraint an exact cover must satisfy exactly once.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    /// Cell `(row, col)` is filled.
    Cell {
        /// row of the cell
        row: u8,
        /// column of the cell
        col: u8,
    },
    /// Row `row` contains `digit`.
    RowDigit {
        /// the row
        row: u8,
        /// the digit
        digit: Digit,
    },
    /// Column `col` contains `digit`.
    ColDigit {
        /// the column
        col: u8,
        /// the digit
        digit: Digit,
    },
    /// The sub-grid with top-left corner `(row0, col0)` contains `digit`.
    SubgridDigit {
        /// top row of the sub-grid
        row0: u8,
        /// leftmost column of the sub-grid
        col0: u8,
        /// the digit
        digit: Digit,
    },
}

/// The four constraints satisfied by placing a candidate, in a fixed order.
pub fn projections(candidate: Candidate, size: u8) -> [Element; 4] {
    let (row0, col0) = candidate.cell().subgrid_origin(size);
    [
        Element::Cell {
            row: candidate.row,
            col: candidate.col,
        },
        Element::RowDigit {
            row: candidate.row,
            digit: candidate.digit,
        },
        Element::ColDigit {
            col: candidate.col,
            digit: candidate.digit,
        },
        Element::SubgridDigit {
            row0,
            col0,
            digit: candidate.digit,
        },
    ]
}

/// Deduplicated, insertion-ordered set of universe elements.
///
/// Elements are referenced everywhere else by their index in this set, so
/// the insertion order (candidate order) is part of the encoding contract:
/// it is what lines the counting registers up with the gate construction.
#[derive(Clone, Debug, Default)]
pub struct Universe {
    elements: Vec<Element>,
    index: HashMap<Element, usize>,
}

impl Universe {
    /// Creates an empty universe.
    pub fn new() -> Universe {
        Universe::default()
    }

    /// Inserts an element if not yet present and returns its index.
    pub fn insert(&mut self, element: Element) -> usize {
        if let Some(&idx) = self.index.get(&element) {
            return idx;
        }
        let idx = self.elements.len();
        self.elements.push(element);
        self.index.insert(element, idx);
        idx
    }

    /// Returns the index of an element, if it is part of the universe.
    pub fn index_of(&self, element: &Element) -> Option<usize> {
        self.index.get(element).copied()
    }

    /// The elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Checks whether the universe has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A keyed subset of the universe, stored as element indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subset {
    /// Key of this subset; also the index of its selection qubit.
    pub key: usize,
    /// Indices into the universe of the elements this subset covers.
    pub elements: Vec<usize>,
}

/// Builds the universe for the given open candidates: the union of the four
/// constraint projections over all of them.
///
/// An empty candidate list yields an empty universe; the caller must treat
/// that as "already solved" rather than synthesize a circuit over it.
pub fn build_universe(open: &[Candidate], size: u8) -> Universe {
    let mut universe = Universe::new();
    for &candidate in open {
        for element in projections(candidate, size) {
            universe.insert(element);
        }
    }
    universe
}

/// Builds one subset per open candidate, keyed in candidate order.
///
/// Each subset covers exactly the candidate's four projected constraints.
pub fn build_simple_subsets(
    open: &[Candidate],
    universe: &Universe,
    size: u8,
) -> Result<Vec<Subset>, Error> {
    let mut subsets = Vec::with_capacity(open.len());
    for (key, &candidate) in open.iter().enumerate() {
        let mut elements = Vec::with_capacity(4);
        for element in projections(candidate, size) {
            let idx = universe
                .index_of(&element)
                .ok_or(Error::InvalidEncodingInput { subset: key })?;
            elements.push(idx);
        }
        subsets.push(Subset { key, elements });
    }
    Ok(subsets)
}

/// Builds one subset per valid pattern, spanning the whole board.
///
/// Positions already fixed for the pattern's digit are pre-satisfied and
/// omitted from coverage, so the counting circuit does not count them twice.
/// A pattern whose every position is fixed contributes no subset at all.
pub fn build_pattern_subsets(
    patterns: &BTreeMap<Digit, Vec<Pattern>>,
    fixed: &[Candidate],
    universe: &Universe,
    size: u8,
) -> Result<Vec<Subset>, Error> {
    let mut omitted: BTreeMap<Digit, Vec<(u8, u8)>> = BTreeMap::new();
    for c in fixed {
        omitted.entry(c.digit).or_insert_with(Vec::new).push((c.row, c.col));
    }

    let mut subsets = Vec::new();
    let mut key = 0;
    for (&digit, list) in patterns {
        let pre_satisfied = omitted.get(&digit).map(Vec::as_slice).unwrap_or(&[]);
        for pattern in list {
            let mut elements = Vec::new();
            for (col, &row) in pattern.rows().iter().enumerate() {
                let col = col as u8;
                if pre_satisfied.contains(&(row, col)) {
                    continue;
                }
                let candidate = Candidate { row, col, digit };
                for element in projections(candidate, size) {
                    let idx = universe
                        .index_of(&element)
                        .ok_or(Error::InvalidEncodingInput { subset: key })?;
                    elements.push(idx);
                }
            }
            if !elements.is_empty() {
                subsets.push(Subset { key, elements });
                key += 1;
            }
        }
    }
    Ok(subsets)
}
