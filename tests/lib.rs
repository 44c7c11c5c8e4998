use qudoku::encoding::{Element, Subset, Universe};
use qudoku::{
    optimal_iterations, Board, Candidate, EncodingStrategy, Error, ExactCoverCircuit, Puzzle,
    Synthesis,
};

fn single_given_board() -> Board {
    let mut bytes = [0u8; 16];
    bytes[0] = 1;
    Board::from_slice(2, &bytes).unwrap()
}

#[test]
fn end_to_end_simple_encoding() {
    let puzzle = Puzzle::new(single_given_board());
    let encoding = puzzle.encode(EncodingStrategy::Simple).unwrap();

    // 7 open cells see the given digit and keep 3 candidates, the other
    // 8 keep all 4
    assert_eq!(encoding.reduction().open.len(), 53);
    assert_eq!(encoding.subsets.len(), 53);
    // 15 cell constraints plus 15 row-digit, 15 column-digit and
    // 15 sub-grid-digit constraints
    assert_eq!(encoding.universe.len(), 60);
    for subset in &encoding.subsets {
        assert_eq!(subset.elements.len(), 4);
    }

    let circuit = match puzzle.synthesize(EncodingStrategy::Simple, 1).unwrap() {
        Synthesis::Search(circuit) => circuit,
        Synthesis::Solved(_) => panic!("single given cannot be solved by propagation"),
    };
    assert_eq!(circuit.subset_count(), 53);
    assert_eq!(circuit.universe_size(), 60);
    assert_eq!(circuit.counter_width(), 6);
    // 53 selection qubits, 60 counters of width 6, 1 ancilla
    assert_eq!(circuit.layout().n_qubits(), 53 + 60 * 6 + 1);
    assert_eq!(circuit.optimal_iterations(), optimal_iterations(53, 1));

    // without iterations only the initialization remains
    let resources = circuit.find_resources(Some(0));
    assert_eq!(resources.qubits, 53 + 60 * 6 + 1);
    assert_eq!(resources.gates, 53 + 2);
    assert_eq!(resources.mcx_gates, 0);
}

#[test]
fn end_to_end_pattern_encoding() {
    let puzzle = Puzzle::new(single_given_board());
    let encoding = puzzle.encode(EncodingStrategy::Pattern).unwrap();

    // digit 1 is pinned to (0, 0) and keeps 4 placement patterns; the other
    // three digits each keep the 18 permutations avoiding (0, 0)
    assert_eq!(encoding.subsets.len(), 4 + 3 * 18);
    for subset in &encoding.subsets {
        assert_eq!(subset.elements.len() % 4, 0);
    }

    let circuit = match puzzle.synthesize(EncodingStrategy::Pattern, 1).unwrap() {
        Synthesis::Search(circuit) => circuit,
        Synthesis::Solved(_) => panic!("single given cannot be solved by propagation"),
    };
    assert_eq!(circuit.subset_count(), 58);
    assert_eq!(circuit.universe_size(), 60);
    assert_eq!(circuit.counter_width(), 6);
}

#[test]
fn solved_board_short_circuits() {
    let board = Board::from_slice(2, &[1, 2, 3, 0, 3, 4, 0, 2, 2, 0, 4, 3, 0, 3, 2, 1]).unwrap();
    match Puzzle::new(board).synthesize(EncodingStrategy::Simple, 1).unwrap() {
        Synthesis::Solved(solved) => assert!(solved.is_filled()),
        Synthesis::Search(_) => panic!("propagation finishes this board on its own"),
    }
    assert_eq!(optimal_iterations(0, 1), 0);
}

#[test]
fn infeasible_board_is_reported() {
    let board = Board::from_slice(2, &[1, 2, 0, 0, 0, 0, 0, 4, 0, 0, 0, 3, 0, 0, 0, 0]).unwrap();
    let err = Puzzle::new(board)
        .synthesize(EncodingStrategy::Simple, 1)
        .unwrap_err();
    assert_eq!(err, Error::InfeasiblePuzzle { row: 0, col: 3 });
}

/// `find_resources` must agree with an actual enumeration of the emitted
/// gates, over instances of different universe and subset counts.
#[test]
fn resources_match_enumerated_gates() {
    let instances: Vec<(usize, Vec<Vec<usize>>)> = vec![
        // (universe size, element indices per subset)
        (2, vec![vec![0], vec![1], vec![0, 1]]),
        (3, vec![vec![2], vec![0, 2], vec![0], vec![1], vec![0, 1]]),
        (
            4,
            vec![
                vec![0, 1],
                vec![2, 3],
                vec![0, 3],
                vec![1, 2],
                vec![0],
                vec![3],
            ],
        ),
    ];
    for (u_size, coverage) in instances {
        let mut universe = Universe::new();
        for col in 0..u_size {
            universe.insert(Element::Cell {
                row: 0,
                col: col as u8,
            });
        }
        let subsets: Vec<Subset> = coverage
            .into_iter()
            .enumerate()
            .map(|(key, elements)| Subset { key, elements })
            .collect();
        let circuit = ExactCoverCircuit::new(universe, subsets, 1).unwrap();
        for &iterations in &[1, 2] {
            let assembled = circuit.assemble(Some(iterations));
            let resources = circuit.find_resources(Some(iterations));
            assert_eq!(resources.qubits, circuit.layout().n_qubits());
            assert_eq!(resources.gates, assembled.gate_count());
            assert_eq!(resources.mcx_gates, assembled.mcx_count());
        }
    }
}

/// A measured bitstring of the subset register maps through subset keys to a
/// completed board.
#[test]
fn measurement_to_solution_board() {
    let puzzle = Puzzle::new(single_given_board());
    let encoding = puzzle.encode(EncodingStrategy::Simple).unwrap();
    let circuit = match puzzle.synthesize(EncodingStrategy::Simple, 1).unwrap() {
        Synthesis::Search(circuit) => circuit,
        Synthesis::Solved(_) => unreachable!(),
    };

    let solution = [
        1, 2, 3, 4, //
        3, 4, 1, 2, //
        2, 1, 4, 3, //
        4, 3, 2, 1,
    ];
    let expected = Board::from_slice(2, &solution).unwrap();

    // fake the measurement outcome that selects exactly the solution's
    // candidates
    let mut bits = vec![b'0'; encoding.subsets.len()];
    for (index, &digit) in solution.iter().enumerate() {
        let candidate = Candidate::new(index as u8 / 4, index as u8 % 4, digit);
        if let Some(key) = encoding
            .reduction()
            .open
            .iter()
            .position(|&c| c == candidate)
        {
            bits[key] = b'1';
        }
    }
    let bits = String::from_utf8(bits).unwrap();

    let selected = circuit.interpret_measurement(&bits).unwrap();
    assert_eq!(selected.len(), 15);
    let solved = encoding.solution_board(&selected);
    assert_eq!(solved, expected);
    assert!(solved.is_filled());
}

#[test]
fn bitstring_interchange_roundtrip() {
    let puzzle = Puzzle::new(single_given_board());
    let reduction = puzzle.reduce().unwrap();
    let bitstrings = qudoku::bitstring::encode(&reduction.fixed, 2);
    assert_eq!(bitstrings.len(), 4);
    let decoded = qudoku::bitstring::decode(&bitstrings, 2).unwrap();
    assert_eq!(decoded, reduction.fixed);
}
