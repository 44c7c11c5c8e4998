//! Closed-form qubit and gate counting.
//!
//! Comparing encoding strategies only needs the cost of the circuit, not the
//! circuit itself. The counts here are not approximations: they must equal,
//! gate for gate, what the synthesizer emits, and the test suite enumerates
//! emitted gate lists to hold them to that.

/// Qubit and gate totals of an assembled amplitude-amplification circuit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resources {
    /// Total number of qubits (subset selection + counters + ancilla).
    pub qubits: usize,
    /// Total number of unitary gates.
    pub gates: usize,
    /// Number of multi-controlled gates (CnX and CnZ).
    pub mcx_gates: usize,
}

/// Computes the resources of a circuit over `u_size` universe elements and
/// the given per-subset coverage sizes, with `counter_width`-qubit counters,
/// run for `iterations` rounds.
pub(crate) fn estimate(
    u_size: usize,
    coverage: &[usize],
    counter_width: u32,
    iterations: usize,
) -> Resources {
    let s_size = coverage.len();
    let b = counter_width as usize;

    let superposition_gates = s_size;
    let ancilla_prep_gates = 2;
    // one b-gate controlled increment per (subset, covered element) pair
    let counter_gates: usize = coverage.iter().map(|&len| len * b).sum();
    // b - 1 negations per counter, applied before and after one CnX
    let oracle_gates = 1 + 2 * u_size * (b - 1);
    let diffuser_gates = 1 + 4 * s_size;

    // the counting circuit runs twice per iteration: build and uncompute
    let gates = superposition_gates
        + ancilla_prep_gates
        + iterations * (2 * counter_gates + oracle_gates + diffuser_gates);
    let mcx_gates = iterations * (2 * counter_gates + 2);

    Resources {
        qubits: s_size + u_size * b + 1,
        gates,
        mcx_gates,
    }
}
