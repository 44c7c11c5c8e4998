//! A minimal gate-level circuit representation.
//!
//! The synthesizer only needs Hadamard, Pauli-X, multi-controlled X and
//! multi-controlled Z plus measurement, so gates are plain data. Every
//! unitary gate used here is its own inverse, which makes uncomputation a
//! matter of replaying a gate list backwards.

use std::collections::HashMap;

/// Index of a qubit in a [`Layout`].
pub type Qubit = usize;

/// A named contiguous range of qubits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Register {
    /// Name of the register.
    pub name: String,
    /// Index of the first qubit.
    pub start: Qubit,
    /// Number of qubits.
    pub len: usize,
}

/// Assignment of named registers to contiguous qubit index ranges.
///
/// Qubits are always addressed through a register name and an offset, never
/// through implicit ordering of previously added qubits.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    registers: Vec<Register>,
    by_name: HashMap<String, usize>,
    n_qubits: usize,
}

impl Layout {
    /// Creates an empty layout.
    pub fn new() -> Layout {
        Layout::default()
    }

    /// Appends a register of `len` qubits after all existing ones.
    ///
    /// # Panics
    /// Panics, if the name is already taken.
    pub fn add_register(&mut self, name: &str, len: usize) {
        assert!(
            !self.by_name.contains_key(name),
            "register {:?} already exists",
            name
        );
        self.by_name.insert(name.to_owned(), self.registers.len());
        self.registers.push(Register {
            name: name.to_owned(),
            start: self.n_qubits,
            len,
        });
        self.n_qubits += len;
    }

    /// Looks up a register by name.
    pub fn register(&self, name: &str) -> Option<&Register> {
        self.by_name.get(name).map(|&i| &self.registers[i])
    }

    /// Returns the qubit at `offset` within the named register.
    ///
    /// # Panics
    /// Panics, if the register does not exist or the offset is out of range.
    pub fn qubit(&self, name: &str, offset: usize) -> Qubit {
        let register = self
            .register(name)
            .unwrap_or_else(|| panic!("no register named {:?}", name));
        assert!(offset < register.len, "offset {} out of range for {:?}", offset, name);
        register.start + offset
    }

    /// All registers in layout order.
    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    /// Total number of qubits.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }
}

/// A single gate or measurement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Hadamard.
    H(Qubit),
    /// Pauli-X.
    X(Qubit),
    /// X on `target`, controlled on all of `controls`.
    CnX {
        /// control qubits
        controls: Vec<Qubit>,
        /// target qubit
        target: Qubit,
    },
    /// Phase flip iff all of `qubits` are 1. Symmetric in its qubits.
    CnZ {
        /// participating qubits
        qubits: Vec<Qubit>,
    },
    /// Measurement of `qubit` into classical bit `cbit`.
    Measure {
        /// measured qubit
        qubit: Qubit,
        /// classical destination bit
        cbit: usize,
    },
}

impl Gate {
    /// Checks whether this is a unitary gate (not a measurement).
    pub fn is_unitary(&self) -> bool {
        !matches!(self, Gate::Measure { .. })
    }

    /// Checks whether this is a controlled (multi-qubit) gate.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Gate::CnX { .. } | Gate::CnZ { .. })
    }
}

/// An append-only sequence of gates.
///
/// Sub-circuits are assembled by value: appending one circuit to another
/// copies its gates, so no state is shared between iterations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates an empty circuit.
    pub fn new() -> Circuit {
        Circuit::default()
    }

    /// Appends a Hadamard gate.
    pub fn h(&mut self, qubit: Qubit) {
        self.gates.push(Gate::H(qubit));
    }

    /// Appends a Pauli-X gate.
    pub fn x(&mut self, qubit: Qubit) {
        self.gates.push(Gate::X(qubit));
    }

    /// Appends a multi-controlled X gate.
    pub fn cnx(&mut self, controls: Vec<Qubit>, target: Qubit) {
        self.gates.push(Gate::CnX { controls, target });
    }

    /// Appends a multi-controlled Z gate.
    pub fn cnz(&mut self, qubits: Vec<Qubit>) {
        self.gates.push(Gate::CnZ { qubits });
    }

    /// Appends a measurement.
    pub fn measure(&mut self, qubit: Qubit, cbit: usize) {
        self.gates.push(Gate::Measure { qubit, cbit });
    }

    /// Appends a copy of every gate of `other`.
    pub fn extend_from(&mut self, other: &Circuit) {
        self.gates.extend(other.gates.iter().cloned());
    }

    /// Returns the inverse of this circuit: the same gates in exactly
    /// reversed order. Valid because every unitary gate here is self-inverse;
    /// no reordering or simplification is performed.
    ///
    /// # Panics
    /// Panics, if the circuit contains a measurement.
    pub fn inverted(&self) -> Circuit {
        assert!(
            self.gates.iter().all(Gate::is_unitary),
            "cannot invert a measured circuit"
        );
        Circuit {
            gates: self.gates.iter().rev().cloned().collect(),
        }
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of unitary gates (measurements excluded).
    pub fn gate_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_unitary()).count()
    }

    /// Number of controlled gates.
    pub fn mcx_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_controlled()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_assigns_contiguous_ranges() {
        let mut layout = Layout::new();
        layout.add_register("S", 3);
        layout.add_register("U_0", 2);
        layout.add_register("anc", 1);
        assert_eq!(layout.n_qubits(), 6);
        assert_eq!(layout.qubit("S", 0), 0);
        assert_eq!(layout.qubit("U_0", 1), 4);
        assert_eq!(layout.qubit("anc", 0), 5);
    }

    #[test]
    #[should_panic]
    fn layout_rejects_duplicate_names() {
        let mut layout = Layout::new();
        layout.add_register("S", 1);
        layout.add_register("S", 2);
    }

    #[test]
    fn inverted_reverses_gate_order_exactly() {
        let mut circuit = Circuit::new();
        circuit.h(0);
        circuit.cnx(vec![0], 1);
        circuit.x(1);
        let inverse = circuit.inverted();
        assert_eq!(
            inverse.gates(),
            &[
                Gate::X(1),
                Gate::CnX {
                    controls: vec![0],
                    target: 1
                },
                Gate::H(0),
            ]
        );
    }

    #[test]
    fn counts_ignore_measurements() {
        let mut circuit = Circuit::new();
        circuit.h(0);
        circuit.cnz(vec![0, 1]);
        circuit.measure(0, 0);
        assert_eq!(circuit.gate_count(), 2);
        assert_eq!(circuit.mcx_count(), 1);
    }
}
