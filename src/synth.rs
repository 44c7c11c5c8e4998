//! Amplitude-amplification circuit synthesis for exact cover.
//!
//! The search register holds one qubit per subset; a computational basis
//! state of that register is a choice of subsets. Binary counters, one per
//! universe element, count how many chosen subsets cover the element; the
//! oracle flips the phase of exactly those states whose counters all read 1,
//! i.e. exact covers. An inversion-about-the-mean diffuser amplifies the
//! marked states, and the counters are uncomputed between iterations.

use std::f64::consts::PI;

use log::debug;

use crate::circuit::{Circuit, Layout, Qubit};
use crate::encoding::{Subset, Universe};
use crate::errors::Error;
use crate::resources::{self, Resources};

/// The analytically optimal number of amplitude-amplification iterations,
/// `floor((π/4)·sqrt(2^n / num_solutions))` for `n` subsets.
///
/// Zero subsets mean an empty search space: no iteration is required.
pub fn optimal_iterations(num_subsets: usize, num_solutions: usize) -> usize {
    if num_subsets == 0 {
        return 0;
    }
    let space = (num_subsets as f64).exp2() / num_solutions as f64;
    (PI / 4.0 * space.sqrt()).floor() as usize
}

fn ceil_log2(n: usize) -> u32 {
    n.next_power_of_two().trailing_zeros()
}

/// Synthesizer for the exact-cover search circuit of one puzzle instance.
///
/// Construction validates the encoding and builds the four sub-circuits
/// (initialization, counting, oracle, diffuser) once; assembly appends
/// copies of them per iteration and never mutates shared state.
#[derive(Clone, Debug)]
pub struct ExactCoverCircuit {
    universe: Universe,
    subsets: Vec<Subset>,
    num_solutions: usize,
    counter_width: u32,
    layout: Layout,
    init: Circuit,
    counting: Circuit,
    oracle: Circuit,
    diffuser: Circuit,
}

impl ExactCoverCircuit {
    /// Creates a synthesizer for the given universe and subsets, targeting
    /// `num_solutions` marked states.
    ///
    /// Fails fast on an empty subset list ([`Error::EmptySearchSpace`]),
    /// `num_solutions == 0` ([`Error::InvalidSolutionCount`]), subsets that
    /// reference elements outside the universe
    /// ([`Error::InvalidEncodingInput`]) and counters too narrow for the
    /// maximum per-element coverage ([`Error::OverflowRisk`]).
    pub fn new(
        universe: Universe,
        subsets: Vec<Subset>,
        num_solutions: usize,
    ) -> Result<ExactCoverCircuit, Error> {
        if subsets.is_empty() {
            return Err(Error::EmptySearchSpace);
        }
        if num_solutions == 0 {
            return Err(Error::InvalidSolutionCount);
        }

        let mut coverage_count = vec![0usize; universe.len()];
        for subset in &subsets {
            for &idx in &subset.elements {
                if idx >= universe.len() {
                    return Err(Error::InvalidEncodingInput { subset: subset.key });
                }
                coverage_count[idx] += 1;
            }
        }

        // counters must fit the worst-case number of simultaneous covers;
        // widening is not attempted, the instance is rejected instead
        let counter_width = ceil_log2(subsets.len()).max(1);
        let max_coverage = coverage_count.iter().copied().max().unwrap_or(0);
        if max_coverage > (1usize << counter_width) - 1 {
            return Err(Error::OverflowRisk {
                width: counter_width,
                max_coverage,
            });
        }

        let mut layout = Layout::new();
        layout.add_register("S", subsets.len());
        for i in 0..universe.len() {
            layout.add_register(&format!("U_{}", i), counter_width as usize);
        }
        layout.add_register("anc", 1);

        debug!(
            "synthesizing over {} subsets, {} universe elements, counter width {} ({} qubits)",
            subsets.len(),
            universe.len(),
            counter_width,
            layout.n_qubits()
        );

        let mut synth = ExactCoverCircuit {
            universe,
            subsets,
            num_solutions,
            counter_width,
            layout,
            init: Circuit::new(),
            counting: Circuit::new(),
            oracle: Circuit::new(),
            diffuser: Circuit::new(),
        };
        synth.build_init();
        synth.build_counting();
        synth.build_oracle();
        synth.build_diffuser();
        Ok(synth)
    }

    fn subset_qubit(&self, key: usize) -> Qubit {
        self.layout.qubit("S", key)
    }

    fn counter_qubit(&self, element: usize, bit: usize) -> Qubit {
        self.layout.qubit(&format!("U_{}", element), bit)
    }

    /// Equal superposition over the subset register and the ancilla prepared
    /// in the phase-kickback eigenstate.
    fn build_init(&mut self) {
        for key in 0..self.subsets.len() {
            let q = self.subset_qubit(key);
            self.init.h(q);
        }
        let anc = self.layout.qubit("anc", 0);
        self.init.x(anc);
        self.init.h(anc);
    }

    /// For every subset, a controlled binary increment of each covered
    /// element's counter.
    ///
    /// Subsets are walked in natural key order with each subset's coverage
    /// replayed in reverse; an increment flips the highest counter bit first
    /// (CnX controlled on the subset qubit and all lower counter bits), so
    /// within one element the gate order is significant, while increments of
    /// different elements commute.
    fn build_counting(&mut self) {
        let b = self.counter_width as usize;
        let mut gates = Vec::new();
        for subset in &self.subsets {
            let s_qubit = self.subset_qubit(subset.key);
            for &element in subset.elements.iter().rev() {
                for bit in (0..b).rev() {
                    let mut controls = Vec::with_capacity(bit + 1);
                    controls.push(s_qubit);
                    for lower in 0..bit {
                        controls.push(self.counter_qubit(element, lower));
                    }
                    gates.push((controls, self.counter_qubit(element, bit)));
                }
            }
        }
        for (controls, target) in gates {
            self.counting.cnx(controls, target);
        }
    }

    /// Phase flip iff every counter reads exactly 1.
    ///
    /// The target value per counter is `0…01`; all bits whose target is 0 are
    /// negated, one CnX across all counter qubits kicks the phase back
    /// through the ancilla, and the negations are undone (self-inverse
    /// pre/post transform).
    fn build_oracle(&mut self) {
        let b = self.counter_width as usize;
        for element in 0..self.universe.len() {
            for bit in 1..b {
                let q = self.counter_qubit(element, bit);
                self.oracle.x(q);
            }
        }
        let mut controls = Vec::with_capacity(self.universe.len() * b);
        for element in 0..self.universe.len() {
            for bit in 0..b {
                controls.push(self.counter_qubit(element, bit));
            }
        }
        let anc = self.layout.qubit("anc", 0);
        self.oracle.cnx(controls, anc);
        for element in 0..self.universe.len() {
            for bit in 1..b {
                let q = self.counter_qubit(element, bit);
                self.oracle.x(q);
            }
        }
    }

    /// Inversion about the mean over the subset-selection qubits only.
    fn build_diffuser(&mut self) {
        let subset_qubits: Vec<Qubit> = (0..self.subsets.len())
            .map(|key| self.subset_qubit(key))
            .collect();
        for &q in &subset_qubits {
            self.diffuser.h(q);
            self.diffuser.x(q);
        }
        self.diffuser.cnz(subset_qubits.clone());
        for &q in &subset_qubits {
            self.diffuser.x(q);
            self.diffuser.h(q);
        }
    }

    /// Width of each element's counting register.
    pub fn counter_width(&self) -> u32 {
        self.counter_width
    }

    /// Number of subsets (and subset-selection qubits).
    pub fn subset_count(&self) -> usize {
        self.subsets.len()
    }

    /// Number of universe elements (and counting registers).
    pub fn universe_size(&self) -> usize {
        self.universe.len()
    }

    /// The register layout of the synthesized circuit.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The analytically optimal iteration count for this instance.
    pub fn optimal_iterations(&self) -> usize {
        optimal_iterations(self.subsets.len(), self.num_solutions)
    }

    /// Assembles the full measured circuit.
    ///
    /// Each iteration appends counting, oracle, the counting circuit replayed
    /// as its own inverse, and the diffuser; finally the subset-selection
    /// qubits are measured into classical bits of the same index. `None`
    /// selects the analytically optimal iteration count.
    pub fn assemble(&self, iterations: Option<usize>) -> Circuit {
        let iterations = iterations.unwrap_or_else(|| self.optimal_iterations());
        let uncompute = self.counting.inverted();
        let mut circuit = self.init.clone();
        for _ in 0..iterations {
            circuit.extend_from(&self.counting);
            circuit.extend_from(&self.oracle);
            circuit.extend_from(&uncompute);
            circuit.extend_from(&self.diffuser);
        }
        for key in 0..self.subsets.len() {
            circuit.measure(self.subset_qubit(key), key);
        }
        circuit
    }

    /// Returns the fully assembled circuit with the optimal iteration count.
    pub fn get_circuit(&self) -> Circuit {
        self.assemble(None)
    }

    /// Computes qubit and gate totals without materializing the circuit.
    ///
    /// The counts equal those of [`assemble`](Self::assemble) with the same
    /// iteration count, gate for gate.
    pub fn find_resources(&self, iterations: Option<usize>) -> Resources {
        let iterations = iterations.unwrap_or_else(|| self.optimal_iterations());
        let coverage: Vec<usize> = self.subsets.iter().map(|s| s.elements.len()).collect();
        resources::estimate(
            self.universe.len(),
            &coverage,
            self.counter_width,
            iterations,
        )
    }

    /// Maps a measured bitstring of the subset register (classical bit `i`
    /// holding the outcome of subset qubit `i`) to the keys of the chosen
    /// subsets.
    pub fn interpret_measurement(&self, bits: &str) -> Result<Vec<usize>, Error> {
        if bits.len() != self.subsets.len() {
            return Err(Error::BitstringLength {
                expected: self.subsets.len(),
                found: bits.len(),
            });
        }
        let mut selected = Vec::new();
        for (key, ch) in bits.chars().enumerate() {
            match ch {
                '1' => selected.push(key),
                '0' => {}
                _ => return Err(Error::BitstringChar),
            }
        }
        Ok(selected)
    }
}
