//! Toffoli synthesis from Reed-Muller expressions.
//!
//! The register holds `n` input qubits followed by one target qubit per
//! output. Every monomial of output `i` becomes one gate on qubit `n+i`,
//! controlled by the input qubits of the monomial's variables:
//!
//! ```text
//! a0 = 1 ⊕ a ⊕ bc   ==>   TOF4()  TOF4(a)  TOF4(b,c)
//! ```
//!
//! Controls only ever point at input qubits, which no gate targets, so each
//! output ends up holding the XOR of its monomials regardless of the order in
//! which the gates are applied. Gates are emitted in expression order so the
//! trace reads like the expression.
//!
//! # Examples
//!
//! ```
//! use revsynth_rs::circuit::Circuit;
//! use revsynth_rs::config::SynthConfig;
//! use revsynth_rs::expr::AnfSystem;
//!
//! let config = SynthConfig::default();
//! let system = AnfSystem::from_rows(&[vec![1, 1, 1, 0]], &config).unwrap();
//! let circuit = Circuit::synthesize(&system, &config);
//! assert_eq!(circuit.gate_labels(), ["TOF3()", "TOF3(a,b)"]);
//! assert_eq!(circuit.output_bits(0b11), [false]);
//! ```

use std::fmt;

use log::{debug, trace};

use crate::config::SynthConfig;
use crate::expr::{AnfExpression, AnfSystem};
use crate::gate::ToffoliGate;
use crate::table::TruthTable;
use crate::types::Qubit;

/// Input label of an output qubit: outputs start in the `|0⟩` state.
const ANCILLA_LABEL: &str = "0";

/// One register position and the gates applied to it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct QubitSlot {
    input: String,
    output: Option<String>,
    description: String,
}

impl QubitSlot {
    fn input(label: &str) -> Self {
        Self {
            input: label.to_string(),
            output: Some(label.to_string()),
            description: "-".to_string(),
        }
    }

    fn ancilla() -> Self {
        Self {
            input: ANCILLA_LABEL.to_string(),
            output: None,
            description: String::new(),
        }
    }

    pub fn input_label(&self) -> &str {
        &self.input
    }

    pub fn output_label(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Concatenated gate labels applied to this qubit, `-` for inputs.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Register plus the ordered gate sequence acting on it.
#[derive(Debug, Clone)]
pub struct Circuit {
    num_inputs: usize,
    qubits: Vec<QubitSlot>,
    gates: Vec<ToffoliGate>,
    gate_prefix: &'static str,
}

impl Circuit {
    /// Creates a register of `inputs.len()` labeled input qubits followed by
    /// `num_outputs` output qubits, with no gates.
    pub fn new(inputs: &[String], num_outputs: usize, config: &SynthConfig) -> Self {
        let mut qubits: Vec<QubitSlot> = inputs.iter().map(|name| QubitSlot::input(name)).collect();
        qubits.extend((0..num_outputs).map(|_| QubitSlot::ancilla()));
        Self {
            num_inputs: inputs.len(),
            qubits,
            gates: Vec::new(),
            gate_prefix: config.gate_prefix,
        }
    }

    /// Synthesizes the whole system: one output qubit per equation.
    pub fn synthesize(system: &AnfSystem, config: &SynthConfig) -> Self {
        debug!(
            "synthesize(inputs = {}, outputs = {})",
            system.num_inputs(),
            system.num_outputs()
        );
        let mut circuit = Self::new(system.inputs(), system.num_outputs(), config);
        for (i, (name, equation)) in system.outputs().iter().zip(system.equations()).enumerate() {
            circuit.synthesize_output(i, name, equation);
        }
        debug!("synthesize: {} gates", circuit.gates.len());
        circuit
    }

    /// Emits the gates of `equation` on output qubit `n + output`.
    ///
    /// # Panics
    ///
    /// Panics if `output` is not an output position of the register, if the
    /// output already has a label, or if a monomial mentions a variable
    /// outside the input block.
    pub fn synthesize_output(&mut self, output: usize, name: &str, equation: &AnfExpression) {
        let target = Qubit::new(self.num_inputs + output);
        assert!(
            target.index() < self.qubits.len(),
            "Output {} is outside the register of {} qubits",
            output,
            self.qubits.len()
        );
        assert!(
            self.qubits[target.index()].output.is_none(),
            "Output qubit {} is already assigned",
            target
        );
        self.qubits[target.index()].output = Some(name.to_string());

        for monomial in equation.monomials() {
            let controls: Vec<Qubit> = monomial
                .vars()
                .iter()
                .map(|&v| {
                    assert!(
                        v < self.num_inputs,
                        "Monomial variable {} is not an input of a {}-input register",
                        v,
                        self.num_inputs
                    );
                    Qubit::new(v)
                })
                .collect();
            self.push_gate(ToffoliGate::new(target, &controls));
        }
    }

    fn push_gate(&mut self, gate: ToffoliGate) {
        let label = self.gate_label(&gate);
        trace!("gate {}", label);
        self.qubits[gate.target().index()].description.push_str(&label);
        self.gates.push(gate);
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.qubits.len() - self.num_inputs
    }

    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    pub fn qubits(&self) -> &[QubitSlot] {
        &self.qubits
    }

    pub fn gates(&self) -> &[ToffoliGate] {
        &self.gates
    }

    /// Renders one gate with the register's input labels as control names.
    pub fn gate_label(&self, gate: &ToffoliGate) -> String {
        let labels: Vec<&str> = self.qubits.iter().map(|q| q.input.as_str()).collect();
        gate.render(self.gate_prefix, &labels)
    }

    /// Labels of all gates in emission order.
    pub fn gate_labels(&self) -> Vec<String> {
        self.gates.iter().map(|g| self.gate_label(g)).collect()
    }

    /// Runs the gates on the basis state where the inputs hold `minterm`
    /// (first input is the most significant bit) and the outputs hold 0.
    pub fn simulate(&self, minterm: u64) -> Vec<bool> {
        let n = self.num_inputs;
        let mut state = vec![false; self.qubits.len()];
        for (i, bit) in state.iter_mut().take(n).enumerate() {
            *bit = (minterm >> (n - 1 - i)) & 1 == 1;
        }
        for gate in &self.gates {
            gate.apply(&mut state);
        }
        state
    }

    /// Output qubits after [`Circuit::simulate`].
    pub fn output_bits(&self, minterm: u64) -> Vec<bool> {
        self.simulate(minterm).split_off(self.num_inputs)
    }

    /// Checks that output `i` reproduces `tables[i]` on every minterm.
    pub fn verify(&self, tables: &[TruthTable]) -> bool {
        if tables.len() != self.num_outputs() {
            return false;
        }
        if tables.iter().any(|t| t.arity() != self.num_inputs) {
            return false;
        }
        (0..1u64 << self.num_inputs).all(|m| {
            let outputs = self.output_bits(m);
            tables.iter().zip(outputs).all(|(t, bit)| t.get(m as usize) == bit)
        })
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.gate_labels().join(" "))?;
        writeln!(f)?;
        writeln!(f, "{:<18}{:<8}{:<8}Description", "Qubit", "Input", "Output")?;
        for (i, q) in self.qubits.iter().enumerate() {
            let description = if q.description.is_empty() { "-" } else { q.description.as_str() };
            writeln!(
                f,
                "{:<18}{:<8}{:<8}{}",
                i + 1,
                q.input,
                q.output.as_deref().unwrap_or("-"),
                description
            )?;
        }
        Ok(())
    }
}
