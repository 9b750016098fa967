//! Multi-controlled NOT (Toffoli-class) gates.

use std::fmt;

use crate::config::DEFAULT_GATE_PREFIX;
use crate::types::Qubit;

/// A NOT on `target` conditioned on all `controls` being 1.
///
/// With no controls the gate is an unconditional flip.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ToffoliGate {
    target: Qubit,
    controls: Box<[Qubit]>,
}

// Constructors
impl ToffoliGate {
    /// # Panics
    ///
    /// Panics if `target` is listed among the `controls`.
    pub fn new(target: Qubit, controls: &[Qubit]) -> Self {
        assert!(
            !controls.contains(&target),
            "Target {} cannot also be a control",
            target
        );
        Self {
            target,
            controls: controls.into(),
        }
    }
}

// Getters
impl ToffoliGate {
    pub fn target(&self) -> Qubit {
        self.target
    }

    pub fn controls(&self) -> &[Qubit] {
        &self.controls
    }

    /// True for the zero-control gate.
    pub fn is_unconditional(&self) -> bool {
        self.controls.is_empty()
    }
}

impl ToffoliGate {
    /// Applies the gate to a classical basis state.
    pub fn apply(&self, state: &mut [bool]) {
        if self.controls.iter().all(|c| state[c.index()]) {
            state[self.target.index()] ^= true;
        }
    }

    /// Renders the gate as `{prefix}{target}({labels})`, where `labels` holds
    /// the name of every register position.
    pub fn render<S: AsRef<str>>(&self, prefix: &str, labels: &[S]) -> String {
        let controls: Vec<&str> = self.controls.iter().map(|c| labels[c.index()].as_ref()).collect();
        format!("{}{}({})", prefix, self.target.number(), controls.join(","))
    }
}

/// Register-level form with the default prefix and `q`-numbered controls,
/// e.g. `TOF3(q1,q2)`. Use [`ToffoliGate::render`] for a configured prefix
/// and variable names.
impl fmt::Display for ToffoliGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}(", DEFAULT_GATE_PREFIX, self.target.number())?;
        for (i, c) in self.controls.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toffoli_truth_table() {
        let a = Qubit::new(0);
        let b = Qubit::new(1);
        let t = Qubit::new(2);
        let gate = ToffoliGate::new(t, &[a, b]);
        for input in 0..8u8 {
            let mut state = [input & 4 != 0, input & 2 != 0, input & 1 != 0];
            gate.apply(&mut state);
            let expected_target = (input & 1 != 0) ^ (input & 6 == 6);
            assert_eq!(state, [input & 4 != 0, input & 2 != 0, expected_target]);
        }
    }

    #[test]
    fn test_unconditional_flip() {
        let gate = ToffoliGate::new(Qubit::new(1), &[]);
        assert!(gate.is_unconditional());
        let mut state = [false, false];
        gate.apply(&mut state);
        assert_eq!(state, [false, true]);
        gate.apply(&mut state);
        assert_eq!(state, [false, false]);
    }

    #[test]
    fn test_render() {
        let labels = ["a", "b", "a0"];
        let gate = ToffoliGate::new(Qubit::new(2), &[Qubit::new(0), Qubit::new(1)]);
        assert_eq!(gate.render("TOF", &labels), "TOF3(a,b)");
        assert_eq!(gate.render("CNOT", &labels), "CNOT3(a,b)");
        assert_eq!(ToffoliGate::new(Qubit::new(2), &[]).render("TOF", &labels), "TOF3()");
        // Display keeps the default prefix whatever the configuration.
        assert_eq!(gate.to_string(), "TOF3(q1,q2)");
    }

    #[test]
    #[should_panic(expected = "cannot also be a control")]
    fn test_target_as_control_panics() {
        ToffoliGate::new(Qubit::new(1), &[Qubit::new(1)]);
    }
}
