//! Type-safe wrappers for register positions.
use std::fmt;

/// Position of a qubit in the synthesis register (0-indexed).
///
/// The first `n` positions hold the input variables, the following ones hold
/// the outputs. Rendering is 1-indexed, matching the gate notation `TOF3(..)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Qubit(usize);

impl Qubit {
    pub fn new(index: usize) -> Self {
        Qubit(index)
    }

    /// Returns the raw 0-based position.
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the 1-based position used in printed circuits.
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_numbering() {
        let q = Qubit::new(2);
        assert_eq!(q.index(), 2);
        assert_eq!(q.number(), 3);
        assert_eq!(q.to_string(), "q3");
        assert!(Qubit::new(0) < q);
    }
}
