//! Algebraic normal form via the binary Möbius transform.
//!
//! Every Boolean function `f: {0,1}^n -> {0,1}` has a unique representation as
//! an XOR of AND-monomials (Reed-Muller / Zhegalkin expansion):
//!
//! ```text
//! f(x) = ⊕_{S ⊆ [n]} c_S · ∏_{i ∈ S} x_i
//! ```
//!
//! The coefficient of monomial `S` is the XOR of the truth table over all
//! subsets of `S`:
//!
//! ```text
//! c_S = ⊕_{T ⊆ S} f(T)
//! ```
//!
//! Monomials are indexed exactly like minterms: bit `n-1-i` of the index is
//! set iff variable `i` participates. Index `0` is the constant term.
//!
//! The transform is computed with the usual `n`-pass butterfly in
//! `O(n · 2^n)` and is its own inverse over GF(2).
//!
//! # Examples
//!
//! ```
//! use revsynth_rs::anf::AnfCoefficients;
//! use revsynth_rs::table::TruthTable;
//!
//! // XOR of two inputs is `a ⊕ b`.
//! let xor = TruthTable::from_bits(&[0, 1, 1, 0]).unwrap();
//! let anf = AnfCoefficients::from_truth_table(&xor);
//! assert_eq!(anf.to_bits(), vec![0, 1, 1, 0]);
//!
//! // AND of two inputs is the single monomial `ab`.
//! let and = TruthTable::from_bits(&[0, 0, 0, 1]).unwrap();
//! let anf = AnfCoefficients::from_truth_table(&and);
//! assert_eq!(anf.to_bits(), vec![0, 0, 0, 1]);
//! ```

use log::debug;

use crate::config::SynthConfig;
use crate::error::{Result, SynthError};
use crate::table::TruthTable;

/// In-place GF(2) Möbius transform of a power-of-two-length vector.
fn mobius_in_place(values: &mut [bool]) {
    debug_assert!(values.len().is_power_of_two());
    let len = values.len();
    let mut step = 1;
    while step < len {
        for j in 0..len {
            if j & step != 0 {
                values[j] ^= values[j ^ step];
            }
        }
        step <<= 1;
    }
}

/// Rejects tables wider than the configured maximum arity.
pub fn check_arity(arity: usize, config: &SynthConfig) -> Result<()> {
    match config.max_arity {
        Some(max) if arity > max => Err(SynthError::UnsupportedArity { arity, max }),
        _ => Ok(()),
    }
}

/// ANF coefficient vector of one Boolean function.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AnfCoefficients {
    coeffs: Vec<bool>,
    arity: usize,
}

impl AnfCoefficients {
    /// Computes the ANF of a validated truth table.
    pub fn from_truth_table(table: &TruthTable) -> Self {
        debug!("anf(arity = {}, rows = {})", table.arity(), table.len());
        let mut coeffs = table.bits().to_vec();
        mobius_in_place(&mut coeffs);
        Self {
            coeffs,
            arity: table.arity(),
        }
    }

    /// Computes the ANF of a raw output column, honoring `config.max_arity`.
    ///
    /// Fails with [`SynthError::InvalidTableSize`] when the length is not a power
    /// of two (or is 1), and with [`SynthError::UnsupportedArity`] when the
    /// table is wider than allowed.
    pub fn transform(bits: &[bool], config: &SynthConfig) -> Result<Self> {
        let table = TruthTable::new(bits.to_vec())?;
        check_arity(table.arity(), config)?;
        Ok(Self::from_truth_table(&table))
    }

    /// Wraps an existing coefficient vector.
    pub fn new(coeffs: Vec<bool>) -> Result<Self> {
        let table = TruthTable::new(coeffs)?;
        let arity = table.arity();
        Ok(Self {
            coeffs: table.bits().to_vec(),
            arity,
        })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficient of the monomial with variable bitmask `mask`.
    pub fn get(&self, mask: usize) -> bool {
        self.coeffs[mask]
    }

    pub fn coefficients(&self) -> &[bool] {
        &self.coeffs
    }

    pub fn to_bits(&self) -> Vec<u8> {
        self.coeffs.iter().map(|&b| b as u8).collect()
    }

    /// Bitmasks of all monomials with coefficient 1, ascending.
    pub fn monomial_masks(&self) -> impl Iterator<Item = usize> + '_ {
        self.coeffs.iter().enumerate().filter(|(_, &c)| c).map(|(mask, _)| mask)
    }

    /// Algebraic degree: size of the largest monomial, 0 for constants.
    pub fn degree(&self) -> usize {
        self.monomial_masks().map(|m| m.count_ones() as usize).max().unwrap_or(0)
    }

    /// Value of the XOR-of-monomials at `minterm`.
    ///
    /// A monomial is true iff all its variables are set in `minterm`, that is,
    /// iff its mask is a subset of the minterm.
    pub fn evaluate(&self, minterm: usize) -> bool {
        self.monomial_masks().filter(|&mask| mask & !minterm == 0).count() % 2 == 1
    }

    /// Inverse transform back to the truth table.
    pub fn to_truth_table(&self) -> TruthTable {
        let mut bits = self.coeffs.clone();
        mobius_in_place(&mut bits);
        debug_assert_eq!(bits.len(), 1 << self.arity);
        match TruthTable::new(bits) {
            Ok(table) => table,
            Err(e) => unreachable!("transform preserves the table size: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn anf(bits: &[u8]) -> Vec<u8> {
        AnfCoefficients::from_truth_table(&TruthTable::from_bits(bits).unwrap()).to_bits()
    }

    #[test]
    fn test_two_inputs() {
        assert_eq!(anf(&[0, 0, 0, 0]), vec![0, 0, 0, 0]);
        assert_eq!(anf(&[1, 1, 1, 1]), vec![1, 0, 0, 0]);
        assert_eq!(anf(&[0, 0, 0, 1]), vec![0, 0, 0, 1]);
        assert_eq!(anf(&[0, 1, 1, 1]), vec![0, 1, 1, 1]);
        assert_eq!(anf(&[1, 1, 1, 0]), vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_matches_explicit_three_input_formulas() {
        let t = [1, 0, 1, 1, 0, 0, 1, 0];
        let c = anf(&t);
        // c[0b100] is the coefficient of `a`: t[0] ^ t[4].
        assert_eq!(c[0b100], t[0] ^ t[4]);
        assert_eq!(c[0b010], t[0] ^ t[2]);
        assert_eq!(c[0b001], t[0] ^ t[1]);
        assert_eq!(c[0b110], t[0] ^ t[4] ^ t[2] ^ t[6]);
        assert_eq!(c[0b011], t[0] ^ t[2] ^ t[1] ^ t[3]);
        assert_eq!(c[0b101], t[0] ^ t[1] ^ t[4] ^ t[5]);
        assert_eq!(c[0b111], t.iter().fold(0, |acc, &x| acc ^ x));
    }

    #[test]
    fn test_self_inverse_exhaustive() {
        for n in 1..=3 {
            let rows = 1usize << n;
            for f in 0u32..(1 << rows) {
                let table = TruthTable::from_fn(n, |m| (f >> m) & 1 == 1).unwrap();
                let anf = AnfCoefficients::from_truth_table(&table);
                assert_eq!(anf.to_truth_table(), table);
            }
        }
    }

    #[test]
    fn test_round_trip_evaluate_exhaustive() {
        for f in 0u32..(1 << 16) {
            let table = TruthTable::from_fn(4, |m| (f >> m) & 1 == 1).unwrap();
            let anf = AnfCoefficients::from_truth_table(&table);
            for m in 0..16 {
                assert_eq!(anf.evaluate(m), table.get(m), "f = {:#06x}, minterm = {}", f, m);
            }
        }
    }

    #[test]
    fn test_no_arity_ceiling() {
        // Parity on 6 variables is the XOR of all single-variable monomials.
        let table = TruthTable::from_fn(6, |m| m.count_ones() % 2 == 1).unwrap();
        let anf = AnfCoefficients::from_truth_table(&table);
        let masks: Vec<usize> = anf.monomial_masks().collect();
        assert_eq!(masks, vec![1, 2, 4, 8, 16, 32]);
        assert_eq!(anf.degree(), 1);
    }

    #[test]
    fn test_transform_errors() {
        let config = SynthConfig::default();
        assert_eq!(
            AnfCoefficients::transform(&[true], &config),
            Err(SynthError::InvalidTableSize(1))
        );
        assert_eq!(
            AnfCoefficients::transform(&[true; 6], &config),
            Err(SynthError::InvalidTableSize(6))
        );
        let narrow = SynthConfig {
            max_arity: Some(2),
            ..SynthConfig::default()
        };
        assert_eq!(
            AnfCoefficients::transform(&[false; 8], &narrow),
            Err(SynthError::UnsupportedArity { arity: 3, max: 2 })
        );
        assert!(AnfCoefficients::transform(&[false; 4], &narrow).is_ok());
    }

    #[test]
    fn test_degree() {
        let maj = TruthTable::from_fn(3, |m| m.count_ones() >= 2).unwrap();
        assert_eq!(AnfCoefficients::from_truth_table(&maj).degree(), 2);
        let zero = TruthTable::from_bits(&[0, 0]).unwrap();
        assert_eq!(AnfCoefficients::from_truth_table(&zero).degree(), 0);
    }
}
