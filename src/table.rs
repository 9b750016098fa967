//! Truth tables of single-output Boolean functions.
//!
//! A truth table on `n` variables is a vector of `2^n` output bits indexed by
//! the minterm. The first variable (`a`) is the **most significant** bit of
//! the minterm index, so for `n = 3` the row `0b100` is `a=1, b=0, c=0`.

use std::fmt;

use crate::error::{Result, SynthError};
use crate::utils::exact_log2;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable {
    bits: Vec<bool>,
    arity: usize,
}

impl TruthTable {
    /// Creates a truth table from its output column.
    ///
    /// Fails with [`SynthError::InvalidTableSize`] unless the length is a power
    /// of two and at least 2.
    pub fn new(bits: Vec<bool>) -> Result<Self> {
        let arity = match exact_log2(bits.len()) {
            Some(n) if n >= 1 => n,
            _ => return Err(SynthError::InvalidTableSize(bits.len())),
        };
        Ok(Self { bits, arity })
    }

    /// Creates a truth table from 0/1 values. Any nonzero value counts as 1.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        Self::new(bits.iter().map(|&b| b != 0).collect())
    }

    /// Tabulates `f` over all `2^arity` minterms.
    pub fn from_fn(arity: usize, f: impl Fn(u64) -> bool) -> Result<Self> {
        if arity == 0 || arity >= usize::BITS as usize {
            return Err(SynthError::InvalidTableSize(1usize.checked_shl(arity as u32).unwrap_or(0)));
        }
        Self::new((0..1u64 << arity).map(f).collect())
    }

    /// Number of input variables.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of rows (`2^arity`).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false: a valid table has at least two rows.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, minterm: usize) -> bool {
        self.bits[minterm]
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Output column as 0/1 values.
    pub fn to_bits(&self) -> Vec<u8> {
        self.bits.iter().map(|&b| b as u8).collect()
    }

    /// Number of minterms on which the function is true.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &b) in self.bits.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", b as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_arity() {
        assert_eq!(TruthTable::from_bits(&[0, 1]).unwrap().arity(), 1);
        assert_eq!(TruthTable::from_bits(&[0, 1, 1, 0]).unwrap().arity(), 2);
        assert_eq!(TruthTable::from_bits(&[0; 16]).unwrap().arity(), 4);
        assert_eq!(TruthTable::from_bits(&[0; 64]).unwrap().arity(), 6);
    }

    #[test]
    fn test_invalid_sizes() {
        assert_eq!(TruthTable::from_bits(&[]), Err(SynthError::InvalidTableSize(0)));
        assert_eq!(TruthTable::from_bits(&[1]), Err(SynthError::InvalidTableSize(1)));
        assert_eq!(TruthTable::from_bits(&[0, 1, 1]), Err(SynthError::InvalidTableSize(3)));
        assert_eq!(TruthTable::from_bits(&[0; 12]), Err(SynthError::InvalidTableSize(12)));
    }

    #[test]
    fn test_from_fn_msb_first() {
        // Projection on the first variable: true on the upper half.
        let a = TruthTable::from_fn(3, |m| m & 0b100 != 0).unwrap();
        assert_eq!(a.to_bits(), vec![0, 0, 0, 0, 1, 1, 1, 1]);
        assert_eq!(a.count_ones(), 4);
    }

    #[test]
    fn test_display() {
        let t = TruthTable::from_bits(&[0, 1, 1, 0]).unwrap();
        assert_eq!(t.to_string(), "0 1 1 0");
    }
}
