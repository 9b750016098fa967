//! Reed-Muller expressions over named input variables.
//!
//! An [`AnfExpression`] is the XOR of its [`Monomial`]s. Monomials are kept in
//! a fixed order, by degree first and then lexicographically by variable
//! position:
//!
//! ```text
//! 1 ⊕ a ⊕ b ⊕ c ⊕ ab ⊕ ac ⊕ bc ⊕ abc
//! ```
//!
//! The synthesizer emits gates in exactly this order, so the printed circuit
//! follows the printed expression term by term.
//!
//! # Examples
//!
//! ```
//! use revsynth_rs::config::SynthConfig;
//! use revsynth_rs::expr::AnfSystem;
//! use revsynth_rs::table::TruthTable;
//!
//! let nand = TruthTable::from_bits(&[1, 1, 1, 0]).unwrap();
//! let system = AnfSystem::from_truth_tables(&[nand], &SynthConfig::default()).unwrap();
//! assert_eq!(system.inputs(), ["a", "b"]);
//! assert_eq!(system.outputs(), ["a0"]);
//! assert_eq!(system.equations()[0].to_string(), "1 ⊕ ab");
//! ```

use std::fmt;

use log::debug;

use crate::anf::{check_arity, AnfCoefficients};
use crate::config::SynthConfig;
use crate::error::{Result, SynthError};
use crate::table::TruthTable;

/// Name of the `i`-th input variable: `a`, `b`, ..., `z`, then `x26`, `x27`, ...
pub fn input_name(i: usize) -> String {
    if i < 26 {
        ((b'a' + i as u8) as char).to_string()
    } else {
        format!("x{}", i)
    }
}

/// Name of the `i`-th output: `a0`, `b0`, ..., `z0`, then `y26`, `y27`, ...
pub fn output_name(i: usize) -> String {
    if i < 26 {
        format!("{}0", (b'a' + i as u8) as char)
    } else {
        format!("y{}", i)
    }
}

/// A product of distinct input variables, stored as sorted variable positions.
///
/// The empty product is the constant `1`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monomial {
    vars: Vec<usize>,
}

impl Monomial {
    pub fn constant() -> Self {
        Self { vars: Vec::new() }
    }

    /// Builds a monomial from variable positions (any order, duplicates merged).
    pub fn new(vars: impl IntoIterator<Item = usize>) -> Self {
        let mut vars: Vec<usize> = vars.into_iter().collect();
        vars.sort_unstable();
        vars.dedup();
        Self { vars }
    }

    /// Decodes a monomial bitmask: bit `arity-1-i` selects variable `i`.
    pub fn from_mask(mask: usize, arity: usize) -> Self {
        debug_assert!(mask < 1 << arity);
        Self {
            vars: (0..arity).filter(|&i| (mask >> (arity - 1 - i)) & 1 == 1).collect(),
        }
    }

    /// Inverse of [`Monomial::from_mask`].
    pub fn mask(&self, arity: usize) -> usize {
        self.vars.iter().fold(0, |acc, &i| {
            assert!(i < arity, "Variable {} out of range for arity {}", i, arity);
            acc | 1 << (arity - 1 - i)
        })
    }

    pub fn vars(&self) -> &[usize] {
        &self.vars
    }

    pub fn degree(&self) -> usize {
        self.vars.len()
    }

    pub fn is_constant(&self) -> bool {
        self.vars.is_empty()
    }

    /// True iff every variable of the monomial is 1 in `minterm`.
    pub fn evaluate(&self, minterm: usize, arity: usize) -> bool {
        let mask = self.mask(arity);
        minterm & mask == mask
    }

    /// Renders the monomial by concatenating variable names (`1` if constant).
    pub fn render<S: AsRef<str>>(&self, names: &[S]) -> String {
        if self.is_constant() {
            return "1".to_string();
        }
        self.vars.iter().map(|&i| names[i].as_ref()).collect()
    }

    fn order_key(&self) -> (usize, &[usize]) {
        (self.degree(), &self.vars)
    }
}

/// XOR of monomials over named input variables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AnfExpression {
    variables: Vec<String>,
    monomials: Vec<Monomial>,
}

impl AnfExpression {
    /// Builds the expression for `coeffs` over `variables`.
    ///
    /// # Panics
    ///
    /// Panics if the number of names differs from the arity of `coeffs`.
    pub fn from_coefficients(coeffs: &AnfCoefficients, variables: &[String]) -> Self {
        assert_eq!(
            variables.len(),
            coeffs.arity(),
            "Expected {} variable names",
            coeffs.arity()
        );
        let monomials = coeffs
            .monomial_masks()
            .map(|mask| Monomial::from_mask(mask, coeffs.arity()))
            .collect();
        Self::new(variables.to_vec(), monomials)
    }

    /// Builds an expression from explicit monomials, normalizing their order.
    ///
    /// Repeated monomials cancel pairwise.
    pub fn new(variables: Vec<String>, monomials: Vec<Monomial>) -> Self {
        let mut monomials = monomials;
        monomials.sort_by(|x, y| x.order_key().cmp(&y.order_key()));
        let mut reduced: Vec<Monomial> = Vec::with_capacity(monomials.len());
        for m in monomials {
            if reduced.last() == Some(&m) {
                reduced.pop();
            } else {
                reduced.push(m);
            }
        }
        Self {
            variables,
            monomials: reduced,
        }
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn arity(&self) -> usize {
        self.variables.len()
    }

    pub fn monomials(&self) -> &[Monomial] {
        &self.monomials
    }

    /// True for the constant-zero function.
    pub fn is_zero(&self) -> bool {
        self.monomials.is_empty()
    }

    pub fn degree(&self) -> usize {
        self.monomials.iter().map(Monomial::degree).max().unwrap_or(0)
    }

    /// Value of the expression at `minterm`.
    pub fn evaluate(&self, minterm: usize) -> bool {
        self.monomials
            .iter()
            .filter(|m| m.evaluate(minterm, self.arity()))
            .count()
            % 2
            == 1
    }

    /// Tabulates the expression back into a truth table.
    pub fn to_truth_table(&self) -> Result<TruthTable> {
        TruthTable::from_fn(self.arity(), |m| self.evaluate(m as usize))
    }

    /// Individual terms as strings, in expression order.
    pub fn terms(&self) -> Vec<String> {
        self.monomials.iter().map(|m| m.render(&self.variables)).collect()
    }
}

impl fmt::Display for AnfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        write!(f, "{}", self.terms().join(" ⊕ "))
    }
}

/// Inputs, outputs and one expression per output of a multi-output function.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AnfSystem {
    inputs: Vec<String>,
    outputs: Vec<String>,
    equations: Vec<AnfExpression>,
}

impl AnfSystem {
    /// Builds one expression per truth table.
    ///
    /// All tables must share one length. Input names are `a`, `b`, ... and
    /// output names are `a0`, `b0`, ... in table order.
    pub fn from_truth_tables(tables: &[TruthTable], config: &SynthConfig) -> Result<Self> {
        let first = tables.first().ok_or(SynthError::InvalidTableSize(0))?;
        for table in tables {
            if table.len() != first.len() {
                return Err(SynthError::InconsistentTableLengths {
                    expected: first.len(),
                    found: table.len(),
                });
            }
        }
        let arity = first.arity();
        check_arity(arity, config)?;
        debug!("from_truth_tables(tables = {}, arity = {})", tables.len(), arity);

        let inputs: Vec<String> = (0..arity).map(input_name).collect();
        let outputs: Vec<String> = (0..tables.len()).map(output_name).collect();
        let equations: Vec<AnfExpression> = tables
            .iter()
            .map(|table| AnfExpression::from_coefficients(&AnfCoefficients::from_truth_table(table), &inputs))
            .collect();
        for (name, eq) in outputs.iter().zip(&equations) {
            debug!("{} = {}", name, eq);
        }

        Ok(Self {
            inputs,
            outputs,
            equations,
        })
    }

    /// Same as [`AnfSystem::from_truth_tables`] for raw 0/1 rows.
    pub fn from_rows(rows: &[Vec<u8>], config: &SynthConfig) -> Result<Self> {
        let tables = rows.iter().map(|row| TruthTable::from_bits(row)).collect::<Result<Vec<_>>>()?;
        Self::from_truth_tables(&tables, config)
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn equations(&self) -> &[AnfExpression] {
        &self.equations
    }

    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }
}
