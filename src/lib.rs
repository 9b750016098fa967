//! # revsynth-rs: Reversible circuits from truth tables
//!
//! **`revsynth-rs`** turns Boolean specifications into reversible circuits.
//! It covers two independent paths:
//!
//! - **Toffoli synthesis**: truth table → algebraic normal form (Reed-Muller /
//!   Zhegalkin expansion) → one multi-controlled NOT per monomial.
//! - **Reversible embedding**: an arbitrary, possibly collapsing function map →
//!   a bijection obtained by appending the minimum number of garbage outputs
//!   and, when needed, garbage inputs.
//!
//! Only correctness is guaranteed. Gate count and garbage beyond the stated
//! minimum are not optimized, and controls always have positive polarity.
//!
//! ## Bit Order
//!
//! The first input variable (`a`) is the **most significant** bit of a minterm
//! index. The same convention indexes ANF coefficients: monomial `ab` of a
//! 3-input function lives at index `0b110`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use revsynth_rs::circuit::Circuit;
//! use revsynth_rs::config::SynthConfig;
//! use revsynth_rs::expr::AnfSystem;
//! use revsynth_rs::table::TruthTable;
//!
//! let config = SynthConfig::default();
//!
//! // Half adder: sum = a ⊕ b, carry = ab
//! let sum = TruthTable::from_bits(&[0, 1, 1, 0]).unwrap();
//! let carry = TruthTable::from_bits(&[0, 0, 0, 1]).unwrap();
//!
//! let system = AnfSystem::from_truth_tables(&[sum.clone(), carry.clone()], &config).unwrap();
//! assert_eq!(system.equations()[0].to_string(), "a ⊕ b");
//! assert_eq!(system.equations()[1].to_string(), "ab");
//!
//! let circuit = Circuit::synthesize(&system, &config);
//! assert_eq!(circuit.gate_labels(), ["TOF3(a)", "TOF3(b)", "TOF4(a,b)"]);
//! assert!(circuit.verify(&[sum, carry]));
//! ```
//!
//! ## Core Components
//!
//! - **[`anf`]**: Möbius transform from truth tables to ANF coefficients.
//! - **[`expr`]**: Monomials and expressions over named variables.
//! - **[`circuit`]**: The qubit register and Toffoli synthesis.
//! - **[`embed`]**: Function maps and their reversible embeddings.
//! - **[`io`]**: Text formats for truth tables and function maps.
//!
//! All operations are pure and build fresh values per call. Nothing is
//! shared between calls, so independent specifications can be processed on
//! separate threads.

pub mod anf;
pub mod bitset;
pub mod circuit;
pub mod config;
pub mod embed;
pub mod error;
pub mod expr;
pub mod gate;
pub mod io;
pub mod table;
pub mod types;
pub mod utils;

pub use error::{Result, SynthError};
