//! Error type shared by the transform, builder and embedding entry points.
//!
//! All errors are detected eagerly, before any work is done, and handed back
//! to the caller. Contract violations inside the synthesizer (a monomial that
//! names a variable the register does not have) are not errors: they panic.

use std::fmt;

/// Errors reported by the synthesis and embedding operations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SynthError {
    /// Truth table length is not a power of two, or is smaller than 2.
    InvalidTableSize(usize),
    /// Number of input variables exceeds the configured maximum.
    UnsupportedArity { arity: usize, max: usize },
    /// Embedding was requested for a function map without entries.
    EmptyFunctionSpecification,
    /// Truth tables passed together do not share one length.
    InconsistentTableLengths { expected: usize, found: usize },
    /// An input code does not fit into the declared input width.
    InputCodeOutOfRange { code: u64, width: usize },
    /// An output code does not fit into the declared output width.
    OutputCodeOutOfRange { code: u64, width: usize },
    /// Declared bit width is zero or too wide for 64-bit codes.
    InvalidWidth(usize),
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::InvalidTableSize(len) => {
                write!(f, "Invalid truth table size {}: expected a power of two >= 2", len)
            }
            SynthError::UnsupportedArity { arity, max } => {
                write!(f, "Unsupported arity {} (maximum is {})", arity, max)
            }
            SynthError::EmptyFunctionSpecification => {
                write!(f, "Function specification is empty")
            }
            SynthError::InconsistentTableLengths { expected, found } => {
                write!(f, "Inconsistent truth table lengths: expected {}, found {}", expected, found)
            }
            SynthError::InputCodeOutOfRange { code, width } => {
                write!(f, "Input code {} does not fit into {} bits", code, width)
            }
            SynthError::OutputCodeOutOfRange { code, width } => {
                write!(f, "Output code {} does not fit into {} bits", code, width)
            }
            SynthError::InvalidWidth(width) => {
                write!(f, "Invalid bit width {}", width)
            }
        }
    }
}

impl std::error::Error for SynthError {}

pub type Result<T> = std::result::Result<T, SynthError>;
