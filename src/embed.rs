//! Reversible embedding of arbitrary Boolean functions.
//!
//! A function `f: {0,1}^n -> {0,1}^m` is reversible only if it is a bijection.
//! To embed a collapsing `f` into a bijection we:
//!
//! 1. Count how many inputs share each output value; let `max_reps` be the
//!    largest count.
//! 2. Append `g = ⌈log2(max_reps)⌉` garbage outputs. The `j`-th input (in
//!    ascending order) mapping to a value gets `j` as its garbage suffix, so
//!    all composite outputs become distinct.
//! 3. Append `max(0, m + g - n)` garbage inputs so the domain is at least as
//!    large as the codomain. Original entries keep their codes (garbage
//!    inputs are the high bits and are 0).
//! 4. Pair every remaining domain code, ascending, with the smallest codomain
//!    code nobody has claimed yet.
//!
//! If the stated domain is wider than `m + g` (possible only when the map is
//! partial) the outputs are left-padded with constant garbage bits so both
//! sides have the same width.
//!
//! # Examples
//!
//! ```
//! use revsynth_rs::config::SynthConfig;
//! use revsynth_rs::embed::{FunctionMap, ReversibleMapping};
//!
//! let f = FunctionMap::from_entries(2, 1, [(0b00, 1), (0b01, 0), (0b10, 1), (0b11, 0)]).unwrap();
//! let r = ReversibleMapping::from_function(&f, &SynthConfig::default()).unwrap();
//! assert_eq!(r.garbage_outputs(), 1);
//! assert_eq!(r.garbage_inputs(), 0);
//! assert_eq!(r.output_columns()[0], vec![1, 0, 1, 0]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use log::{debug, trace};

use crate::bitset::BitSet;
use crate::config::SynthConfig;
use crate::error::{Result, SynthError};
use crate::utils::{ceil_log2, msb_bit, to_bit_string};

/// Widest code space the embedding will ever tabulate.
///
/// A mapping of width `W` holds `2^W` codes, so this is a hard cap on top of
/// [`SynthConfig::max_width`].
pub const MAX_WIDTH: usize = 24;

/// A possibly partial, possibly collapsing map from `n`-bit to `m`-bit codes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FunctionMap {
    num_inputs: usize,
    num_outputs: usize,
    entries: BTreeMap<u64, u64>,
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 || width > MAX_WIDTH {
        return Err(SynthError::InvalidWidth(width));
    }
    Ok(())
}

impl FunctionMap {
    /// Creates an empty map from `num_inputs`-bit to `num_outputs`-bit codes.
    pub fn new(num_inputs: usize, num_outputs: usize) -> Result<Self> {
        check_width(num_inputs)?;
        check_width(num_outputs)?;
        Ok(Self {
            num_inputs,
            num_outputs,
            entries: BTreeMap::new(),
        })
    }

    pub fn from_entries(
        num_inputs: usize,
        num_outputs: usize,
        entries: impl IntoIterator<Item = (u64, u64)>,
    ) -> Result<Self> {
        let mut map = Self::new(num_inputs, num_outputs)?;
        for (input, output) in entries {
            map.insert(input, output)?;
        }
        Ok(map)
    }

    /// Tabulates `f` over the whole `num_inputs`-bit domain.
    pub fn from_fn(num_inputs: usize, num_outputs: usize, f: impl Fn(u64) -> u64) -> Result<Self> {
        check_width(num_inputs)?;
        Self::from_entries(num_inputs, num_outputs, (0..1u64 << num_inputs).map(|x| (x, f(x))))
    }

    /// Sets the image of `input`, returning the previous one.
    pub fn insert(&mut self, input: u64, output: u64) -> Result<Option<u64>> {
        if input >> self.num_inputs != 0 {
            return Err(SynthError::InputCodeOutOfRange {
                code: input,
                width: self.num_inputs,
            });
        }
        if output >> self.num_outputs != 0 {
            return Err(SynthError::OutputCodeOutOfRange {
                code: output,
                width: self.num_outputs,
            });
        }
        Ok(self.entries.insert(input, output))
    }

    pub fn get(&self, input: u64) -> Option<u64> {
        self.entries.get(&input).copied()
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending input order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.entries.iter().map(|(&i, &o)| (i, o))
    }

    /// How many inputs map to each output value.
    pub fn repetitions(&self) -> BTreeMap<u64, usize> {
        let mut counts = BTreeMap::new();
        for &output in self.entries.values() {
            *counts.entry(output).or_insert(0) += 1;
        }
        counts
    }

    /// Largest repetition count, at least 1.
    pub fn max_repetitions(&self) -> usize {
        self.repetitions().values().copied().max().unwrap_or(1)
    }

    /// True if no two inputs share an output.
    pub fn is_injective(&self) -> bool {
        self.max_repetitions() == 1
    }
}

/// A total bijection over `2^width` codes containing a [`FunctionMap`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReversibleMapping {
    num_inputs: usize,
    num_outputs: usize,
    garbage_inputs: usize,
    garbage_outputs: usize,
    /// Image of every domain code, indexed by the code.
    table: Vec<u64>,
}

impl ReversibleMapping {
    /// Embeds `f` into a bijection with the minimum number of garbage outputs.
    ///
    /// Fails with [`SynthError::EmptyFunctionSpecification`] if `f` has no
    /// entries, with [`SynthError::InvalidWidth`] if the embedded width
    /// exceeds [`MAX_WIDTH`], and with [`SynthError::UnsupportedArity`] if it
    /// exceeds `config.max_width`. Both checks run before any table is built.
    pub fn from_function(f: &FunctionMap, config: &SynthConfig) -> Result<Self> {
        if f.is_empty() {
            return Err(SynthError::EmptyFunctionSpecification);
        }
        let n = f.num_inputs();
        let m = f.num_outputs();

        let max_reps = f.max_repetitions();
        let garbage_outputs = ceil_log2(max_reps);
        let garbage_inputs = (m + garbage_outputs).saturating_sub(n);
        let width = n + garbage_inputs;
        check_width(width)?;
        if let Some(max) = config.max_width {
            if width > max {
                return Err(SynthError::UnsupportedArity { arity: width, max });
            }
        }
        debug!(
            "embed(n = {}, m = {}, entries = {}): max_reps = {}, garbage_outputs = {}, garbage_inputs = {}",
            n,
            m,
            f.len(),
            max_reps,
            garbage_outputs,
            garbage_inputs
        );

        let size = 1usize << width;
        let mut table: Vec<Option<u64>> = vec![None; size];
        let mut used = BitSet::new(size);
        let mut next_suffix: HashMap<u64, u64> = HashMap::new();

        for (input, output) in f.iter() {
            let suffix = next_suffix.entry(output).or_insert(0);
            assert!(
                *suffix < 1u64 << garbage_outputs,
                "Output {} needs more than {} garbage suffixes",
                output,
                1u64 << garbage_outputs
            );
            let code = (output << garbage_outputs) | *suffix;
            *suffix += 1;
            trace!("{} -> {} (suffix {})", input, code, code & ((1 << garbage_outputs) - 1));
            table[input as usize] = Some(code);
            let fresh = used.insert(code as usize);
            debug_assert!(fresh, "composite output {} assigned twice", code);
        }

        let mut free = used.iter_missing();
        let table = table
            .into_iter()
            .map(|slot| match slot {
                Some(code) => code,
                None => match free.next() {
                    Some(code) => code as u64,
                    None => unreachable!("free codomain codes match unassigned domain codes"),
                },
            })
            .collect();

        Ok(Self {
            num_inputs: n,
            num_outputs: m,
            garbage_inputs,
            garbage_outputs,
            table,
        })
    }

    /// Original input width `n`.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Original output width `m`.
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    pub fn garbage_inputs(&self) -> usize {
        self.garbage_inputs
    }

    pub fn garbage_outputs(&self) -> usize {
        self.garbage_outputs
    }

    /// Constant output bits needed when the domain is wider than `m + garbage_outputs`.
    pub fn padding_outputs(&self) -> usize {
        self.width() - (self.num_outputs + self.garbage_outputs)
    }

    /// Common bit width of domain and codomain.
    pub fn width(&self) -> usize {
        self.num_inputs + self.garbage_inputs
    }

    /// Number of domain codes, `2^width`.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Image of a domain code, `None` if the code is wider than the mapping.
    pub fn apply(&self, input: u64) -> Option<u64> {
        usize::try_from(input).ok().and_then(|i| self.table.get(i)).copied()
    }

    /// Preimage of a codomain code.
    pub fn invert(&self, output: u64) -> Option<u64> {
        self.table.iter().position(|&o| o == output).map(|i| i as u64)
    }

    /// Pairs `(input, output)` in ascending input order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.table.iter().enumerate().map(|(i, &o)| (i as u64, o))
    }

    /// Rows as fixed-width bit strings, sorted by input.
    pub fn rows(&self) -> Vec<(String, String)> {
        let w = self.width();
        self.iter().map(|(i, o)| (to_bit_string(i, w), to_bit_string(o, w))).collect()
    }

    /// The mapping transposed: one column per output bit (most significant
    /// first), each listing that bit for every input in ascending order.
    pub fn output_columns(&self) -> Vec<Vec<u8>> {
        let w = self.width();
        (0..w)
            .map(|bit| self.table.iter().map(|&o| msb_bit(o, w, bit) as u8).collect())
            .collect()
    }

    /// Checks that every codomain code is hit exactly once.
    pub fn is_bijection(&self) -> bool {
        let mut seen = BitSet::new(self.table.len());
        self.table.iter().all(|&o| (o as usize) < seen.universe() && seen.insert(o as usize)) && seen.is_full()
    }
}

impl fmt::Display for ReversibleMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (input, output) in self.rows() {
            writeln!(f, "{} -> {}", input, output)?;
        }
        Ok(())
    }
}
