//! Reading truth tables and function maps from text.
//!
//! # Truth tables
//!
//! One table per line, as whitespace-separated `0`/`1` tokens. Blank lines
//! are ignored:
//!
//! ```text
//! 0 1 1 0
//!
//! 0 0 0 1
//! ```
//!
//! # Function maps
//!
//! One entry per line, as an input and an output bit string. The widths are
//! taken from the first entry. Blank lines and lines starting with `#` are
//! ignored:
//!
//! ```text
//! # n=2, m=1
//! 00 1
//! 01 0
//! ```

use std::fs;
use std::io;
use std::path::Path;

use crate::embed::FunctionMap;
use crate::error::SynthError;
use crate::table::TruthTable;

/// Error type for I/O operations.
#[derive(Debug)]
pub enum ParseError {
    /// Underlying I/O error.
    Io(io::Error),
    /// A token that is not a valid bit or bit string.
    Token { line: usize, token: String },
    /// A line with the wrong number of fields or inconsistent widths.
    Line { line: usize, message: String },
    /// The parsed data violates a table or map invariant.
    Invalid { line: usize, source: SynthError },
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "I/O error: {}", e),
            ParseError::Token { line, token } => write!(f, "Invalid token '{}' on line {}", token, line),
            ParseError::Line { line, message } => write!(f, "Line {}: {}", line, message),
            ParseError::Invalid { line, source } => write!(f, "Line {}: {}", line, source),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            ParseError::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parses one truth table per non-blank line.
pub fn parse_truth_tables(content: &str) -> Result<Vec<TruthTable>, ParseError> {
    let mut tables = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let bits = line
            .split_whitespace()
            .map(|token| match token {
                "0" => Ok(false),
                "1" => Ok(true),
                _ => Err(ParseError::Token {
                    line: line_no,
                    token: token.to_string(),
                }),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        let table = TruthTable::new(bits).map_err(|source| ParseError::Invalid { line: line_no, source })?;
        tables.push(table);
    }
    Ok(tables)
}

/// Reads truth tables from a file, see [`parse_truth_tables`].
pub fn load_truth_tables<P: AsRef<Path>>(path: P) -> Result<Vec<TruthTable>, ParseError> {
    let content = fs::read_to_string(path)?;
    parse_truth_tables(&content)
}

fn parse_code(token: &str, line: usize) -> Result<u64, ParseError> {
    if token.is_empty() || !token.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(ParseError::Token {
            line,
            token: token.to_string(),
        });
    }
    u64::from_str_radix(token, 2).map_err(|_| ParseError::Token {
        line,
        token: token.to_string(),
    })
}

/// Parses a function map given as `input output` bit-string pairs.
///
/// Returns `Ok(None)` if the content has no entries.
pub fn parse_function_map(content: &str) -> Result<Option<FunctionMap>, ParseError> {
    let mut entries: Vec<(usize, &str, &str)> = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(ParseError::Line {
                line: line_no,
                message: format!("expected 2 fields, found {}", parts.len()),
            });
        }
        entries.push((line_no, parts[0], parts[1]));
    }

    let Some(&(first_line, first_input, first_output)) = entries.first() else {
        return Ok(None);
    };
    let mut map = FunctionMap::new(first_input.len(), first_output.len())
        .map_err(|source| ParseError::Invalid { line: first_line, source })?;

    for (line_no, input, output) in entries {
        if input.len() != map.num_inputs() || output.len() != map.num_outputs() {
            return Err(ParseError::Line {
                line: line_no,
                message: format!(
                    "expected widths {}/{}, found {}/{}",
                    map.num_inputs(),
                    map.num_outputs(),
                    input.len(),
                    output.len()
                ),
            });
        }
        map.insert(parse_code(input, line_no)?, parse_code(output, line_no)?)
            .map_err(|source| ParseError::Invalid { line: line_no, source })?;
    }
    Ok(Some(map))
}

/// Reads a function map from a file, see [`parse_function_map`].
pub fn load_function_map<P: AsRef<Path>>(path: P) -> Result<Option<FunctionMap>, ParseError> {
    let content = fs::read_to_string(path)?;
    parse_function_map(&content)
}
