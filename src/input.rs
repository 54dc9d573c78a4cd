//! Input acquisition and line normalization
//!
//! Reads raw yamllint output from a file or piped stdin and reduces it to
//! trimmed, non-empty lines. Knows nothing about the diagnostic grammar.

use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Where the yamllint output comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read from a file path
    File(PathBuf),
    /// Read from piped standard input
    Stdin,
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "stdin"),
        }
    }
}

impl InputSource {
    /// Read and normalize all lines from the source.
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        let lines = match self {
            InputSource::File(path) => normalize_lines(BufReader::new(File::open(path)?))?,
            InputSource::Stdin => normalize_lines(io::stdin().lock())?,
        };
        debug!("{} non-empty lines read from {}", lines.len(), self);
        Ok(lines)
    }
}

/// Collect trimmed, non-empty lines from a reader, preserving order.
///
/// Whitespace-only lines are dropped entirely rather than kept as empty
/// strings.
pub fn normalize_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}
