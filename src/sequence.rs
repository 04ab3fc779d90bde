//! The maintained symbol sequence

use std::fmt;

use crate::alphabet::{Symbol, parse_symbols};
use crate::error::Result;

/// An ordered string over {T, D, E}.
///
/// The inner string only ever holds uppercase T/D/E: both mutators go
/// through the alphabet, so no invalid state is reachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    symbols: String,
}

impl Sequence {
    pub fn new() -> Self {
        Self {
            symbols: String::new(),
        }
    }

    /// Build from text, failing if any character is outside the alphabet
    pub fn parse(s: &str) -> Result<Self> {
        Ok(Self {
            symbols: parse_symbols(s)?,
        })
    }

    pub fn append(&mut self, symbol: Symbol) {
        self.symbols.push(symbol.as_char());
    }

    /// Replace the whole sequence. On error the current value is untouched.
    pub fn replace(&mut self, s: &str) -> Result<()> {
        let symbols = parse_symbols(s)?;
        self.symbols = symbols;
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}
