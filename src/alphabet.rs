//! The T/D/E alphabet and input validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};

/// One symbol of the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    T,
    D,
    E,
}

impl Symbol {
    pub const ALL: [Symbol; 3] = [Symbol::T, Symbol::D, Symbol::E];

    pub fn as_char(&self) -> char {
        match self {
            Symbol::T => 'T',
            Symbol::D => 'D',
            Symbol::E => 'E',
        }
    }

    /// Case-insensitive conversion
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'T' => Some(Symbol::T),
            'D' => Some(Symbol::D),
            'E' => Some(Symbol::E),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = PredictorError;

    fn try_from(c: char) -> Result<Self> {
        Symbol::from_char(c).ok_or_else(|| PredictorError::invalid_alphabet(&c.to_string(), c))
    }
}

/// Uppercase ASCII letters; everything else is left alone.
pub fn normalize(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// True iff every character is T, D or E (any case). Empty input is valid.
pub fn validate(s: &str) -> bool {
    s.chars().all(|c| Symbol::from_char(c).is_some())
}

/// Normalize and validate in one step, reporting the first bad character.
pub fn parse_symbols(s: &str) -> Result<String> {
    match s.chars().find(|&c| Symbol::from_char(c).is_none()) {
        Some(offending) => Err(PredictorError::invalid_alphabet(s, offending)),
        None => Ok(normalize(s)),
    }
}
