//! Next-symbol prediction by leftmost substring match.
//!
//! The predictor looks up the first occurrence of the query in the sequence
//! and reports the character right after it. There is no counting across
//! occurrences: overlapping or later matches are ignored.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PredictorError, Result};

/// Required query length, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct WindowSize(NonZeroUsize);

impl WindowSize {
    /// Window size used before the user picks one
    pub const DEFAULT: usize = 10;

    pub fn new(n: usize) -> Result<Self> {
        NonZeroUsize::new(n)
            .map(Self)
            .ok_or_else(|| PredictorError::InvalidWindowSize(n.to_string()))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(Self::DEFAULT).unwrap_or(NonZeroUsize::MIN))
    }
}

impl FromStr for WindowSize {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| PredictorError::InvalidWindowSize(s.to_string()))
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = PredictorError;

    fn try_from(n: usize) -> Result<Self> {
        Self::new(n)
    }
}

impl From<WindowSize> for usize {
    fn from(w: WindowSize) -> usize {
        w.get()
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    /// Query not found, or found with nothing after it
    NoPrediction,
    /// Character following the leftmost match
    Predicted(char),
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::NoPrediction => write!(f, "No predictions available."),
            Prediction::Predicted(c) => write!(f, "Prediction is: \"{}\"", c),
        }
    }
}

/// Predict the character after the leftmost occurrence of `query`.
///
/// Fails with `InvalidQueryLength` before searching if `query` is not
/// exactly `window_size` characters long.
pub fn predict(sequence: &str, query: &str, window_size: WindowSize) -> Result<Prediction> {
    let actual = query.chars().count();
    if actual != window_size.get() {
        return Err(PredictorError::InvalidQueryLength {
            expected: window_size.get(),
            actual,
        });
    }

    let prediction = sequence
        .find(query)
        .and_then(|i| sequence[i + query.len()..].chars().next())
        .map_or(Prediction::NoPrediction, Prediction::Predicted);

    Ok(prediction)
}
