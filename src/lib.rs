//! TDE Predictor - next-symbol lookup over a T/D/E sequence
//!
//! Core modules:
//! - `alphabet`: The {T, D, E} alphabet and input validation
//! - `sequence`: The maintained symbol sequence
//! - `predict`: Leftmost-match next-symbol prediction
//! - `session`: Session state and action dispatch
//! - `persistence`: Load/save over a key-value store
//! - `platform`: Browser/native platform abstraction
//! - `notify`: User notification channel

pub mod alphabet;
pub mod error;
pub mod notify;
pub mod persistence;
pub mod platform;
pub mod predict;
pub mod sequence;
pub mod session;
pub mod settings;

pub use alphabet::{Symbol, validate};
pub use error::{PredictorError, Result};
pub use notify::{Notice, Notifier};
pub use predict::{Prediction, WindowSize, predict};
pub use sequence::Sequence;
pub use session::{Action, Session};
pub use settings::Settings;
