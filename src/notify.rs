//! User notification channel
//!
//! The session never talks to a presentation layer directly; it hands
//! `Notice`s to a `Notifier`, which the web build turns into DOM updates
//! and alerts.

use crate::error::PredictorError;
use crate::predict::Prediction;

/// Something the user should see
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Sequence written to storage
    Saved,
    /// Result of a predict request
    Prediction(Prediction),
    /// Input or storage operation rejected; state unchanged
    Rejected(PredictorError),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Saved => "String saved successfully!".to_string(),
            Notice::Prediction(p) => p.to_string(),
            Notice::Rejected(e) => e.user_message(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Rejected(_))
    }
}

/// Receiver of user notices
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in order
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Logs notices and discards them
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        if notice.is_error() {
            log::warn!("{}", notice.message());
        } else {
            log::info!("{}", notice.message());
        }
    }
}
