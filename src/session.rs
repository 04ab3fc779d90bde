//! Session state and action dispatch
//!
//! A `Session` owns everything the page used to keep in ambient state:
//! the sequence, edit mode, window size, current query and last
//! prediction. The UI feeds it `Action`s; results and errors come back
//! as `Notice`s.

use crate::alphabet::{Symbol, parse_symbols};
use crate::error::{PredictorError, Result};
use crate::notify::{Notice, Notifier};
use crate::persistence::{KeyValueStore, SequenceStore};
use crate::predict::{Prediction, WindowSize, predict};
use crate::sequence::Sequence;
use crate::settings::Settings;

/// A user request coming from the interaction surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add one symbol to the end of the sequence
    Append(Symbol),
    /// Enter or leave edit mode
    ToggleEdit,
    /// Replace the sequence with edited text
    CommitEdit(String),
    /// Change the window size from user text
    SetWindowSize(String),
    /// Change the search query
    SetQuery(String),
    /// Predict the next symbol for the current query
    Predict,
    /// Persist the sequence
    Save,
}

/// One user's working session over a single sequence
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    sequence: Sequence,
    editing: bool,
    query: String,
    prediction: Option<Prediction>,
    settings: Settings,
    store: SequenceStore<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session, loading settings and the stored sequence.
    ///
    /// A sequence that cannot be loaded is reported and the session starts
    /// empty; the stored value is left as it was.
    pub fn open<N: Notifier + ?Sized>(store: S, notifier: &mut N) -> Self {
        let settings = Settings::load(&store);
        let store = SequenceStore::with_key(store, settings.sequence_key.clone());

        let sequence = match store.load() {
            Ok(sequence) => sequence,
            Err(e) => {
                log::error!("Failed to load sequence: {}", e);
                notifier.notify(Notice::Rejected(e));
                Sequence::new()
            }
        };

        Self {
            sequence,
            editing: false,
            query: String::new(),
            prediction: None,
            settings,
            store,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn window_size(&self) -> WindowSize {
        self.settings.window_size
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn last_prediction(&self) -> Option<Prediction> {
        self.prediction
    }

    pub fn store(&self) -> &SequenceStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SequenceStore<S> {
        &mut self.store
    }

    pub fn append(&mut self, symbol: Symbol) {
        self.sequence.append(symbol);
        log::debug!("Appended {} (length {})", symbol, self.sequence.len());
    }

    pub fn toggle_edit(&mut self) {
        self.editing = !self.editing;
        log::debug!("Edit mode: {}", self.editing);
    }

    /// Validated replace of the whole sequence; only allowed in edit mode
    pub fn commit_edit(&mut self, text: &str) -> Result<()> {
        if !self.editing {
            return Err(PredictorError::EditingDisabled);
        }
        self.sequence.replace(text)
    }

    /// Parse and apply a new window size.
    ///
    /// The new size is kept for the session even if it cannot be persisted;
    /// the storage error is still returned.
    pub fn set_window_size(&mut self, text: &str) -> Result<()> {
        let window_size: WindowSize = text.parse()?;
        self.settings.window_size = window_size;
        self.settings.save(self.store.backend_mut())
    }

    pub fn set_query(&mut self, text: &str) -> Result<()> {
        self.query = parse_symbols(text)?;
        Ok(())
    }

    pub fn predict(&mut self) -> Result<Prediction> {
        let prediction = predict(self.sequence.as_str(), &self.query, self.settings.window_size)?;
        self.prediction = Some(prediction);
        Ok(prediction)
    }

    /// Persist the sequence and leave edit mode
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.sequence)?;
        self.editing = false;
        Ok(())
    }

    /// Run one action, reporting its outcome to `notifier`
    pub fn handle<N: Notifier + ?Sized>(&mut self, action: Action, notifier: &mut N) {
        let result = match action {
            Action::Append(symbol) => {
                self.append(symbol);
                Ok(None)
            }
            Action::ToggleEdit => {
                self.toggle_edit();
                Ok(None)
            }
            Action::CommitEdit(text) => self.commit_edit(&text).map(|()| None),
            Action::SetWindowSize(text) => self.set_window_size(&text).map(|()| None),
            Action::SetQuery(text) => self.set_query(&text).map(|()| None),
            Action::Predict => self.predict().map(|p| Some(Notice::Prediction(p))),
            Action::Save => self.save().map(|()| Some(Notice::Saved)),
        };

        match result {
            Ok(Some(notice)) => notifier.notify(notice),
            Ok(None) => {}
            Err(e) => {
                match e {
                    PredictorError::StorageFailure(_) => log::error!("{}", e),
                    _ => log::warn!("Rejected: {}", e),
                }
                notifier.notify(Notice::Rejected(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::persistence::store::DEFAULT_SEQUENCE_KEY;

    fn session_with(sequence: &str) -> (Session<MemoryStore>, Vec<Notice>) {
        let mut backend = MemoryStore::new();
        backend.set(DEFAULT_SEQUENCE_KEY, sequence).unwrap();
        let mut notices: Vec<Notice> = Vec::new();
        let session = Session::open(backend, &mut notices);
        (session, notices)
    }

    #[test]
    fn test_open_loads_stored_sequence() {
        let (session, notices) = session_with("TDE");
        assert_eq!(session.sequence().as_str(), "TDE");
        assert!(!session.is_editing());
        assert_eq!(session.window_size().get(), 10);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_open_with_corrupt_sequence_starts_empty() {
        let (session, notices) = session_with("TDQ");
        assert!(session.sequence().is_empty());
        assert!(matches!(
            notices.as_slice(),
            [Notice::Rejected(PredictorError::InvalidAlphabet { .. })]
        ));
        // Stored value is not clobbered
        assert_eq!(
            session.store().backend().get(DEFAULT_SEQUENCE_KEY).unwrap().as_deref(),
            Some("TDQ")
        );
    }

    #[test]
    fn test_append_and_predict() {
        let (mut session, _) = session_with("");
        let mut notices: Vec<Notice> = Vec::new();
        for c in "TDETDT".chars() {
            let symbol = Symbol::from_char(c).unwrap();
            session.handle(Action::Append(symbol), &mut notices);
        }
        session.handle(Action::SetWindowSize("2".into()), &mut notices);
        session.handle(Action::SetQuery("td".into()), &mut notices);
        session.handle(Action::Predict, &mut notices);

        assert_eq!(session.query(), "TD");
        assert_eq!(
            notices,
            vec![Notice::Prediction(Prediction::Predicted('E'))]
        );
        assert_eq!(session.last_prediction(), Some(Prediction::Predicted('E')));
    }

    #[test]
    fn test_predict_with_wrong_query_length() {
        let (mut session, _) = session_with("TDETDT");
        let mut notices: Vec<Notice> = Vec::new();
        session.handle(Action::SetQuery("TD".into()), &mut notices);
        session.handle(Action::Predict, &mut notices);
        assert_eq!(
            notices,
            vec![Notice::Rejected(PredictorError::InvalidQueryLength {
                expected: 10,
                actual: 2
            })]
        );
        assert_eq!(session.last_prediction(), None);
    }

    #[test]
    fn test_invalid_query_keeps_previous() {
        let (mut session, _) = session_with("");
        session.set_query("TD").unwrap();
        assert!(session.set_query("TDX").is_err());
        assert_eq!(session.query(), "TD");
    }

    #[test]
    fn test_invalid_window_size_keeps_previous() {
        let (mut session, _) = session_with("");
        session.set_window_size("3").unwrap();
        let mut notices: Vec<Notice> = Vec::new();
        for bad in ["0", "-1", "abc", ""] {
            session.handle(Action::SetWindowSize(bad.into()), &mut notices);
        }
        assert_eq!(session.window_size().get(), 3);
        assert_eq!(notices.len(), 4);
        assert!(notices.iter().all(|n| matches!(
            n,
            Notice::Rejected(PredictorError::InvalidWindowSize(_))
        )));
    }

    #[test]
    fn test_window_size_survives_reopen() {
        let (mut session, _) = session_with("TTT");
        session.set_window_size("2").unwrap();
        let backend = session.store().backend().clone();

        let reopened = Session::open(backend, &mut Vec::<Notice>::new());
        assert_eq!(reopened.window_size().get(), 2);
    }

    #[test]
    fn test_commit_edit_requires_edit_mode() {
        let (mut session, _) = session_with("TDE");
        assert_eq!(
            session.commit_edit("EEE"),
            Err(PredictorError::EditingDisabled)
        );
        assert_eq!(session.sequence().as_str(), "TDE");

        session.toggle_edit();
        session.commit_edit("eee").unwrap();
        assert_eq!(session.sequence().as_str(), "EEE");
    }

    #[test]
    fn test_invalid_edit_is_noop() {
        let (mut session, _) = session_with("TDE");
        let mut notices: Vec<Notice> = Vec::new();
        session.handle(Action::ToggleEdit, &mut notices);
        session.handle(Action::CommitEdit("TD E".into()), &mut notices);
        assert_eq!(session.sequence().as_str(), "TDE");
        assert!(notices[0].is_error());
    }

    #[test]
    fn test_edits_are_not_persisted_until_save() {
        let (mut session, _) = session_with("TDE");
        session.append(Symbol::T);
        assert_eq!(session.store().load().unwrap().as_str(), "TDE");

        let mut notices: Vec<Notice> = Vec::new();
        session.handle(Action::ToggleEdit, &mut notices);
        session.handle(Action::Save, &mut notices);
        assert_eq!(notices, vec![Notice::Saved]);
        assert!(!session.is_editing());
        assert_eq!(session.store().load().unwrap().as_str(), "TDET");
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let (mut session, _) = session_with("TD");
        session.append(Symbol::E);
        session.toggle_edit();
        session.store_mut().backend_mut().fail_writes = true;

        let mut notices: Vec<Notice> = Vec::new();
        session.handle(Action::Save, &mut notices);

        assert!(matches!(
            notices.as_slice(),
            [Notice::Rejected(PredictorError::StorageFailure(_))]
        ));
        assert_eq!(session.sequence().as_str(), "TDE");
        assert!(session.is_editing());
        assert_eq!(session.store().load().unwrap().as_str(), "TD");
    }

    #[test]
    fn test_open_with_unreadable_store_starts_empty() {
        let mut backend = MemoryStore::new();
        backend.set(DEFAULT_SEQUENCE_KEY, "TDE").unwrap();
        backend.fail_reads = true;

        let mut notices: Vec<Notice> = Vec::new();
        let session = Session::open(backend, &mut notices);

        assert!(session.sequence().is_empty());
        assert_eq!(session.window_size().get(), WindowSize::DEFAULT);
        assert!(matches!(
            notices.as_slice(),
            [Notice::Rejected(PredictorError::StorageFailure(_))]
        ));
    }

    #[test]
    fn test_unavailable_store_never_confirms_save() {
        let mut notices: Vec<Notice> = Vec::new();
        let mut session = Session::open(MemoryStore::unavailable(), &mut notices);
        assert!(notices.is_empty());

        session.handle(Action::Append(Symbol::T), &mut notices);
        session.handle(Action::Save, &mut notices);

        assert!(matches!(
            notices.as_slice(),
            [Notice::Rejected(PredictorError::StorageFailure(_))]
        ));
        assert!(!notices.contains(&Notice::Saved));
        assert_eq!(session.sequence().as_str(), "T");
    }

    #[test]
    fn test_window_size_kept_when_settings_cannot_be_written() {
        let (mut session, _) = session_with("TDT");
        session.store_mut().backend_mut().fail_writes = true;

        let mut notices: Vec<Notice> = Vec::new();
        session.handle(Action::SetWindowSize("2".into()), &mut notices);

        assert!(matches!(
            notices.as_slice(),
            [Notice::Rejected(PredictorError::StorageFailure(_))]
        ));
        assert_eq!(session.window_size().get(), 2);

        session.handle(Action::SetQuery("TD".into()), &mut notices);
        session.handle(Action::Predict, &mut notices);
        assert_eq!(
            notices.last(),
            Some(&Notice::Prediction(Prediction::Predicted('T')))
        );
    }
}
