//! Edit-session state machine.
//!
//! Decides whether a submitted form draft creates a new record or overwrites
//! an existing one, and always returns to the create state afterwards.

use crate::error::Result;
use crate::store::RecordStore;
use crate::types::{TransactionDraft, TransactionRecord};

/// Current mode of the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditSession {
    /// Submitting creates a new record.
    #[default]
    Create,

    /// Submitting overwrites the target record. The snapshot is what the
    /// form collaborator pre-populates its fields from.
    Edit(TransactionRecord),
}

/// What a successful submit did.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveOutcome {
    Created(TransactionRecord),
    Updated(TransactionRecord),
}

impl SaveOutcome {
    /// The record as stored after the save.
    pub fn record(&self) -> &TransactionRecord {
        match self {
            SaveOutcome::Created(record) | SaveOutcome::Updated(record) => record,
        }
    }
}

/// Routes form submissions to the record store.
///
/// The session is consumed before the store is called, so the controller is
/// back in [`EditSession::Create`] whatever the store returns.
#[derive(Debug, Default)]
pub struct EditController {
    session: EditSession,
}

impl EditController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to edit mode targeting the given record.
    pub fn begin_edit(&mut self, record: TransactionRecord) {
        self.session = EditSession::Edit(record);
    }

    /// Whether a submit would overwrite an existing record.
    pub fn is_editing(&self) -> bool {
        matches!(self.session, EditSession::Edit(_))
    }

    /// The record being edited, if any. Present iff in edit mode.
    pub fn target(&self) -> Option<&TransactionRecord> {
        match &self.session {
            EditSession::Create => None,
            EditSession::Edit(record) => Some(record),
        }
    }

    /// Route a submitted draft to the store.
    ///
    /// In create mode the draft becomes a new record; in edit mode it
    /// replaces the target. Either way the session resets to create mode.
    pub fn submit(&mut self, store: &mut RecordStore, draft: TransactionDraft) -> Result<SaveOutcome> {
        match std::mem::take(&mut self.session) {
            EditSession::Create => Ok(SaveOutcome::Created(store.create(draft))),
            EditSession::Edit(target) => store.update(target.id, draft).map(SaveOutcome::Updated),
        }
    }

    /// Discard the draft and return to create mode. The store is untouched.
    pub fn cancel(&mut self) {
        self.session = EditSession::Create;
    }
}
