//! The in-memory record store.
//!
//! Sole authority over the transaction collection and id assignment.
//! Records live in a `Vec` whose order is insertion order; the presentation
//! layer re-reads `list()` after every mutation.

use crate::error::{Result, StoreError};
use crate::notifications::{NotificationHub, StoreEvent, SubscriptionHandle};
use crate::types::{RecordId, TransactionDraft, TransactionRecord};
use std::collections::HashSet;
use tracing::debug;

/// Ordered collection of transaction records.
///
/// Ids are assigned from a monotonic counter and never reused within a
/// session, so a create after a delete cannot collide with a live record.
pub struct RecordStore {
    /// Records in insertion order (also the display order).
    records: Vec<TransactionRecord>,

    /// Next id to hand out.
    next_id: RecordId,

    /// Confirmation event fan-out.
    notifications: NotificationHub,
}

impl RecordStore {
    /// Create an empty store. The first record gets id 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: RecordId(1),
            notifications: NotificationHub::new(),
        }
    }

    /// Create a store seeded with existing records.
    ///
    /// Seed ids must be unique; the allocator continues past the largest
    /// seeded id. Seeding emits no events.
    pub fn with_records(records: Vec<TransactionRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut max_id = RecordId(0);

        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
            max_id = max_id.max(record.id);
        }

        Ok(Self {
            records,
            next_id: max_id.next(),
            notifications: NotificationHub::new(),
        })
    }

    /// Current records in insertion order.
    pub fn list(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&TransactionRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a new record built from the draft. Always succeeds.
    pub fn create(&mut self, draft: TransactionDraft) -> TransactionRecord {
        let id = self.next_id;
        self.next_id = id.next();

        let record = draft.into_record(id);
        self.records.push(record.clone());
        debug!(%id, "record created");

        self.notifications.emit(StoreEvent::RecordCreated {
            record: record.clone(),
        });
        record
    }

    /// Replace the record with the given id in place.
    ///
    /// The id is carried over from the existing record; the position in the
    /// sequence is unchanged.
    pub fn update(&mut self, id: RecordId, draft: TransactionDraft) -> Result<TransactionRecord> {
        let slot = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;

        *slot = draft.into_record(id);
        let record = slot.clone();
        debug!(%id, "record updated");

        self.notifications.emit(StoreEvent::RecordUpdated {
            record: record.clone(),
        });
        Ok(record)
    }

    /// Remove the record with the given id.
    ///
    /// Forgiving: deleting an id that is not present is a no-op, not an
    /// error, and still emits a confirmation (with `existed: false`).
    pub fn delete(&mut self, id: RecordId) {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let existed = self.records.len() < before;
        debug!(%id, existed, "record deleted");

        self.notifications.emit(StoreEvent::RecordDeleted { id, existed });
    }

    /// Subscribe to confirmation events for every mutation.
    pub fn subscribe(&self) -> SubscriptionHandle {
        self.notifications.subscribe()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
