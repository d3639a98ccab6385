//! Confirmation events broadcast after store mutations.
//!
//! The store never depends on delivery: a full or disconnected subscriber
//! is dropped on the next emit instead of blocking the mutation.

use crate::types::{RecordId, TransactionRecord};
use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default max buffered events per subscriber.
const DEFAULT_BUFFER_SIZE: usize = 64;

/// Events emitted by the store.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A new record was appended.
    RecordCreated { record: TransactionRecord },

    /// A record was replaced in place.
    RecordUpdated { record: TransactionRecord },

    /// A delete was applied. `existed` is false when no record had the id;
    /// the delete still counts as a success.
    RecordDeleted { id: RecordId, existed: bool },
}

impl StoreEvent {
    /// Plain confirmation text for the notification collaborator.
    pub fn message(&self) -> &'static str {
        match self {
            StoreEvent::RecordCreated { .. } => "Transaction added successfully",
            StoreEvent::RecordUpdated { .. } => "Transaction updated successfully",
            StoreEvent::RecordDeleted { .. } => "Transaction deleted successfully",
        }
    }
}

/// Unique identifier for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Handle to manage a subscription.
pub struct SubscriptionHandle {
    pub id: SubscriptionId,
    /// Channel to receive events.
    pub receiver: Receiver<StoreEvent>,
}

impl SubscriptionHandle {
    /// Receive the next event (blocking).
    pub fn recv(&self) -> Result<StoreEvent, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event (non-blocking).
    pub fn try_recv(&self) -> Result<StoreEvent, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }
}

/// Internal subscription state.
struct Subscription {
    sender: Sender<StoreEvent>,
}

impl Subscription {
    /// Try to send an event. Returns false if the subscriber should be dropped.
    fn try_send(&self, event: StoreEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(crossbeam_channel::TrySendError::Full(_)) => false,
            Err(crossbeam_channel::TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Broadcasts store events to registered subscribers.
pub struct NotificationHub {
    /// Active subscriptions by ID.
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
    /// Counter for generating subscription IDs.
    next_id: AtomicU64,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a subscriber with the default buffer size.
    pub fn subscribe(&self) -> SubscriptionHandle {
        self.subscribe_with_buffer(DEFAULT_BUFFER_SIZE)
    }

    /// Register a subscriber with an explicit buffer size.
    pub fn subscribe_with_buffer(&self, buffer_size: usize) -> SubscriptionHandle {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (sender, receiver) = bounded(buffer_size);

        self.subscriptions
            .write()
            .insert(id, Subscription { sender });

        SubscriptionHandle { id, receiver }
    }

    /// Remove a subscription explicitly.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.write().remove(&id);
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    /// Broadcast an event, dropping subscribers that cannot accept it.
    pub(crate) fn emit(&self, event: StoreEvent) {
        let mut dropped = Vec::new();

        {
            let subscriptions = self.subscriptions.read();
            for (id, subscription) in subscriptions.iter() {
                if !subscription.try_send(event.clone()) {
                    dropped.push(*id);
                }
            }
        }

        if !dropped.is_empty() {
            let mut subscriptions = self.subscriptions.write();
            for id in dropped {
                subscriptions.remove(&id);
            }
        }
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}
