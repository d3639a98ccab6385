//! # soletrack
//!
//! The logical core of a sneaker-resale transaction tracker: an in-memory
//! record store plus the edit-session state machine behind its form.
//!
//! ## Core Concepts
//!
//! - **Records**: dated income/expense entries for a sneaker brand, kept in
//!   insertion order with store-assigned ids
//! - **Drafts**: unsaved field sets submitted by the form collaborator
//! - **Edit sessions**: whether a submit creates a new record or overwrites
//!   the one being edited
//! - **Notifications**: confirmation events emitted after every mutation
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use soletrack::{Brand, EditController, RecordStore, TransactionDraft, TransactionType};
//!
//! let mut store = RecordStore::new();
//! let mut controller = EditController::new();
//!
//! // Submit from create mode appends a record.
//! let outcome = controller.submit(&mut store, TransactionDraft::new(
//!     NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
//!     150.0,
//!     TransactionType::Expense,
//!     Brand::Nike,
//! ))?;
//! let id = outcome.record().id;
//!
//! // Edit it: the next submit overwrites in place.
//! controller.begin_edit(store.get(id).cloned().unwrap());
//! controller.submit(&mut store, TransactionDraft::new(
//!     NaiveDate::from_ymd_opt(2023, 10, 2).unwrap(),
//!     999.0,
//!     TransactionType::Expense,
//!     Brand::Nike,
//! ))?;
//!
//! assert_eq!(store.list()[0].amount, 999.0);
//! # Ok::<(), soletrack::StoreError>(())
//! ```

pub mod error;
pub mod notifications;
pub mod session;
pub mod store;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use notifications::{NotificationHub, StoreEvent, SubscriptionHandle, SubscriptionId};
pub use session::{EditController, EditSession, SaveOutcome};
pub use store::RecordStore;
pub use types::{Brand, RecordId, TransactionDraft, TransactionRecord, TransactionType};
