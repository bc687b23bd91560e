//! # Storage Layer
//!
//! This module defines the record store abstraction. The [`RecordStore`] trait is
//! the only way the command layer reaches user records, which keeps the listing
//! pipeline and the status mutator independent of where the records came from.
//!
//! ## Lifecycle
//!
//! Records are loaded **once** at startup (see [`dataset`]) and live for the
//! lifetime of the process. There is no persistence: the only mutation is a status
//! overwrite, and it is lost when the process exits.
//!
//! ## Sharing
//!
//! Stores are shared between the API facade and any task that holds it, so every
//! method takes `&self` and implementations are `Send + Sync`. Readers must observe
//! each record either fully before or fully after a concurrent write.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: records behind a reader-writer lock, with an id index.
//!
//! ## Dataset Sources
//!
//! ```text
//! embedded seed    data/users.json compiled into the library
//! JSON file        any file in the same shape (config key `dataset`)
//! synthetic        deterministic generator, N records (N <= 100_000)
//! ```

use crate::error::Result;
use crate::model::{User, UserStatus};

pub mod dataset;
pub mod memory;

/// Abstract interface for user record storage.
pub trait RecordStore: Send + Sync {
    /// All records in load order.
    fn all(&self) -> Vec<User>;

    /// Look up a record. Absence is an expected outcome, not an error.
    fn get(&self, id: &str) -> Option<User>;

    /// Overwrite the status of one record and return the updated record.
    ///
    /// Fails with `UserNotFound` when no record has the id; the store is left unchanged.
    fn set_status(&self, id: &str, status: UserStatus) -> Result<User>;

    /// Number of records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
