use super::RecordStore;
use crate::error::{AdminError, Result};
use crate::model::{User, UserStatus};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory record store.
///
/// Records sit behind a `parking_lot::RwLock` so the store can be shared across
/// tasks: `all()` clones a snapshot under the read lock, `set_status` replaces a
/// field under the write lock, so no reader ever sees a half-written record.
///
/// Identifiers are immutable and records are never added or removed after load,
/// so the id → position index is built once and needs no lock.
pub struct InMemoryStore {
    records: RwLock<Vec<User>>,
    positions: HashMap<String, usize>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            positions: HashMap::new(),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records in their canonical order.
    ///
    /// Fails with a validation error if two records share an id.
    pub fn from_users(users: Vec<User>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(users.len());
        for (pos, user) in users.iter().enumerate() {
            if positions.insert(user.id.clone(), pos).is_some() {
                return Err(AdminError::Validation(format!(
                    "Duplicate user id in dataset: {}",
                    user.id
                )));
            }
        }

        Ok(Self {
            records: RwLock::new(users),
            positions,
        })
    }
}

impl RecordStore for InMemoryStore {
    fn all(&self) -> Vec<User> {
        self.records.read().clone()
    }

    fn get(&self, id: &str) -> Option<User> {
        let pos = *self.positions.get(id)?;
        self.records.read().get(pos).cloned()
    }

    fn set_status(&self, id: &str, status: UserStatus) -> Result<User> {
        let pos = *self
            .positions
            .get(id)
            .ok_or_else(|| AdminError::UserNotFound(id.to_string()))?;

        let mut records = self.records.write();
        let user = records
            .get_mut(pos)
            .ok_or_else(|| AdminError::Store(format!("Index out of sync for user {}", id)))?;
        user.status = status;
        Ok(user.clone())
    }

    fn len(&self) -> usize {
        self.records.read().len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    /// Builder for small, hand-shaped stores.
    ///
    /// Users get ids `u-1`, `u-2`, ... in insertion order and join one day apart
    /// starting 2021-01-01.
    #[derive(Default)]
    pub struct StoreFixture {
        users: Vec<User>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_user(mut self, org: &str, user_name: &str, status: UserStatus) -> Self {
            let n = self.users.len() + 1;
            let joined = Utc.with_ymd_and_hms(2021, 1, 1, 9, 0, 0).unwrap()
                + Duration::days(n as i64 - 1);
            self.users.push(User::new(
                format!("u-{}", n),
                org,
                user_name,
                format!("{}@{}.com", user_name.to_lowercase(), org.to_lowercase()),
                format!("0803{:07}", n),
                joined,
                status,
            ));
            self
        }

        pub fn with_users(mut self, count: usize, status: UserStatus) -> Self {
            for _ in 0..count {
                let n = self.users.len() + 1;
                self = self.with_user("Lendsqr", &format!("user{}", n), status);
            }
            self
        }

        pub fn users(&self) -> &[User] {
            &self.users
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::from_users(self.users).unwrap()
        }
    }
}
