//! # API Facade
//!
//! [`AdminApi`] is the single entry point UI clients use. It is a thin async
//! layer over the command layer that adds exactly one behavior: every data
//! operation waits out a configurable latency before it resolves, the way a
//! remote backend would.
//!
//! ## Latency
//!
//! The wait is a `tokio::time::sleep` and the only suspension point. Inputs are
//! validated **before** the wait, so a bad query fails fast. A latency of zero
//! skips the sleep entirely. Dropping a returned future cancels its pending wait;
//! nothing keeps running in the background.
//!
//! ## Sharing
//!
//! The store is held in an [`Arc`], so the facade and any number of spawned tasks
//! can use the same records. Consistency between concurrent readers and status
//! writers is the store's concern (see [`crate::store::memory::InMemoryStore`]).
//!
//! ## Generic Over RecordStore
//!
//! `AdminApi<S: RecordStore>` runs against any store. The CLI and the tests both use
//! [`crate::store::memory::InMemoryStore`].

use crate::commands::{self, list::UserPage, list::UserQuery, stats::StatsPolicy};
use crate::error::Result;
use crate::model::{User, UserStats, UserStatus};
use crate::store::RecordStore;
use std::sync::Arc;
use std::time::Duration;

/// Simulated round-trip time for every data operation.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

pub struct AdminApi<S: RecordStore> {
    store: Arc<S>,
    latency: Duration,
    stats_policy: StatsPolicy,
}

impl<S: RecordStore> Clone for AdminApi<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            latency: self.latency,
            stats_policy: self.stats_policy,
        }
    }
}

impl<S: RecordStore> AdminApi<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            latency: DEFAULT_LATENCY,
            stats_policy: StatsPolicy::default(),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_stats_policy(mut self, policy: StatsPolicy) -> Self {
        self.stats_policy = policy;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn list_users(&self, query: &UserQuery) -> Result<UserPage> {
        query.validate()?;
        self.delay().await;
        commands::list::run(self.store.as_ref(), query)
    }

    pub async fn get_user(&self, id: &str) -> Option<User> {
        self.delay().await;
        commands::get::run(self.store.as_ref(), id)
    }

    pub async fn update_user_status(&self, id: &str, status: UserStatus) -> Result<User> {
        self.delay().await;
        commands::status::run(self.store.as_ref(), id, status)
    }

    pub async fn activate_user(&self, id: &str) -> Result<User> {
        self.update_user_status(id, UserStatus::Active).await
    }

    pub async fn blacklist_user(&self, id: &str) -> Result<User> {
        self.update_user_status(id, UserStatus::Blacklisted).await
    }

    pub async fn user_stats(&self) -> UserStats {
        self.delay().await;
        commands::stats::run(self.store.as_ref(), &self.stats_policy)
    }

    pub async fn search_users(&self, query: &str) -> Vec<User> {
        self.delay().await;
        commands::search::run(self.store.as_ref(), query)
    }

    /// Organization names for the filter picker. Read from memory, no wait.
    pub fn organizations(&self) -> Vec<String> {
        commands::organizations::run(self.store.as_ref())
    }
}
