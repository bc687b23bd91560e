//! # Status Mutator
//!
//! The only write path in the console. A status change overwrites the status of
//! one record in place and hands back the updated record; no other field moves
//! and no history is kept.
//!
//! - [`run`]: set any status
//! - [`activate`]: shorthand for [`UserStatus::Active`]
//! - [`blacklist`]: shorthand for [`UserStatus::Blacklisted`]

use crate::error::Result;
use crate::model::{User, UserStatus};
use crate::store::RecordStore;

pub fn run<S: RecordStore + ?Sized>(store: &S, id: &str, status: UserStatus) -> Result<User> {
    let id = id.trim();
    let user = store.set_status(id, status)?;
    tracing::info!(id, status = %status, "user status updated");
    Ok(user)
}

pub fn activate<S: RecordStore + ?Sized>(store: &S, id: &str) -> Result<User> {
    run(store, id, UserStatus::Active)
}

pub fn blacklist<S: RecordStore + ?Sized>(store: &S, id: &str) -> Result<User> {
    run(store, id, UserStatus::Blacklisted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn activate_then_blacklist() {
        let store = StoreFixture::new().with_users(2, UserStatus::Pending).build();

        let user = activate(&store, "u-1").unwrap();
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(store.get("u-1").unwrap().status, UserStatus::Active);

        let user = blacklist(&store, "u-1").unwrap();
        assert_eq!(user.status, UserStatus::Blacklisted);
        assert_eq!(store.get("u-2").unwrap().status, UserStatus::Pending);
    }

    #[test]
    fn setting_the_same_status_is_harmless() {
        let store = StoreFixture::new().with_users(1, UserStatus::Inactive).build();
        let before = store.get("u-1").unwrap();
        let after = run(&store, "u-1", UserStatus::Inactive).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_id_fails_and_store_is_unchanged() {
        let store = StoreFixture::new().with_users(3, UserStatus::Pending).build();
        let before = store.all();
        let err = run(&store, "unknown-id", UserStatus::Active).unwrap_err();
        assert!(matches!(err, AdminError::UserNotFound(_)));
        assert_eq!(store.all(), before);
    }
}
