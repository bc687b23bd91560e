//! Single-record lookups.
//!
//! [`run`] treats an unknown id as an ordinary outcome and returns `None`;
//! [`require`] is for callers that need the record and turns absence into
//! [`AdminError::UserNotFound`].

use crate::error::{AdminError, Result};
use crate::model::User;
use crate::store::RecordStore;

pub fn run<S: RecordStore + ?Sized>(store: &S, id: &str) -> Option<User> {
    let user = store.get(id.trim());
    if user.is_none() {
        tracing::debug!(id, "user lookup missed");
    }
    user
}

pub fn require<S: RecordStore + ?Sized>(store: &S, id: &str) -> Result<User> {
    run(store, id).ok_or_else(|| AdminError::UserNotFound(id.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserStatus;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn finds_by_id() {
        let store = StoreFixture::new().with_users(3, UserStatus::Pending).build();
        assert_eq!(run(&store, "u-3").unwrap().user_name, "user3");
        assert_eq!(run(&store, " u-1 ").unwrap().user_name, "user1");
    }

    #[test]
    fn missing_id_is_none() {
        let store = StoreFixture::new().with_users(1, UserStatus::Pending).build();
        assert!(run(&store, "u-7").is_none());
    }

    #[test]
    fn require_reports_not_found() {
        let store = StoreFixture::new().build();
        match require(&store, "ghost") {
            Err(AdminError::UserNotFound(id)) => assert_eq!(id, "ghost"),
            other => panic!("Expected UserNotFound, got {:?}", other),
        }
    }
}
