//! Free-text user search, as used by the header search box.
//!
//! A user matches when the query appears, ignoring case, in the username, the
//! email or the personal full name, or appears verbatim in the phone number.
//! The query is used exactly as typed, so an empty query matches every user.
//! Results keep load order.

use crate::model::User;
use crate::store::RecordStore;

fn matches(user: &User, folded: &str, raw: &str) -> bool {
    user.user_name.to_lowercase().contains(folded)
        || user.email.to_lowercase().contains(folded)
        || user
            .personal_information
            .full_name
            .to_lowercase()
            .contains(folded)
        || user.phone_number.contains(raw)
}

pub fn run<S: RecordStore + ?Sized>(store: &S, query: &str) -> Vec<User> {
    let folded = query.to_lowercase();

    let hits: Vec<User> = store
        .all()
        .into_iter()
        .filter(|user| matches(user, &folded, query))
        .collect();
    tracing::debug!(query, hits = hits.len(), "searched users");
    hits
}
