//! # Sort Engine
//!
//! Orders users by one column at a time. The comparison is lexicographic on the
//! column's string form (status by its name, join date by its fixed-width UTC
//! timestamp), and the sort is **stable**: users with equal keys keep their input
//! order in both directions, so toggling the direction never shuffles equal rows.
//!
//! With no [`SortSpec`] the input order is returned untouched.

use crate::error::{AdminError, Result};
use crate::model::User;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Organization,
    Username,
    Email,
    PhoneNumber,
    DateJoined,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Organization,
        SortKey::Username,
        SortKey::Email,
        SortKey::PhoneNumber,
        SortKey::DateJoined,
        SortKey::Status,
    ];

    /// The column name as the user table labels it.
    pub fn field_name(&self) -> &'static str {
        match self {
            SortKey::Organization => "orgName",
            SortKey::Username => "userName",
            SortKey::Email => "email",
            SortKey::PhoneNumber => "phoneNumber",
            SortKey::DateJoined => "dateJoined",
            SortKey::Status => "status",
        }
    }

    fn value<'a>(&self, user: &'a User) -> Cow<'a, str> {
        match self {
            SortKey::Organization => Cow::Borrowed(&user.org_name),
            SortKey::Username => Cow::Borrowed(&user.user_name),
            SortKey::Email => Cow::Borrowed(&user.email),
            SortKey::PhoneNumber => Cow::Borrowed(&user.phone_number),
            SortKey::DateJoined => Cow::Owned(user.date_joined_key()),
            SortKey::Status => Cow::Borrowed(user.status.as_str()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for SortKey {
    type Err = AdminError;

    /// Accepts the field name in camel, snake or kebab case, plus the short
    /// aliases `org`, `organization`, `phone`, `joined` and `date`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "orgname" | "org" | "organization" => Ok(SortKey::Organization),
            "username" | "user" => Ok(SortKey::Username),
            "email" => Ok(SortKey::Email),
            "phonenumber" | "phone" => Ok(SortKey::PhoneNumber),
            "datejoined" | "joined" | "date" => Ok(SortKey::DateJoined),
            "status" => Ok(SortKey::Status),
            _ => Err(AdminError::Validation(format!("Unknown sort key: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// The sort after a click on a column header.
    ///
    /// Clicking the active column while it is ascending flips it to descending;
    /// every other click sorts the clicked column ascending.
    pub fn toggle(current: Option<SortSpec>, clicked: SortKey) -> SortSpec {
        match current {
            Some(spec) if spec.key == clicked && spec.direction == SortDirection::Ascending => {
                SortSpec::descending(clicked)
            }
            _ => SortSpec::ascending(clicked),
        }
    }
}

/// Order users by `spec`, or return them unchanged when there is no sort.
pub fn apply(mut users: Vec<User>, spec: Option<SortSpec>) -> Vec<User> {
    let Some(spec) = spec else {
        return users;
    };

    // slice::sort_by is a stable merge sort.
    users.sort_by(|a, b| {
        let ord = spec.key.value(a).cmp(&spec.key.value(b));
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    users
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserStatus;
    use crate::store::memory::fixtures::StoreFixture;

    fn sample() -> Vec<User> {
        StoreFixture::new()
            .with_user("Lendsqr", "tosin", UserStatus::Pending)
            .with_user("Irorun", "adedeji", UserStatus::Active)
            .with_user("Lendstar", "grace", UserStatus::Pending)
            .with_user("Irorun", "debby", UserStatus::Blacklisted)
            .with_user("Kredi", "emeka", UserStatus::Active)
            .users()
            .to_vec()
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.user_name.as_str()).collect()
    }

    #[test]
    fn no_spec_preserves_order() {
        let users = sample();
        assert_eq!(apply(users.clone(), None), users);
    }

    #[test]
    fn sorts_by_username_ascending() {
        let result = apply(sample(), Some(SortSpec::ascending(SortKey::Username)));
        assert_eq!(
            names(&result),
            vec!["adedeji", "debby", "emeka", "grace", "tosin"]
        );
    }

    #[test]
    fn sorts_by_username_descending() {
        let result = apply(sample(), Some(SortSpec::descending(SortKey::Username)));
        assert_eq!(
            names(&result),
            vec!["tosin", "grace", "emeka", "debby", "adedeji"]
        );
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let asc = apply(sample(), Some(SortSpec::ascending(SortKey::Status)));
        // Active < Blacklisted < Pending
        assert_eq!(
            names(&asc),
            vec!["adedeji", "emeka", "debby", "tosin", "grace"]
        );

        let desc = apply(sample(), Some(SortSpec::descending(SortKey::Status)));
        assert_eq!(
            names(&desc),
            vec!["tosin", "grace", "debby", "adedeji", "emeka"]
        );
    }

    #[test]
    fn repeated_toggles_do_not_jitter() {
        let mut users = sample();
        let mut spec = None;
        for _ in 0..4 {
            let next = SortSpec::toggle(spec, SortKey::Organization);
            users = apply(users, Some(next));
            spec = Some(next);
        }
        // Four toggles end on descending; Irorun rows keep their original order.
        assert_eq!(spec.unwrap().direction, SortDirection::Descending);
        assert_eq!(
            names(&users),
            vec!["grace", "tosin", "emeka", "adedeji", "debby"]
        );
    }

    #[test]
    fn sorting_is_idempotent() {
        let spec = Some(SortSpec::ascending(SortKey::Organization));
        let once = apply(sample(), spec);
        let twice = apply(once.clone(), spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn date_joined_sorts_chronologically() {
        let result = apply(sample(), Some(SortSpec::descending(SortKey::DateJoined)));
        assert_eq!(
            names(&result),
            vec!["emeka", "debby", "grace", "adedeji", "tosin"]
        );
    }

    #[test]
    fn toggle_rules() {
        let first = SortSpec::toggle(None, SortKey::Email);
        assert_eq!(first, SortSpec::ascending(SortKey::Email));

        let second = SortSpec::toggle(Some(first), SortKey::Email);
        assert_eq!(second, SortSpec::descending(SortKey::Email));

        let third = SortSpec::toggle(Some(second), SortKey::Email);
        assert_eq!(third, SortSpec::ascending(SortKey::Email));

        let other = SortSpec::toggle(Some(second), SortKey::Status);
        assert_eq!(other, SortSpec::ascending(SortKey::Status));
    }

    #[test]
    fn parses_sort_keys() {
        assert_eq!("userName".parse::<SortKey>().unwrap(), SortKey::Username);
        assert_eq!("user_name".parse::<SortKey>().unwrap(), SortKey::Username);
        assert_eq!("org".parse::<SortKey>().unwrap(), SortKey::Organization);
        assert_eq!(
            "date-joined".parse::<SortKey>().unwrap(),
            SortKey::DateJoined
        );
        assert_eq!("PHONE".parse::<SortKey>().unwrap(), SortKey::PhoneNumber);
        assert!(matches!(
            "salary".parse::<SortKey>(),
            Err(AdminError::Validation(_))
        ));
    }

    #[test]
    fn field_names_round_trip_through_parse() {
        for key in SortKey::ALL {
            assert_eq!(key.field_name().parse::<SortKey>().unwrap(), key);
        }
    }
}
