//! # Filter Engine
//!
//! Narrows a user collection with a set of optional field predicates.
//!
//! | Criterion | Field | Match |
//! |-----------|-------|-------|
//! | `organization` | `org_name` | case-insensitive substring |
//! | `username` | `user_name` | case-insensitive substring |
//! | `email` | `email` | case-insensitive substring |
//! | `phone_number` | `phone_number` | case-sensitive substring |
//! | `status` | `status` | equality |
//! | `date_joined` | day of `date_joined` (UTC) | equality |
//!
//! Populated criteria are combined with AND. A text criterion that is empty after
//! trimming counts as unset, so a cleared filter input never hides every row.
//! Any other text is matched as typed, surrounding spaces included.
//! Surviving users keep their relative order.

use crate::model::{User, UserStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    pub organization: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub status: Option<UserStatus>,
    pub date_joined: Option<NaiveDate>,
}

impl UserFilter {
    pub fn with_organization(mut self, value: impl Into<String>) -> Self {
        self.organization = Some(value.into());
        self
    }

    pub fn with_username(mut self, value: impl Into<String>) -> Self {
        self.username = Some(value.into());
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn with_phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_date_joined(mut self, date: NaiveDate) -> Self {
        self.date_joined = Some(date);
        self
    }

    /// True when no criterion would constrain anything.
    pub fn is_empty(&self) -> bool {
        Predicates::from(self).is_empty()
    }
}

/// Normalized needles, computed once per `apply` call.
struct Predicates {
    organization: Option<String>,
    username: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    status: Option<UserStatus>,
    date_joined: Option<NaiveDate>,
}

fn folded(value: &Option<String>) -> Option<String> {
    verbatim(value).map(|v| v.to_lowercase())
}

fn verbatim(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

impl From<&UserFilter> for Predicates {
    fn from(filter: &UserFilter) -> Self {
        Self {
            organization: folded(&filter.organization),
            username: folded(&filter.username),
            email: folded(&filter.email),
            phone_number: verbatim(&filter.phone_number),
            status: filter.status,
            date_joined: filter.date_joined,
        }
    }
}

impl Predicates {
    fn is_empty(&self) -> bool {
        self.organization.is_none()
            && self.username.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.status.is_none()
            && self.date_joined.is_none()
    }

    fn matches(&self, user: &User) -> bool {
        contains_folded(&user.org_name, &self.organization)
            && contains_folded(&user.user_name, &self.username)
            && contains_folded(&user.email, &self.email)
            && self
                .phone_number
                .as_deref()
                .is_none_or(|needle| user.phone_number.contains(needle))
            && self.status.is_none_or(|status| user.status == status)
            && self
                .date_joined
                .is_none_or(|day| user.date_joined.date_naive() == day)
    }
}

fn contains_folded(haystack: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
        None => true,
    }
}

/// Keep the users matching every populated criterion, in their input order.
pub fn apply(users: Vec<User>, filter: &UserFilter) -> Vec<User> {
    let predicates = Predicates::from(filter);
    if predicates.is_empty() {
        return users;
    }
    users
        .into_iter()
        .filter(|user| predicates.matches(user))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn sample() -> Vec<User> {
        StoreFixture::new()
            .with_user("Lendsqr", "Adedeji", UserStatus::Active)
            .with_user("Irorun", "debby", UserStatus::Pending)
            .with_user("LENDSTAR", "grace", UserStatus::Blacklisted)
            .with_user("Lendsqr", "tosin", UserStatus::Blacklisted)
            .users()
            .to_vec()
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.user_name.as_str()).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let users = sample();
        assert_eq!(apply(users.clone(), &UserFilter::default()), users);
    }

    #[test]
    fn blank_strings_count_as_unset() {
        let users = sample();
        let filter = UserFilter::default()
            .with_organization("")
            .with_username("   ")
            .with_phone_number(" ");
        assert!(filter.is_empty());
        assert_eq!(apply(users.clone(), &filter), users);
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_needle() {
        let result = apply(sample(), &UserFilter::default().with_organization("lend "));
        assert!(result.is_empty());

        let result = apply(sample(), &UserFilter::default().with_username(" grace"));
        assert!(result.is_empty());
    }

    #[test]
    fn organization_is_case_insensitive_substring() {
        let filter = UserFilter::default().with_organization("lend");
        let result = apply(sample(), &filter);
        assert_eq!(names(&result), vec!["Adedeji", "grace", "tosin"]);
    }

    #[test]
    fn username_and_email_ignore_case() {
        let result = apply(sample(), &UserFilter::default().with_username("ADE"));
        assert_eq!(names(&result), vec!["Adedeji"]);

        let result = apply(sample(), &UserFilter::default().with_email("@IRORUN"));
        assert_eq!(names(&result), vec!["debby"]);
    }

    #[test]
    fn phone_is_plain_substring() {
        let users = sample();
        let needle = users[2].phone_number[6..].to_string();
        let result = apply(users, &UserFilter::default().with_phone_number(needle));
        assert_eq!(names(&result), vec!["grace"]);
    }

    #[test]
    fn status_is_exact() {
        let result = apply(
            sample(),
            &UserFilter::default().with_status(UserStatus::Blacklisted),
        );
        assert_eq!(names(&result), vec!["grace", "tosin"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let filter = UserFilter::default()
            .with_organization("lendsqr")
            .with_status(UserStatus::Blacklisted);
        let result = apply(sample(), &filter);
        assert_eq!(names(&result), vec!["tosin"]);
    }

    #[test]
    fn date_joined_matches_calendar_day() {
        let users = sample();
        let day = users[1].date_joined.date_naive();
        let result = apply(users, &UserFilter::default().with_date_joined(day));
        assert_eq!(names(&result), vec!["debby"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let result = apply(sample(), &UserFilter::default().with_email("nobody"));
        assert!(result.is_empty());
    }

    #[test]
    fn result_is_ordered_subset_and_idempotent() {
        let users = sample();
        let filter = UserFilter::default().with_organization("l");
        let once = apply(users.clone(), &filter);
        let twice = apply(once.clone(), &filter);
        assert_eq!(once, twice);

        let mut cursor = users.iter();
        for kept in &once {
            assert!(cursor.any(|u| u == kept), "order not preserved");
        }
    }
}
