//! # Domain Model
//!
//! The central entity is the [`User`]: a borrower account as seen by platform
//! administrators. A user carries a handful of top-level fields that the listing
//! pipeline filters and sorts on, plus five nested sub-records
//! ([`PersonalInformation`], [`EducationAndEmployment`], [`Socials`], [`Guarantor`],
//! [`BankDetails`]) which are payload only: they are displayed on the detail view
//! and never filtered or sorted on.
//!
//! ## Serialized Form
//!
//! Users serialize to the camelCase JSON shape of the upstream dataset:
//!
//! ```text
//! {
//!   "id": "64f1...",
//!   "orgName": "Lendsqr",
//!   "userName": "adedeji",
//!   "email": "adedeji@lendsqr.com",
//!   "phoneNumber": "08078903721",
//!   "dateJoined": "2020-05-15T10:00:00Z",
//!   "status": "Active",
//!   "personalInformation": { ... },
//!   ...
//! }
//! ```
//!
//! ## Status
//!
//! [`UserStatus`] is a closed set. Parsing accepts the four names in any letter
//! case and rejects everything else with [`AdminError::Validation`]; there is no
//! fallback value.

use crate::error::{AdminError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Blacklisted,
}

impl UserStatus {
    pub const ALL: [UserStatus; 4] = [
        UserStatus::Active,
        UserStatus::Inactive,
        UserStatus::Pending,
        UserStatus::Blacklisted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Pending => "Pending",
            UserStatus::Blacklisted => "Blacklisted",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        UserStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AdminError::Validation(format!(
                    "Unknown status \"{}\" (expected Active, Inactive, Pending or Blacklisted)",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInformation {
    pub full_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub bvn: String,
    pub gender: String,
    pub marital_status: String,
    pub children: String,
    pub type_of_residence: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationAndEmployment {
    pub level_of_education: String,
    pub employment_status: String,
    pub sector_of_employment: String,
    pub duration_of_employment: String,
    pub office_email: String,
    pub monthly_income: String,
    // Some upstream records carry this as a number, others omit it.
    #[serde(default = "zero_repayment", deserialize_with = "repayment_as_string")]
    pub loan_repayment: String,
}

fn zero_repayment() -> String {
    "0".to_string()
}

fn repayment_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => zero_repayment(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Socials {
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    pub full_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_number: String,
    pub bank_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub org_name: String,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_joined: DateTime<Utc>,
    pub status: UserStatus,
    #[serde(default)]
    pub personal_information: PersonalInformation,
    #[serde(default)]
    pub education_and_employment: EducationAndEmployment,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default)]
    pub guarantor: Guarantor,
    #[serde(default)]
    pub bank_details: BankDetails,
}

impl User {
    /// Builds a user with empty sub-records.
    pub fn new(
        id: impl Into<String>,
        org_name: impl Into<String>,
        user_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        date_joined: DateTime<Utc>,
        status: UserStatus,
    ) -> Self {
        Self {
            id: id.into(),
            org_name: org_name.into(),
            user_name: user_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            date_joined,
            status,
            personal_information: PersonalInformation::default(),
            education_and_employment: EducationAndEmployment::default(),
            socials: Socials::default(),
            guarantor: Guarantor::default(),
            bank_details: BankDetails::default(),
        }
    }

    /// Join timestamp in a fixed-width UTC form, so that string order is time order.
    pub fn date_joined_key(&self) -> String {
        self.date_joined.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Aggregate counters shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: usize,
    pub active_users: usize,
    pub users_with_loans: usize,
    pub users_with_savings: usize,
}
