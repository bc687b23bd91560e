//! Dataset sources for the record store.
//!
//! The console never talks to a backend; its records come from one of three
//! static sources, chosen once at startup:
//!
//! - [`seed_users`]: the JSON dataset embedded in the library.
//! - [`load_users`]: a JSON file in the same camelCase shape.
//! - [`generate`]: `count` deterministic synthetic records, handy for demos and
//!   for exercising pagination over hundreds of rows.

use crate::error::{AdminError, Result};
use crate::model::{
    BankDetails, EducationAndEmployment, Guarantor, PersonalInformation, Socials, User,
    UserStatus,
};
use chrono::{Duration, TimeZone, Utc};
use std::fs;
use std::path::Path;

const SEED_JSON: &str = include_str!("../../data/users.json");

/// Largest synthetic dataset [`crate::init::DatasetSource`] will generate.
pub const MAX_SYNTHETIC_USERS: usize = 100_000;

const ORGS: [&str; 5] = ["Lendsqr", "Irorun", "Lendstar", "Kredi", "Palmcredit"];

const FIRST_NAMES: [&str; 10] = [
    "Adaeze", "Bola", "Chinedu", "Damilola", "Efe", "Funke", "Gbenga", "Halima", "Ifeanyi",
    "Jumoke",
];

const LAST_NAMES: [&str; 6] = ["Okafor", "Adeyemi", "Bello", "Nwosu", "Okon", "Lawal"];

const BANKS: [&str; 4] = ["Providus Bank", "GTBank", "Access Bank", "Zenith Bank"];

/// The embedded seed dataset.
pub fn seed_users() -> Result<Vec<User>> {
    parse_users(SEED_JSON)
}

/// Load users from a JSON file containing an array of user records.
pub fn load_users<P: AsRef<Path>>(path: P) -> Result<Vec<User>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        AdminError::Store(format!("Cannot read dataset {}: {}", path.display(), e))
    })?;
    let users = parse_users(&content)?;
    tracing::info!(path = %path.display(), count = users.len(), "loaded dataset file");
    Ok(users)
}

fn parse_users(content: &str) -> Result<Vec<User>> {
    let users: Vec<User> = serde_json::from_str(content)?;
    Ok(users)
}

/// Generate `count` synthetic users.
///
/// Output is a pure function of `count`: record `i` (0-based) has id
/// `syn-{i+1:05}`, status `UserStatus::ALL[i % 4]` and organization
/// `ORGS[i % 5]`, and joins 3 days after record `i - 1`.
pub fn generate(count: usize) -> Vec<User> {
    let base = Utc
        .with_ymd_and_hms(2019, 1, 1, 8, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
            let org = ORGS[i % ORGS.len()];
            let user_name = format!("{}{:03}", first.to_lowercase(), i + 1);
            let email = format!("{}@{}.com", user_name, org.to_lowercase());
            let phone = format!("080{:08}", (i as u64 * 7919) % 100_000_000);
            let joined = base + Duration::days(3 * i as i64) + Duration::hours((i % 24) as i64);

            let mut user = User::new(
                format!("syn-{:05}", i + 1),
                org,
                user_name.clone(),
                email.clone(),
                phone.clone(),
                joined,
                UserStatus::ALL[i % UserStatus::ALL.len()],
            );
            user.personal_information = PersonalInformation {
                full_name: format!("{} {}", first, last),
                phone_number: phone.clone(),
                email_address: format!("{}.{}@gmail.com", first, last).to_lowercase(),
                bvn: phone.clone(),
                gender: if i % 2 == 0 { "Female" } else { "Male" }.to_string(),
                marital_status: "Single".to_string(),
                children: "None".to_string(),
                type_of_residence: "Rented Apartment".to_string(),
            };
            user.education_and_employment = EducationAndEmployment {
                level_of_education: "Bachelor's".to_string(),
                employment_status: "Employed".to_string(),
                sector_of_employment: "FinTech".to_string(),
                duration_of_employment: format!("{} years", i % 7 + 1),
                office_email: email,
                monthly_income: "100000-200000".to_string(),
                loan_repayment: ((i % 5) * 10_000).to_string(),
            };
            user.socials = Socials {
                twitter: format!("@{}", user_name),
                facebook: format!("{} {}", first, last),
                instagram: format!("@{}", user_name),
            };
            user.guarantor = Guarantor {
                full_name: format!("{} {}", FIRST_NAMES[(i + 3) % FIRST_NAMES.len()], last),
                phone_number: format!("070{:08}", (i as u64 * 104_729) % 100_000_000),
                email_address: "guarantor@gmail.com".to_string(),
                relationship: "Sibling".to_string(),
            };
            user.bank_details = BankDetails {
                account_number: format!("{:010}", 9_900_000_000u64 + i as u64),
                bank_name: BANKS[i % BANKS.len()].to_string(),
            };
            user
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_dataset_parses() {
        let users = seed_users().unwrap();
        assert_eq!(users.len(), 12);
        assert_eq!(users[0].user_name, "adedeji");
        assert_eq!(users[0].status, UserStatus::Inactive);

        let ids: HashSet<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn generate_is_deterministic() {
        let a = generate(40);
        let b = generate(40);
        assert_eq!(a, b);
        assert_eq!(a[0].id, "syn-00001");
        assert_eq!(a[39].id, "syn-00040");
    }

    #[test]
    fn generate_cycles_statuses() {
        let users = generate(8);
        let statuses: Vec<_> = users.iter().map(|u| u.status).collect();
        assert_eq!(&statuses[..4], &UserStatus::ALL);
        assert_eq!(&statuses[4..], &UserStatus::ALL);
    }

    #[test]
    fn generate_ids_are_unique() {
        let users = generate(300);
        let ids: HashSet<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids.len(), 300);
    }

    #[test]
    fn load_users_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, serde_json::to_string(&generate(3)).unwrap()).unwrap();

        let users = load_users(&path).unwrap();
        assert_eq!(users, generate(3));
    }

    #[test]
    fn load_users_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_users(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AdminError::Store(_)));
    }

    #[test]
    fn load_users_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "[{\"id\": 1}]").unwrap();
        assert!(matches!(
            load_users(&path).unwrap_err(),
            AdminError::Serialization(_)
        ));
    }
}
