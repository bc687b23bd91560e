//! # Dashboard Stats
//!
//! Four counters over the whole collection, ignoring any listing filter:
//!
//! - total users: record count
//! - active users: records with status [`UserStatus::Active`]
//! - users with loans: `floor(total * loan_ratio)`
//! - users with savings: `floor(total * savings_ratio)`
//!
//! The dataset carries no loan or savings facts, so the last two are fixed
//! fractions of the total. The fractions live in a [`StatsPolicy`] so deployments
//! can tune them from configuration.

use crate::error::{AdminError, Result};
use crate::model::{UserStats, UserStatus};
use crate::store::RecordStore;

pub const DEFAULT_LOAN_RATIO: f64 = 0.6;
pub const DEFAULT_SAVINGS_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsPolicy {
    loan_ratio: f64,
    savings_ratio: f64,
}

impl Default for StatsPolicy {
    fn default() -> Self {
        Self {
            loan_ratio: DEFAULT_LOAN_RATIO,
            savings_ratio: DEFAULT_SAVINGS_RATIO,
        }
    }
}

impl StatsPolicy {
    /// Both ratios must be finite and within `0.0..=1.0`.
    pub fn new(loan_ratio: f64, savings_ratio: f64) -> Result<Self> {
        check_ratio("loan_ratio", loan_ratio)?;
        check_ratio("savings_ratio", savings_ratio)?;
        Ok(Self {
            loan_ratio,
            savings_ratio,
        })
    }

    pub fn loan_ratio(&self) -> f64 {
        self.loan_ratio
    }

    pub fn savings_ratio(&self) -> f64 {
        self.savings_ratio
    }
}

fn check_ratio(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AdminError::Validation(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )))
    }
}

fn fraction(total: usize, ratio: f64) -> usize {
    (total as f64 * ratio).floor() as usize
}

pub fn run<S: RecordStore + ?Sized>(store: &S, policy: &StatsPolicy) -> UserStats {
    let users = store.all();
    let total_users = users.len();
    let active_users = users
        .iter()
        .filter(|u| u.status == UserStatus::Active)
        .count();

    UserStats {
        total_users,
        active_users,
        users_with_loans: fraction(total_users, policy.loan_ratio),
        users_with_savings: fraction(total_users, policy.savings_ratio),
    }
}
