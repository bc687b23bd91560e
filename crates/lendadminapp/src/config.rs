//! # Configuration
//!
//! Console configuration is managed by [`clapfig`], which layers TOML files,
//! environment variables and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Resolved in priority order:
//! 1. **Environment variables**: `LENDADMIN__LATENCY_MS`, `LENDADMIN__PAGE_SIZE`, etc.
//! 2. **Working directory**: `./lendadmin.toml`.
//! 3. **Data directory**: `lendadmin.toml` next to the session file (see [`crate::init`]).
//! 4. **Compiled Defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `latency_ms` | `300` | Simulated delay before each data operation resolves |
//! | `page_size` | `100` | Rows per page when `--per-page` is not given |
//! | `dataset` | unset | JSON dataset to load instead of the embedded seed data |
//! | `loan_ratio` | `0.6` | Fraction of users counted as having loans |
//! | `savings_ratio` | `0.8` | Fraction of users counted as having savings |

use crate::commands::stats::{StatsPolicy, DEFAULT_LOAN_RATIO, DEFAULT_SAVINGS_RATIO};
use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "lendadmin.toml";

/// Configuration for the console, stored in `lendadmin.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdminConfig {
    /// Milliseconds every data operation waits before resolving. 0 disables the wait.
    #[config(default = 300)]
    pub latency_ms: u64,

    /// Default number of users per page.
    #[config(default = 100)]
    pub page_size: usize,

    /// Path to a JSON dataset. When absent the embedded seed dataset is used.
    pub dataset: Option<PathBuf>,

    /// Fraction of users reported as having loans.
    #[config(default = 0.6)]
    pub loan_ratio: f64,

    /// Fraction of users reported as having savings.
    #[config(default = 0.8)]
    pub savings_ratio: f64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            latency_ms: 300,
            page_size: crate::commands::list::DEFAULT_PAGE_SIZE,
            dataset: None,
            loan_ratio: DEFAULT_LOAN_RATIO,
            savings_ratio: DEFAULT_SAVINGS_RATIO,
        }
    }
}

impl AdminConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// The stats ratios, validated.
    pub fn stats_policy(&self) -> Result<StatsPolicy> {
        StatsPolicy::new(self.loan_ratio, self.savings_ratio)
    }
}
