//! # Startup
//!
//! Everything a UI client needs is assembled once, by [`initialize`]:
//!
//! 1. **Data directory**: `LENDADMIN_DATA` when set (tests point it at a temp dir),
//!    otherwise the OS data directory from [`directories::ProjectDirs`].
//! 2. **Configuration**: `lendadmin.toml` from the data directory merged with the
//!    one in the working directory, plus `LENDADMIN__*` environment variables.
//! 3. **Dataset**: picked by [`DatasetSource`]. An explicit source wins, then the
//!    `dataset` config key, then the embedded seed data.
//! 4. **Store and facade**: the records go into an [`InMemoryStore`] behind an
//!    `Arc`, wrapped in an [`AdminApi`] carrying the configured latency and stats
//!    ratios.
//! 5. **Session**: a [`SessionStore`] on the data directory.
//!
//! Records are loaded once here and live for the rest of the process.

use crate::api::AdminApi;
use crate::auth::SessionStore;
use crate::config::{AdminConfig, CONFIG_FILE_NAME};
use crate::error::{AdminError, Result};
use crate::model::User;
use crate::store::dataset;
use crate::store::memory::InMemoryStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LENDADMIN_DATA";

/// Where the records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Seed,
    File(PathBuf),
    Synthetic(usize),
}

impl DatasetSource {
    pub fn load(&self) -> Result<Vec<User>> {
        match self {
            DatasetSource::Seed => dataset::seed_users(),
            DatasetSource::File(path) => dataset::load_users(path),
            DatasetSource::Synthetic(count) if *count > dataset::MAX_SYNTHETIC_USERS => {
                Err(AdminError::Validation(format!(
                    "Synthetic datasets are limited to {} users, got {}",
                    dataset::MAX_SYNTHETIC_USERS,
                    count
                )))
            }
            DatasetSource::Synthetic(count) => Ok(dataset::generate(*count)),
        }
    }
}

pub struct AdminContext {
    pub api: AdminApi<InMemoryStore>,
    pub config: AdminConfig,
    pub session: SessionStore,
    pub data_dir: PathBuf,
}

/// The data directory holding `session.json` and the global `lendadmin.toml`.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "lendadmin", "lendadmin")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AdminError::Store("Could not determine a data directory".to_string()))
}

/// Search paths for `lendadmin.toml`: the data directory first, the working
/// directory overriding it.
pub fn config_search_paths(data_dir: &Path, cwd: &Path) -> Vec<SearchPath> {
    vec![
        SearchPath::Path(data_dir.to_path_buf()),
        SearchPath::Path(cwd.to_path_buf()),
    ]
}

pub fn load_config(data_dir: &Path, cwd: &Path) -> AdminConfig {
    Clapfig::builder::<AdminConfig>()
        .app_name("lendadmin")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(config_search_paths(data_dir, cwd))
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            AdminConfig::default()
        })
}

/// Decide the dataset: an explicit source, else the configured file, else the seed.
pub fn resolve_source(
    explicit: Option<DatasetSource>,
    config: &AdminConfig,
    cwd: &Path,
) -> DatasetSource {
    explicit.unwrap_or_else(|| match &config.dataset {
        Some(path) if path.is_absolute() => DatasetSource::File(path.clone()),
        Some(path) => DatasetSource::File(cwd.join(path)),
        None => DatasetSource::Seed,
    })
}

pub fn build_store(source: &DatasetSource) -> Result<InMemoryStore> {
    let users = source.load()?;
    let count = users.len();
    let store = InMemoryStore::from_users(users)?;
    tracing::debug!(?source, count, "record store ready");
    Ok(store)
}

pub fn initialize(cwd: &Path, source: Option<DatasetSource>) -> Result<AdminContext> {
    let data_dir = data_dir()?;
    let config = load_config(&data_dir, cwd);
    let source = resolve_source(source, &config, cwd);

    let store = build_store(&source)?;
    let api = AdminApi::new(Arc::new(store))
        .with_latency(config.latency())
        .with_stats_policy(config.stats_policy()?);
    let session = SessionStore::new(&data_dir);

    Ok(AdminContext {
        api,
        config,
        session,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn explicit_source_wins() {
        let config = AdminConfig {
            dataset: Some(PathBuf::from("/data/users.json")),
            ..Default::default()
        };
        let source = resolve_source(Some(DatasetSource::Synthetic(5)), &config, Path::new("/"));
        assert_eq!(source, DatasetSource::Synthetic(5));
    }

    #[test]
    fn configured_dataset_is_relative_to_cwd() {
        let config = AdminConfig {
            dataset: Some(PathBuf::from("users.json")),
            ..Default::default()
        };
        let source = resolve_source(None, &config, Path::new("/work"));
        assert_eq!(source, DatasetSource::File(PathBuf::from("/work/users.json")));
    }

    #[test]
    fn seed_is_the_fallback() {
        let source = resolve_source(None, &AdminConfig::default(), Path::new("/"));
        assert_eq!(source, DatasetSource::Seed);
    }

    #[test]
    fn build_store_from_each_source() {
        assert_eq!(build_store(&DatasetSource::Seed).unwrap().len(), 12);
        assert_eq!(build_store(&DatasetSource::Synthetic(250)).unwrap().len(), 250);

        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, serde_json::to_string(&dataset::generate(4)).unwrap()).unwrap();
        assert_eq!(build_store(&DatasetSource::File(path)).unwrap().len(), 4);
    }

    #[test]
    fn synthetic_count_is_capped() {
        let at_cap = DatasetSource::Synthetic(dataset::MAX_SYNTHETIC_USERS);
        assert_eq!(at_cap.load().unwrap().len(), dataset::MAX_SYNTHETIC_USERS);

        for count in [dataset::MAX_SYNTHETIC_USERS + 1, usize::MAX] {
            assert!(matches!(
                DatasetSource::Synthetic(count).load(),
                Err(AdminError::Validation(_))
            ));
        }
    }

    #[test]
    fn build_store_rejects_duplicate_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        let mut users = dataset::generate(2);
        users[1].id = users[0].id.clone();
        fs::write(&path, serde_json::to_string(&users).unwrap()).unwrap();

        assert!(matches!(
            build_store(&DatasetSource::File(path)),
            Err(AdminError::Validation(_))
        ));
    }

    #[test]
    fn config_file_in_cwd_is_read() {
        let data = tempdir().unwrap();
        let cwd = tempdir().unwrap();
        fs::write(
            cwd.path().join(CONFIG_FILE_NAME),
            "latency_ms = 0\npage_size = 25\n",
        )
        .unwrap();

        let config = load_config(data.path(), cwd.path());
        assert_eq!(config.latency_ms, 0);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.loan_ratio, 0.6);
    }

    #[test]
    fn cwd_config_overrides_data_dir_config() {
        let data = tempdir().unwrap();
        let cwd = tempdir().unwrap();
        fs::write(
            data.path().join(CONFIG_FILE_NAME),
            "latency_ms = 10\nsavings_ratio = 0.5\n",
        )
        .unwrap();
        fs::write(cwd.path().join(CONFIG_FILE_NAME), "latency_ms = 20\n").unwrap();

        let config = load_config(data.path(), cwd.path());
        assert_eq!(config.latency_ms, 20);
        assert_eq!(config.savings_ratio, 0.5);
    }
}
