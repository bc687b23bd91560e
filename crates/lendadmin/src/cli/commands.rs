//! # CLI Layer
//!
//! The CLI layer is the **only** place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments into typed commands via clap
//! 2. **Logging**: `tracing-subscriber` on stderr, filtered by `LENDADMIN_LOG`
//! 3. **Session Gate**: data commands require a logged-in session
//! 4. **Context Setup**: dataset, store, facade and config via `lendadminapp::init`
//! 5. **Dispatch + Output**: call the facade, render as terminal text or JSON

use super::render;
use super::setup::{
    Cli, Commands, ConfigCommands, ListArgs, MiscCommands, OutputFormat, SessionCommands,
    UserCommands,
};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use clapfig::{Clapfig, ConfigAction, SearchPath};
use lendadminapp::auth::SessionStore;
use lendadminapp::commands::filter::UserFilter;
use lendadminapp::commands::list::UserQuery;
use lendadminapp::commands::sort::{SortKey, SortSpec};
use lendadminapp::config::{AdminConfig, CONFIG_FILE_NAME};
use lendadminapp::error::{AdminError, Result};
use lendadminapp::init::{self, AdminContext, DatasetSource};
use lendadminapp::model::UserStatus;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LENDADMIN_LOG";

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let output = cli.output;
    let source = dataset_source(&cli);

    match cli.command {
        Some(Commands::Session(cmd)) => handle_session(cmd, output),
        Some(Commands::Misc(MiscCommands::Config { action })) => {
            handle_config(action, &cwd, output)
        }
        Some(Commands::Users(cmd)) => handle_users(cmd, &cwd, source, output).await,
        // Naked `lendadmin`: first page of users
        None => {
            handle_users(
                UserCommands::List(ListArgs::default()),
                &cwd,
                source,
                output,
            )
            .await
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn dataset_source(cli: &Cli) -> Option<DatasetSource> {
    match (cli.synthetic, &cli.dataset) {
        (Some(count), _) => Some(DatasetSource::Synthetic(count)),
        (None, Some(path)) => Some(DatasetSource::File(path.clone())),
        (None, None) => None,
    }
}

/// Print `value` as JSON, or the terminal rendering otherwise.
fn emit<T: Serialize>(
    output: OutputFormat,
    value: &T,
    term: impl FnOnce() -> String,
) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Term => print!("{}", term()),
    }
    Ok(())
}

fn session_store() -> Result<SessionStore> {
    Ok(SessionStore::new(&init::data_dir()?))
}

fn handle_session(cmd: SessionCommands, output: OutputFormat) -> Result<()> {
    let session = session_store()?;
    match cmd {
        SessionCommands::Login { email, password } => {
            let user = session.login(&email, &password)?;
            emit(output, &user, || {
                format!("Logged in as {}", render::whoami(&user))
            })
        }
        SessionCommands::Logout => {
            session.logout()?;
            emit(output, &serde_json::json!({ "loggedIn": false }), || {
                "Logged out.\n".to_string()
            })
        }
        SessionCommands::Whoami => {
            let user = session.require()?;
            emit(output, &user, || render::whoami(&user))
        }
    }
}

fn build_query(args: &ListArgs, default_page_size: usize) -> Result<UserQuery> {
    let status = args
        .status
        .as_deref()
        .map(str::parse::<UserStatus>)
        .transpose()?;
    let joined = args
        .joined
        .as_deref()
        .map(|day| {
            NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d").map_err(|_| {
                AdminError::Validation(format!("Join date must be YYYY-MM-DD, got \"{}\"", day))
            })
        })
        .transpose()?;

    let filter = UserFilter {
        organization: args.org.clone(),
        username: args.username.clone(),
        email: args.email.clone(),
        phone_number: args.phone.clone(),
        status,
        date_joined: joined,
    };

    let mut query = UserQuery::default()
        .page(args.page.unwrap_or(1))
        .page_size(args.per_page.unwrap_or(default_page_size))
        .filter(filter);

    if let Some(key) = args.sort.as_deref() {
        let key: SortKey = key.parse()?;
        query = query.sort(if args.desc {
            SortSpec::descending(key)
        } else {
            SortSpec::ascending(key)
        });
    }
    Ok(query)
}

async fn handle_users(
    cmd: UserCommands,
    cwd: &Path,
    source: Option<DatasetSource>,
    output: OutputFormat,
) -> Result<()> {
    session_store()?.require()?;
    let AdminContext { api, config, .. } = init::initialize(cwd, source)?;
    tracing::debug!(command = ?cmd, latency_ms = config.latency_ms, "dispatching");

    match cmd {
        UserCommands::List(args) => {
            let query = build_query(&args, config.page_size)?;
            let page = api.list_users(&query).await?;
            emit(output, &page, || render::list_view(&page, query.sort))
        }
        UserCommands::Show { id } => {
            let user = api
                .get_user(&id)
                .await
                .ok_or_else(|| AdminError::UserNotFound(id.trim().to_string()))?;
            emit(output, &user, || render::user_detail(&user, Utc::now()))
        }
        UserCommands::Activate { id } => {
            let user = api.activate_user(&id).await?;
            emit(output, &user, || render::status_changed(&user))
        }
        UserCommands::Blacklist { id } => {
            let user = api.blacklist_user(&id).await?;
            emit(output, &user, || render::status_changed(&user))
        }
        UserCommands::Status { id, status } => {
            let status: UserStatus = status.parse()?;
            let user = api.update_user_status(&id, status).await?;
            emit(output, &user, || render::status_changed(&user))
        }
        UserCommands::Stats => {
            let stats = api.user_stats().await;
            emit(output, &stats, || render::stats_cards(&stats))
        }
        UserCommands::Search { terms } => {
            let query = terms.join(" ");
            let users = api.search_users(&query).await;
            emit(output, &users, || render::search_view(&query, &users))
        }
        UserCommands::Orgs => {
            let names = api.organizations();
            emit(output, &names, || render::organizations(&names))
        }
    }
}

/// `config set` writes to the first search path, so only the data directory.
fn set_paths(data_dir: &Path) -> Vec<SearchPath> {
    vec![SearchPath::Path(data_dir.to_path_buf())]
}

fn config_error(e: impl std::fmt::Display) -> AdminError {
    AdminError::Config(e.to_string())
}

fn handle_config(
    action: Option<ConfigCommands>,
    cwd: &Path,
    output: OutputFormat,
) -> Result<()> {
    let data_dir = init::data_dir()?;
    match action {
        None => {
            let config = init::load_config(&data_dir, cwd);
            emit(output, &config, || format_config(&config, &data_dir))
        }
        Some(ConfigCommands::Gen { output: path }) => run_config_action(
            init::config_search_paths(&data_dir, cwd),
            ConfigAction::Gen { output: path },
            false,
        ),
        Some(ConfigCommands::Get { key }) => run_config_action(
            init::config_search_paths(&data_dir, cwd),
            ConfigAction::Get { key, scope: None },
            true,
        ),
        Some(ConfigCommands::Set { key, value }) => {
            std::fs::create_dir_all(&data_dir)?;
            run_config_action(set_paths(&data_dir), ConfigAction::Set { key, value, scope: None }, true)
        }
    }
}

fn run_config_action(paths: Vec<SearchPath>, action: ConfigAction, newline: bool) -> Result<()> {
    let result = Clapfig::builder::<AdminConfig>()
        .app_name("lendadmin")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(paths)
        .no_env()
        .strict(false)
        .handle(&action)
        .map_err(config_error)?;
    if newline {
        println!("{result}");
    } else {
        print!("{result}");
    }
    Ok(())
}

fn format_config(config: &AdminConfig, data_dir: &Path) -> String {
    let mut out = String::new();
    if let Ok(toml::Value::Table(table)) = toml::Value::try_from(config) {
        for (key, value) in &table {
            out.push_str(&format!("{} = {}\n", key, format_toml_value(value)));
        }
    }
    if config.dataset.is_none() {
        out.push_str("dataset = (embedded seed data)\n");
    }
    out.push_str(&format!("# data directory: {}\n", data_dir.display()));
    out
}

fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_build_query_defaults() {
        let query = build_query(&ListArgs::default(), 100).unwrap();
        assert_eq!(query, UserQuery::default());
    }

    #[test]
    fn test_build_query_full() {
        let args = ListArgs {
            page: Some(2),
            per_page: Some(25),
            org: Some("lend".into()),
            status: Some("blacklisted".into()),
            joined: Some("2020-05-15".into()),
            sort: Some("username".into()),
            desc: true,
            ..Default::default()
        };
        let query = build_query(&args, 100).unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.filter.organization.as_deref(), Some("lend"));
        assert_eq!(query.filter.status, Some(UserStatus::Blacklisted));
        assert_eq!(
            query.filter.date_joined,
            NaiveDate::from_ymd_opt(2020, 5, 15)
        );
        assert_eq!(query.sort, Some(SortSpec::descending(SortKey::Username)));
    }

    #[test]
    fn test_build_query_uses_configured_page_size() {
        let query = build_query(&ListArgs::default(), 25).unwrap();
        assert_eq!(query.page_size, 25);
    }

    #[test]
    fn test_build_query_rejects_bad_input() {
        let bad_status = ListArgs {
            status: Some("Suspended".into()),
            ..Default::default()
        };
        assert!(matches!(
            build_query(&bad_status, 100),
            Err(AdminError::Validation(_))
        ));

        let bad_date = ListArgs {
            joined: Some("15/05/2020".into()),
            ..Default::default()
        };
        assert!(matches!(
            build_query(&bad_date, 100),
            Err(AdminError::Validation(_))
        ));

        let bad_sort = ListArgs {
            sort: Some("salary".into()),
            ..Default::default()
        };
        assert!(matches!(
            build_query(&bad_sort, 100),
            Err(AdminError::Validation(_))
        ));
    }

    #[test]
    fn test_format_config_lists_keys() {
        let out = format_config(&AdminConfig::default(), &PathBuf::from("/tmp/lendadmin"));
        assert!(out.contains("latency_ms = 300"));
        assert!(out.contains("page_size = 100"));
        assert!(out.contains("loan_ratio = 0.6"));
        assert!(out.contains("dataset = (embedded seed data)"));
        assert!(out.contains("# data directory: /tmp/lendadmin"));
    }
}
