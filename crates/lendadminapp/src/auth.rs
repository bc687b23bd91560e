//! # Session
//!
//! The console's only notion of identity is a boolean "logged in" flag plus the
//! operator record shown in the header. There is no credential check: any
//! non-blank email and password pair logs in as the admin operator.
//!
//! The session survives between runs as `session.json` in the data directory.
//! A session file that cannot be read or parsed is removed and treated as a
//! logged-out state, never as an error.
//!
//! The command layer and [`crate::api::AdminApi`] do no authorization; gating data
//! commands on [`SessionStore::require`] is up to the UI client.

use crate::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSION_FILE_NAME: &str = "session.json";

const ADMIN_ID: &str = "1";
const ADMIN_NAME: &str = "Admin User";
const ADMIN_ROLE: &str = "admin";
const MOCK_TOKEN: &str = "mock-jwt-token";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub token: String,
}

impl AuthUser {
    fn admin(email: &str) -> Self {
        Self {
            id: ADMIN_ID.to_string(),
            email: email.to_string(),
            name: ADMIN_NAME.to_string(),
            role: ADMIN_ROLE.to_string(),
            token: MOCK_TOKEN.to_string(),
        }
    }
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// A session kept in `dir/session.json`.
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn login(&self, email: &str, password: &str) -> Result<AuthUser> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(AdminError::Authentication(
                "email and password are required".to_string(),
            ));
        }

        let user = AuthUser::admin(email);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&user)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        tracing::info!(email, "logged in");
        Ok(user)
    }

    /// Clear the session. Logging out twice is not an error.
    pub fn logout(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::info!("logged out");
        }
        Ok(())
    }

    /// The logged-in operator, if any.
    pub fn current(&self) -> Option<AuthUser> {
        if !self.path.exists() {
            return None;
        }

        let parsed = fs::read_to_string(&self.path)
            .map_err(AdminError::from)
            .and_then(|content| {
                serde_json::from_str::<AuthUser>(&content).map_err(AdminError::from)
            });

        match parsed {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding unreadable session"
                );
                let _ = fs::remove_file(&self.path);
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }

    /// The logged-in operator, or an authentication error.
    pub fn require(&self) -> Result<AuthUser> {
        self.current().ok_or_else(|| {
            AdminError::Authentication("not logged in (run `lendadmin login` first)".to_string())
        })
    }
}
