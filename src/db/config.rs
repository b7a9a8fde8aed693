//! Connection settings sourced from the process environment.
//!
//! Priority for the connection string:
//! 1. `DBURI`, used verbatim (local servers, integration tests)
//! 2. `mongodb+srv://{DBHOST}/{DBNAME}?retryWrites=true&w=majority&appName={DBAPPNAME}`
//!    with `DBUSER`/`DBPWD` attached as a driver credential

use std::env;
use std::fmt;

use crate::db::{DbError, DbResult};

/// Default database name.
pub const DEFAULT_DATABASE: &str = "http5222-a1";

/// Default driver application name.
pub const DEFAULT_APP_NAME: &str = "Cluster0";

/// Username/password pair for the database.
#[derive(Clone, PartialEq, Eq)]
pub struct DbCredentials {
    pub user: String,
    pub password: String,
}

impl fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbCredentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Database connection configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Connection string without credentials.
    pub uri: String,
    /// Database holding the `projects`, `project_skills` and `skills` collections.
    pub database: String,
    /// Credentials applied on top of `uri`, if any.
    pub credentials: Option<DbCredentials>,
}

impl DbConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> DbResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> DbResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = get("DBNAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        if let Some(uri) = get("DBURI") {
            let credentials = match (get("DBUSER"), get("DBPWD")) {
                (Some(user), Some(password)) => Some(DbCredentials { user, password }),
                _ => None,
            };
            return Ok(Self {
                uri,
                database,
                credentials,
            });
        }

        let require = |key: &str| {
            get(key).ok_or_else(|| DbError::Configuration {
                message: format!("{} is not set (set it or provide DBURI)", key),
            })
        };

        let host = require("DBHOST")?;
        let user = require("DBUSER")?;
        let password = require("DBPWD")?;
        let app_name = get("DBAPPNAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        Ok(Self {
            uri: format!(
                "mongodb+srv://{}/{}?retryWrites=true&w=majority&appName={}",
                host, database, app_name
            ),
            database,
            credentials: Some(DbCredentials { user, password }),
        })
    }
}
