//! Database configuration, read from the process environment.

use thiserror::Error;

/// SRV host of the managed cluster, used unless `STOREFRONT_DB_HOST` is set.
const DEFAULT_DB_HOST: &str = "cluster0.storefront.mongodb.net";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Database credentials and cluster location.
///
/// The account is named after the database it owns, so `db_name` doubles as
/// the username in the connection string.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    db_name: String,
    db_password: String,
    db_host: String,
}

impl Config {
    /// Read the configuration from environment variables.
    ///
    /// `STOREFRONT_DB_NAME` and `STOREFRONT_DB_PASSWORD` are required;
    /// `STOREFRONT_DB_HOST` overrides the managed-cluster default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var("STOREFRONT_DB_NAME").ok(),
            std::env::var("STOREFRONT_DB_PASSWORD").ok(),
            std::env::var("STOREFRONT_DB_HOST").ok(),
        )
    }

    pub fn from_parts(
        db_name: Option<String>,
        db_password: Option<String>,
        db_host: Option<String>,
    ) -> Result<Self, ConfigError> {
        let db_name = db_name
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("STOREFRONT_DB_NAME"))?;
        let db_password = db_password
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("STOREFRONT_DB_PASSWORD"))?;
        Ok(Self {
            db_name,
            db_password,
            db_host: db_host.unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
        })
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    /// Connection string for the managed document-store cluster.
    pub fn connection_uri(&self) -> String {
        format!(
            "mongodb+srv://{}:{}@{}/{}?retryWrites=true&w=majority",
            self.db_name, self.db_password, self.db_host, self.db_name
        )
    }
}
