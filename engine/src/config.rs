//! Configuration for the employee manager.

use serde::{Deserialize, Serialize};
use std::env;

/// Default session storage key holding the serialized records.
pub const DEFAULT_STORAGE_KEY: &str = "employees";
/// Default tag prefixed to generated employee ids.
pub const DEFAULT_ID_PREFIX: &str = "EMP";
/// Default lowest accepted salary.
pub const DEFAULT_MIN_SALARY: u64 = 1000;
/// Default minimum trimmed length of first and last names.
pub const DEFAULT_MIN_NAME_LEN: usize = 3;
/// Default currency symbol shown in front of salaries.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Roster configuration.
///
/// Missing keys take their defaults when deserialized, so hosts only need to
/// send what they override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterConfig {
    /// Session storage key for the record list
    pub storage_key: String,
    /// Tag prefixed to generated ids
    pub id_prefix: String,
    /// Lowest accepted salary
    pub min_salary: u64,
    /// Minimum trimmed name length
    pub min_name_len: usize,
    /// Currency symbol for salary display
    pub currency_symbol: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            min_salary: DEFAULT_MIN_SALARY,
            min_name_len: DEFAULT_MIN_NAME_LEN,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl RosterConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_key = lookup("ROSTER_STORAGE_KEY").unwrap_or(defaults.storage_key);
        if storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }

        let id_prefix = lookup("ROSTER_ID_PREFIX").unwrap_or(defaults.id_prefix);

        let min_salary = match lookup("ROSTER_MIN_SALARY") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidMinSalary(raw))?,
            None => defaults.min_salary,
        };

        let min_name_len = match lookup("ROSTER_MIN_NAME_LEN") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidMinNameLen(raw))?,
            None => defaults.min_name_len,
        };

        let currency_symbol =
            lookup("ROSTER_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol);

        Ok(Self {
            storage_key,
            id_prefix,
            min_salary,
            min_name_len,
            currency_symbol,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ROSTER_STORAGE_KEY must not be empty")]
    EmptyStorageKey,

    #[error("Invalid ROSTER_MIN_SALARY value: {0}")]
    InvalidMinSalary(String),

    #[error("Invalid ROSTER_MIN_NAME_LEN value: {0}")]
    InvalidMinNameLen(String),
}
