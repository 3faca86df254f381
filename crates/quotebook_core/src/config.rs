//! Runtime configuration for front ends.
//!
//! # Responsibility
//! - Resolve the durable database path and logging settings.
//!
//! # Invariants
//! - Precedence: explicit value, then environment variable, then default.
//! - Blank values are treated as unset.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "QUOTEBOOK_DB_PATH";
pub const LOG_DIR_ENV: &str = "QUOTEBOOK_LOG_DIR";
pub const LOG_LEVEL_ENV: &str = "QUOTEBOOK_LOG_LEVEL";
pub const DEFAULT_DB_FILE_NAME: &str = "quotebook.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotebookConfig {
    /// SQLite file backing the durable store.
    pub db_path: PathBuf,
    /// Rolling log directory. Logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

/// Values supplied directly by the caller (CLI flags, FFI arguments).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<String>,
    pub log_dir: Option<String>,
    pub log_level: Option<String>,
}

impl QuotebookConfig {
    /// Resolves configuration from overrides and the process environment.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        Self::resolve_with(overrides, |name| std::env::var(name).ok())
    }

    /// Resolves configuration using `lookup` for environment access.
    pub fn resolve_with(
        overrides: ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let pick = |explicit: Option<String>, env_name: &str| {
            non_blank(explicit).or_else(|| non_blank(lookup(env_name)))
        };

        let db_path = pick(overrides.db_path, DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_dir = pick(overrides.log_dir, LOG_DIR_ENV).map(PathBuf::from);
        let log_level = pick(overrides.log_level, LOG_LEVEL_ENV)
            .unwrap_or_else(|| default_log_level().to_string());

        Self {
            db_path,
            log_dir,
            log_level,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{ConfigOverrides, QuotebookConfig, DB_PATH_ENV, DEFAULT_DB_FILE_NAME, LOG_LEVEL_ENV};
    use std::path::PathBuf;

    #[test]
    fn explicit_values_win_over_environment() {
        let config = QuotebookConfig::resolve_with(
            ConfigOverrides {
                db_path: Some("/data/explicit.sqlite3".to_string()),
                ..ConfigOverrides::default()
            },
            |name| (name == DB_PATH_ENV).then(|| "/data/env.sqlite3".to_string()),
        );
        assert_eq!(config.db_path, PathBuf::from("/data/explicit.sqlite3"));
    }

    #[test]
    fn environment_fills_unset_values_and_blank_is_ignored() {
        let config = QuotebookConfig::resolve_with(
            ConfigOverrides {
                db_path: Some("   ".to_string()),
                ..ConfigOverrides::default()
            },
            |name| match name {
                DB_PATH_ENV => Some("/data/env.sqlite3".to_string()),
                LOG_LEVEL_ENV => Some("warn".to_string()),
                _ => None,
            },
        );
        assert_eq!(config.db_path, PathBuf::from("/data/env.sqlite3"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn defaults_use_temp_dir_database() {
        let config = QuotebookConfig::resolve_with(ConfigOverrides::default(), |_| None);
        assert_eq!(config.db_path, std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        assert!(!config.log_level.is_empty());
    }
}
