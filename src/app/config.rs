// src/app/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::app::history::MAX_HISTORY;

// Configuration for the generator and its local store
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub db_path: PathBuf,

    // Password Generation
    pub default_password_length: usize,
    pub default_exclude_ambiguous: bool,
    pub max_password_length: usize,

    // History
    pub history_limit: usize,

    // Clipboard, 0 keeps the copied password
    pub clipboard_timeout: u64,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub max_log_size: u64,
    pub max_log_files: usize,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = crate::utils::get_app_data_dir().unwrap_or_else(|| PathBuf::from("./data"));

        Self {
            // Storage
            db_path: data_dir.join("passguard.db"),

            // Password Generation
            default_password_length: 16,
            default_exclude_ambiguous: false,
            max_password_length: 128,

            // History
            history_limit: MAX_HISTORY,

            // Clipboard
            clipboard_timeout: 10,

            // Logging
            log_level: LevelFilter::Info,
            log_file: data_dir.join("passguard.log"),
            max_log_size: 1024 * 1024, // 1 MB
            max_log_files: 5,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Storage
        if let Some(path) = var("PASSGUARD_DB") {
            self.db_path = PathBuf::from(path);
        }

        // Password Generation
        if let Some(val) = var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                self.default_password_length = length;
            }
        }

        if let Some(val) = var("DEFAULT_EXCLUDE_AMBIGUOUS") {
            if let Ok(exclude) = val.parse() {
                self.default_exclude_ambiguous = exclude;
            }
        }

        if let Some(val) = var("MAX_PASSWORD_LENGTH") {
            if let Ok(max) = val.parse() {
                self.max_password_length = max;
            }
        }

        // History
        if let Some(val) = var("HISTORY_LIMIT") {
            if let Ok(limit) = val.parse() {
                self.history_limit = limit;
            }
        }

        // Clipboard
        if let Some(val) = var("CLIPBOARD_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.clipboard_timeout = secs;
            }
        }

        // Logging
        if let Some(level) = var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => self.log_level = LevelFilter::Off,
                "error" => self.log_level = LevelFilter::Error,
                "warn" => self.log_level = LevelFilter::Warn,
                "info" => self.log_level = LevelFilter::Info,
                "debug" => self.log_level = LevelFilter::Debug,
                "trace" => self.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = var("LOG_FILE") {
            self.log_file = PathBuf::from(file);
        }

        if let Some(val) = var("MAX_LOG_SIZE") {
            if let Ok(size) = val.parse() {
                self.max_log_size = size;
            }
        }

        if let Some(val) = var("MAX_LOG_FILES") {
            if let Ok(files) = val.parse() {
                self.max_log_files = files;
            }
        }
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) {
        for path in [&self.db_path, &self.log_file] {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    if let Err(e) = std::fs::create_dir_all(parent) {
                        log::warn!("Failed to create directory {}: {}", parent.display(), e);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.db_path.ends_with("passguard.db"));
        assert_eq!(config.clipboard_timeout, 10);
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("PASSGUARD_DB", "/tmp/pg/store.db"),
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_EXCLUDE_AMBIGUOUS", "true"),
            ("HISTORY_LIMIT", "3"),
            ("LOG_LEVEL", "DEBUG"),
            ("MAX_LOG_FILES", "2"),
            ("CLIPBOARD_TIMEOUT", "0"),
        ]);
        assert_eq!(config.db_path, PathBuf::from("/tmp/pg/store.db"));
        assert_eq!(config.default_password_length, 24);
        assert!(config.default_exclude_ambiguous);
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.max_log_files, 2);
        assert_eq!(config.clipboard_timeout, 0);
    }

    #[test]
    fn test_unparseable_values_are_ignored() {
        let config = config_from(&[("DEFAULT_PASSWORD_LENGTH", "long"), ("LOG_LEVEL", "loud")]);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_ensure_directories_exist() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.db_path = dir.path().join("a").join("store.db");
        config.log_file = dir.path().join("b").join("passguard.log");
        config.ensure_directories_exist();
        assert!(dir.path().join("a").is_dir());
        assert!(dir.path().join("b").is_dir());
    }
}
