// src/app/passguard.rs
use thiserror::Error;

use crate::analysis::{estimate_crack_time, evaluate};
use crate::app::config::Config;
use crate::app::history::HistoryStore;
use crate::app::presets::PresetStore;
use crate::app::theme::ThemeStore;
use crate::db::{DbError, KeyValueStore};
use crate::generators::PasswordGenerator;
use crate::models::{GenerationConfig, GenerationReport};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Select at least one option")]
    NoCharacterClass,

    #[error("Password length must be between 1 and {max}, got {length}")]
    InvalidLength { length: usize, max: usize },

    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Ties the generator and analyzers to the local store. Every successful
/// generation is recorded in history after it is analyzed.
pub struct PassGuard<S> {
    store: S,
    generator: PasswordGenerator,
    history_limit: usize,
    max_length: usize,
    clipboard_timeout: u64,
    default_config: GenerationConfig,
}

impl<S: KeyValueStore> PassGuard<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            generator: PasswordGenerator::new(),
            history_limit: config.history_limit,
            max_length: config.max_password_length,
            clipboard_timeout: config.clipboard_timeout,
            default_config: GenerationConfig {
                length: config.default_password_length,
                exclude_ambiguous: config.default_exclude_ambiguous,
                ..GenerationConfig::default()
            },
        }
    }

    pub fn default_config(&self) -> &GenerationConfig {
        &self.default_config
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn clipboard_timeout(&self) -> u64 {
        self.clipboard_timeout
    }

    pub fn history(&self) -> HistoryStore<&S> {
        HistoryStore::with_limit(&self.store, self.history_limit)
    }

    pub fn presets(&self) -> PresetStore<&S> {
        PresetStore::new(&self.store)
    }

    pub fn theme(&self) -> ThemeStore<&S> {
        ThemeStore::new(&self.store)
    }

    pub fn validate(&self, config: &GenerationConfig) -> Result<()> {
        if !config.has_character_class() {
            return Err(AppError::NoCharacterClass);
        }
        if config.length == 0 || config.length > self.max_length {
            return Err(AppError::InvalidLength { length: config.length, max: self.max_length });
        }
        Ok(())
    }

    pub fn generate(&self, config: &GenerationConfig) -> Result<GenerationReport> {
        self.validate(config)?;

        let password = self.generator.generate_password(config);
        let report = self.analyze(&password);

        self.history().add(&report.password, report.analysis.level)?;
        log::info!(
            "Generated {}-character password ({}, {} bits)",
            config.length,
            report.analysis.level,
            report.analysis.entropy
        );

        Ok(report)
    }

    /// Looks up a saved preset, seeding the defaults on first use.
    pub fn preset(&self, name: &str) -> Result<GenerationConfig> {
        self.presets()
            .load(name)?
            .ok_or_else(|| AppError::PresetNotFound(name.to_string()))
    }

    /// Scores any password without recording it.
    pub fn analyze(&self, password: &str) -> GenerationReport {
        let analysis = evaluate(password);
        let crack_time = estimate_crack_time(analysis.entropy);

        GenerationReport {
            password: password.to_string(),
            analysis,
            crack_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::CrackTime;

    fn app() -> PassGuard<MemoryStore> {
        PassGuard::new(MemoryStore::new(), &Config::default())
    }

    #[test]
    fn test_generate_records_history() {
        let app = app();
        let report = app.generate(&GenerationConfig::default()).unwrap();

        assert_eq!(report.password.len(), 16);
        let history = app.history().entries().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].password, report.password);
        assert_eq!(history[0].strength, report.analysis.level);
    }

    #[test]
    fn test_rejects_empty_selection() {
        let app = app();
        let config = GenerationConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..GenerationConfig::default()
        };

        let err = app.generate(&config).unwrap_err();
        assert!(matches!(err, AppError::NoCharacterClass));
        assert_eq!(err.to_string(), "Select at least one option");
        assert!(app.history().entries().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_bad_length() {
        let app = app();
        let zero = GenerationConfig { length: 0, ..GenerationConfig::default() };
        let huge = GenerationConfig { length: 10_000, ..GenerationConfig::default() };
        assert!(matches!(app.generate(&zero), Err(AppError::InvalidLength { length: 0, .. })));
        assert!(matches!(app.generate(&huge), Err(AppError::InvalidLength { .. })));
    }

    #[test]
    fn test_generate_with_preset_config() {
        let app = app();
        let report = app.generate(&app.preset("PIN Mode").unwrap()).unwrap();
        assert_eq!(report.password.len(), 6);
        assert!(report.password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_preset_lookup() {
        let app = app();
        assert_eq!(app.preset("Balanced").unwrap().length, 16);
        assert!(matches!(app.preset("Nope"), Err(AppError::PresetNotFound(name)) if name == "Nope"));
    }

    #[test]
    fn test_analyze_does_not_record() {
        let app = app();
        let report = app.analyze("password");
        assert_eq!(report.analysis.label(), "Very Weak");
        assert_eq!(report.crack_time, CrackTime::Instant);
        assert!(app.history().entries().unwrap().is_empty());
    }

    #[test]
    fn test_report_json() {
        let app = app();
        let json = serde_json::to_value(app.analyze("aB3$aB3$aB3$")).unwrap();
        assert_eq!(json["analysis"]["entropy"], 78);
        assert_eq!(json["analysis"]["score"], 60);
        assert_eq!(json["analysis"]["level"], "Medium");
        assert_eq!(json["crackTime"], "Centuries");
    }

    #[test]
    fn test_uses_configured_defaults() {
        let mut config = Config::default();
        config.default_password_length = 20;
        config.default_exclude_ambiguous = true;
        config.history_limit = 2;
        let app = PassGuard::new(MemoryStore::new(), &config);

        assert_eq!(app.default_config().length, 20);
        assert!(app.default_config().exclude_ambiguous);

        for _ in 0..4 {
            app.generate(app.default_config()).unwrap();
        }
        assert_eq!(app.history().entries().unwrap().len(), 2);
    }
}
