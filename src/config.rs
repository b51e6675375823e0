use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use dinnerwheel_shared::DayOfWeek;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub plan: PlanConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Path of the JSON store file.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    /// Weekday label assigned to the first plan day.
    pub first_day: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DINNERWHEEL__STORAGE__PATH, etc.)
    /// 2. Config file specified by path (or CONFIG_PATH)
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("storage.path", "dinnerwheel.json")?
            .set_default("plan.first_day", "Monday")?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DINNERWHEEL")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.storage.path.trim().is_empty() {
            return Err("storage.path must not be empty".to_string());
        }
        if self.plan.first_day.parse::<DayOfWeek>().is_err() {
            return Err(format!(
                "plan.first_day must be a weekday name, got {:?}",
                self.plan.first_day
            ));
        }
        Ok(())
    }

    /// The configured first plan day. `validate` has already checked the
    /// value parses; an unparsable value here falls back to Monday.
    pub fn first_day(&self) -> DayOfWeek {
        self.plan.first_day.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            storage: StorageConfig {
                path: "dinnerwheel.json".to_string(),
            },
            plan: PlanConfig {
                first_day: "Monday".to_string(),
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
            },
        }
    }

    #[test]
    fn test_validation_accepts_defaults() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_storage_path() {
        let mut config = base();
        config.storage.path = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_first_day() {
        let mut config = base();
        config.plan.first_day = "Someday".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_first_day_parses_case_insensitively() {
        let mut config = base();
        config.plan.first_day = "sunday".to_string();
        assert_eq!(config.first_day(), DayOfWeek::Sunday);
    }
}
