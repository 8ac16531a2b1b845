use std::env;

use chrono::NaiveDate;

use crate::errors::{ConfigError, LogLineError};

/// Runtime environment used by the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    fn from_str(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }
}

/// Configuration for the wall-clock tooling, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallTimeConfig {
    pub environment: Environment,
    pub log_level: String,
    /// Overrides the reference date used for calendar conversion.
    pub calendar_date: Option<NaiveDate>,
    /// Overrides the locale tag attached to calendar conversion.
    pub calendar_locale: Option<String>,
}

impl Default for WallTimeConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            log_level: "info".to_string(),
            calendar_date: None,
            calendar_locale: None,
        }
    }
}

impl WallTimeConfig {
    /// Loads configuration from `LOGLINE_*` variables (after reading `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_with_prefix("LOGLINE_")
    }

    /// Loads configuration from env vars prefixed with the provided value (e.g. `WALLTIME_`).
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let key = |suffix: &str| format!("{}{}", prefix, suffix);

        let environment = read_var(&key("ENV"))?
            .map(|raw| Environment::from_str(&raw))
            .unwrap_or_default();

        let log_level = read_var(&key("LOG_LEVEL"))?.unwrap_or_else(|| {
            match environment {
                Environment::Production => "warn",
                _ => "info",
            }
            .to_string()
        });

        let date_key = key("CALENDAR_DATE");
        let calendar_date = match read_var(&date_key)? {
            Some(raw) => Some(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(
                |_| ConfigError::InvalidValue {
                    key: date_key.clone(),
                    value: raw.clone(),
                },
            )?),
            None => None,
        };

        let calendar_locale = read_var(&key("CALENDAR_LOCALE"))?.filter(|raw| !raw.is_empty());

        if let Some(date) = calendar_date {
            tracing::debug!(key = %date_key, %date, "calendar reference date override loaded");
        }
        if let Some(locale) = &calendar_locale {
            tracing::debug!(%locale, "calendar locale override loaded");
        }

        Ok(Self {
            environment,
            log_level,
            calendar_date,
            calendar_locale,
        })
    }

    /// Whether the process is running in production.
    pub fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }
}

fn read_var(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::InvalidEnvVar {
            key: key.to_string(),
            source,
        }),
    }
}

/// Helper that loads config and converts to the canonical LogLine error type.
pub fn load_config() -> Result<WallTimeConfig, LogLineError> {
    Ok(WallTimeConfig::from_env()?)
}
