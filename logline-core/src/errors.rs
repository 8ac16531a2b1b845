use thiserror::Error;

/// Result type used across the LogLine wall-clock crates.
pub type Result<T> = std::result::Result<T, LogLineError>;

/// Canonical error representation shared by the library and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogLineError {
    /// The caller handed over something that is not usable as input at all.
    #[error("{0}")]
    InvalidArgument(String),

    /// The input had the right type but not the `hh:mm:ss` shape.
    #[error("{0}")]
    FormatError(String),

    /// An optional collaborator was not compiled into this build.
    #[error("dependency unavailable: {0}")]
    UnavailableDependency(String),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("deserialization error: {0}")]
    DeserializationError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("general error: {0}")]
    GeneralError(String),
}

impl LogLineError {
    /// Error raised when parsing receives anything but a string.
    pub fn no_string_supplied() -> Self {
        LogLineError::InvalidArgument("no string supplied".to_string())
    }

    /// Error raised when a string does not match `hh:mm:ss`.
    pub fn invalid_time_format() -> Self {
        LogLineError::FormatError("invalid time format, does not match hh:mm:ss".to_string())
    }
}

impl From<serde_json::Error> for LogLineError {
    fn from(err: serde_json::Error) -> Self {
        LogLineError::DeserializationError(err.to_string())
    }
}

impl From<anyhow::Error> for LogLineError {
    fn from(err: anyhow::Error) -> Self {
        LogLineError::GeneralError(err.to_string())
    }
}

/// Dedicated configuration error used by the configuration module.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("invalid unicode in environment variable {key}: {source}")]
    InvalidEnvVar {
        key: String,
        #[source]
        source: std::env::VarError,
    },
}

impl From<ConfigError> for LogLineError {
    fn from(value: ConfigError) -> Self {
        LogLineError::ConfigError(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_render_their_messages() {
        assert_eq!(
            LogLineError::no_string_supplied().to_string(),
            "no string supplied"
        );
        assert_eq!(
            LogLineError::invalid_time_format().to_string(),
            "invalid time format, does not match hh:mm:ss"
        );
    }

    #[test]
    fn config_errors_convert_into_canonical_error() {
        let err: LogLineError = ConfigError::InvalidValue {
            key: "LOGLINE_CALENDAR_DATE".into(),
            value: "yesterday".into(),
        }
        .into();
        assert!(matches!(err, LogLineError::ConfigError(_)));
        assert!(err.to_string().contains("LOGLINE_CALENDAR_DATE"));
    }
}
