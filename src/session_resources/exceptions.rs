use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsExceptions {
    #[error("Average time per hobby is undefined for a log with {unique_hobbies} unique hobbies.")]
    UndefinedAverage { unique_hobbies: usize },
    #[error("Unknown day '{error_message}'. Expected a weekday name such as 'Monday'.")]
    UnknownDay { error_message: String },
    #[error("Derived field '{field_name}' was requested more than once.")]
    DuplicateEnrichment { field_name: String },
    #[error("Config path in '{error_message}' is not valid unicode.")]
    InvalidConfigPath { error_message: String },
    #[error("IO error occurred: {0}")]
    IOError(#[from] io::Error),
    #[error("Failed to parse the provided config file: {0}")]
    ConfigError(#[from] toml::de::Error),
    #[error("JSON error occurred: {0}")]
    JsonError(#[from] serde_json::Error),
}
