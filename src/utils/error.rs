use thiserror::Error;

#[derive(Error, Debug)]
pub enum FecError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("API response for {endpoint} has no results")]
    MissingResultsError { endpoint: &'static str },
}

pub type Result<T> = std::result::Result<T, FecError>;
