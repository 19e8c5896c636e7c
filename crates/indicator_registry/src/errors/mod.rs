use thiserror::Error;

/// Centralized error type for the indicator registry
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON (de)serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Invalid group definition: {0}")]
    InvalidDefinition(String),

    #[error("Duplicate group id '{group_id}'")]
    DuplicateGroupId { group_id: String },

    #[error("Duplicate indicator id '{id}' in groups '{first_group}' and '{second_group}'")]
    DuplicateIndicatorId {
        id: String,
        first_group: String,
        second_group: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Alias for fallible operations in the indicator registry
pub type RegistryResult<T> = Result<T, RegistryError>;
