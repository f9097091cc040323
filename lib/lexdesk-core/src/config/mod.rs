use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parsing error: {0}")]
    Parsing(#[from] ConfigParsingError),
    #[error("validation error: {0}")]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Entry `{0}` not found")]
    EntryNotFound(String),
    #[error("Invalid value `{value}` of `{key}`: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    #[error("Missing parameters for `{0}`")]
    MissingParams(String),
    #[error("Cannot deserialize fields of `{key}`: {source}")]
    FieldsDeserialization {
        key: String,
        source: serde_json::Error,
    },
}
