use thiserror::Error;

use crate::service::error::ErrorCode;

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Already exists")]
    AlreadyExists,

    #[error("Wrong parameters")]
    IncorrectParameters,

    #[error("Record not updated")]
    RecordNotUpdated,

    #[error("Response could not be mapped: {0}")]
    MappingError(String),

    #[error("Transaction error: {0}")]
    TransactionError(String),

    #[error("Database error: {0}")]
    Db(#[from] anyhow::Error),
}

impl DataLayerError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::AlreadyExists => ErrorCode::BR_0022,
            Self::Db(_) | Self::TransactionError(_) => ErrorCode::BR_0027,
            Self::MappingError(_) => ErrorCode::BR_0028,
            Self::IncorrectParameters | Self::RecordNotUpdated => ErrorCode::BR_0000,
        }
    }
}

impl From<uuid::Error> for DataLayerError {
    fn from(error: uuid::Error) -> Self {
        Self::MappingError(error.to_string())
    }
}
