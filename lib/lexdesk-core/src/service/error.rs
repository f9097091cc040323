use rust_decimal::Decimal;
use shared_types::{
    AccessLinkId, AdminId, CaseId, ClientId, HearingId, InvoiceId, InvoicePaymentId,
};
use strum::Display;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::model::invoice::InvoiceStatus;
use crate::provider::capability_token::CapabilityTokenError;
use crate::provider::notifier::NotifierError;
use crate::provider::pdf_renderer::RendererError;
use crate::provider::pin::PinError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Notifier error: `{0}`")]
    Notifier(#[from] NotifierError),

    #[error("Renderer error: `{0}`")]
    Renderer(#[from] RendererError),

    #[error("PIN error: `{0}`")]
    Pin(#[from] PinError),

    #[error("Config validation error `{0}`")]
    ConfigValidation(#[from] ConfigValidationError),

    #[error(transparent)]
    Repository(#[from] DataLayerError),

    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error("Other error: `{0}`")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Admin `{0}` not found")]
    Admin(AdminId),

    #[error("Client `{0}` not found")]
    Client(ClientId),

    #[error("Case `{0}` not found")]
    Case(CaseId),

    #[error("Hearing `{0}` not found")]
    Hearing(HearingId),

    #[error("Access link `{0}` not found")]
    AccessLink(AccessLinkId),

    #[error("Invoice `{0}` not found")]
    Invoice(InvoiceId),

    #[error("Invoice payment `{0}` not found")]
    InvoicePayment(InvoicePaymentId),

    #[error("Task `{0}` not found")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Access link `{0}` was already used")]
    LinkInactive(AccessLinkId),

    #[error("Access link `{0}` expired")]
    LinkExpired(AccessLinkId),

    #[error("Invalid PIN for access link `{0}`")]
    InvalidSecret(AccessLinkId),

    #[error("Payment exceeds remaining amount by {excess}")]
    PaymentExceedsRemaining { excess: Decimal },

    #[error("Updated payments exceed invoice amount by {excess}")]
    PaymentsExceedInvoiceAmount { excess: Decimal },

    #[error("Invoice `{0}` is already fully paid")]
    InvoiceAlreadyPaid(InvoiceId),

    #[error("Invoice `{0}` is cancelled")]
    InvoiceCancelled(InvoiceId),

    #[error("Invoice `{0}` has recorded payments")]
    InvoiceHasPayments(InvoiceId),

    #[error("Payment `{payment_id}` does not belong to invoice `{invoice_id}`")]
    PaymentInvoiceMismatch {
        invoice_id: InvoiceId,
        payment_id: InvoicePaymentId,
    },

    #[error("Invoice in status {status} cannot be {action}")]
    InvalidInvoiceStatus {
        status: InvoiceStatus,
        action: &'static str,
    },

    #[error("Admin with e-mail `{0}` already exists")]
    AdminAlreadyExists(String),

    #[error("Could not allocate invoice number for year {0}")]
    InvoiceNumberConflict(i32),

    /// Recorded payments of the invoice no longer add up to its paid amount
    #[error("Paid amount of invoice `{invoice_id}` would drop to {paid_amount}")]
    LedgerInconsistent {
        invoice_id: InvoiceId,
        paid_amount: Decimal,
    },
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Forbidden")]
    Forbidden,

    #[error("Invalid capability token: {0}")]
    InvalidCapabilityToken(#[from] CapabilityTokenError),

    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid e-mail address `{0}`")]
    InvalidEmail(String),

    #[error("Expiry must be between 1 and {max} hours, got {value}")]
    InvalidExpiry { value: u32, max: u32 },

    #[error("Hearing `{hearing_id}` does not belong to case `{case_id}`")]
    HearingCaseMismatch {
        case_id: CaseId,
        hearing_id: HearingId,
    },

    #[error("Submission must contain text or at least one attachment")]
    EmptySubmission,

    #[error("Payment amount must be positive, got {0}")]
    NonPositivePaymentAmount(Decimal),

    #[error("Invoice amount must not be negative, got {0}")]
    NegativeInvoiceAmount(Decimal),

    #[error("Unknown payment mode `{0}`")]
    InvalidPaymentMode(String),
}

/// Category of an error, stable across error variants
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    Validation,
    Conflict,
    ExternalServiceFailure,
    Internal,
}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorCode {
    #[strum(to_string = "Unmapped error code")]
    BR_0000,
    #[strum(to_string = "Admin not found")]
    BR_0001,
    #[strum(to_string = "Client not found")]
    BR_0002,
    #[strum(to_string = "Case not found")]
    BR_0003,
    #[strum(to_string = "Hearing not found")]
    BR_0004,
    #[strum(to_string = "Access link not found")]
    BR_0005,
    #[strum(to_string = "Invoice not found")]
    BR_0006,
    #[strum(to_string = "Invoice payment not found")]
    BR_0007,
    #[strum(to_string = "Forbidden")]
    BR_0008,
    #[strum(to_string = "Missing or invalid field")]
    BR_0009,
    #[strum(to_string = "Hearing does not belong to case")]
    BR_0010,
    #[strum(to_string = "Access link inactive")]
    BR_0011,
    #[strum(to_string = "Access link expired")]
    BR_0012,
    #[strum(to_string = "Invalid PIN")]
    BR_0013,
    #[strum(to_string = "Invalid capability token")]
    BR_0014,
    #[strum(to_string = "Empty submission")]
    BR_0015,
    #[strum(to_string = "Invalid amount")]
    BR_0016,
    #[strum(to_string = "Payment exceeds remaining amount")]
    BR_0017,
    #[strum(to_string = "Invoice already paid")]
    BR_0018,
    #[strum(to_string = "Invoice cancelled")]
    BR_0019,
    #[strum(to_string = "Invoice has payments")]
    BR_0020,
    #[strum(to_string = "Invalid expiry")]
    BR_0021,
    #[strum(to_string = "Already exists")]
    BR_0022,
    #[strum(to_string = "Invalid payment mode")]
    BR_0023,
    #[strum(to_string = "Notification failure")]
    BR_0024,
    #[strum(to_string = "Document rendering failure")]
    BR_0025,
    #[strum(to_string = "Task not found")]
    BR_0026,
    #[strum(to_string = "Database error")]
    BR_0027,
    #[strum(to_string = "Mapping error")]
    BR_0028,
    #[strum(to_string = "Invalid invoice status")]
    BR_0029,
    #[strum(to_string = "Payment does not belong to invoice")]
    BR_0030,
    #[strum(to_string = "Configuration error")]
    BR_0031,
    #[strum(to_string = "Inconsistent invoice ledger")]
    BR_0032,
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::EntityNotFound(error) => error.error_code(),
            Self::BusinessLogic(error) => error.error_code(),
            Self::Validation(error) => error.error_code(),
            Self::Notifier(_) => ErrorCode::BR_0024,
            Self::Renderer(_) => ErrorCode::BR_0025,
            Self::ConfigValidation(_) => ErrorCode::BR_0031,
            Self::Repository(error) => error.error_code(),
            Self::MappingError(_) => ErrorCode::BR_0028,
            Self::Pin(_) | Self::Other(_) => ErrorCode::BR_0000,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EntityNotFound(_) => ErrorKind::NotFound,
            Self::BusinessLogic(_) => ErrorKind::Conflict,
            Self::Validation(ValidationError::Forbidden)
            | Self::Validation(ValidationError::InvalidCapabilityToken(_)) => ErrorKind::Forbidden,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Notifier(_) | Self::Renderer(RendererError::Transport(_))
            | Self::Renderer(RendererError::Rejected { .. }) => {
                ErrorKind::ExternalServiceFailure
            }
            Self::Repository(DataLayerError::AlreadyExists) => ErrorKind::Conflict,
            Self::Renderer(RendererError::NotConfigured)
            | Self::Pin(_)
            | Self::ConfigValidation(_)
            | Self::Repository(_)
            | Self::MappingError(_)
            | Self::Other(_) => ErrorKind::Internal,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Admin(_) => ErrorCode::BR_0001,
            Self::Client(_) => ErrorCode::BR_0002,
            Self::Case(_) => ErrorCode::BR_0003,
            Self::Hearing(_) => ErrorCode::BR_0004,
            Self::AccessLink(_) => ErrorCode::BR_0005,
            Self::Invoice(_) => ErrorCode::BR_0006,
            Self::InvoicePayment(_) => ErrorCode::BR_0007,
            Self::Task(_) => ErrorCode::BR_0026,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::LinkInactive(_) => ErrorCode::BR_0011,
            Self::LinkExpired(_) => ErrorCode::BR_0012,
            Self::InvalidSecret(_) => ErrorCode::BR_0013,
            Self::PaymentExceedsRemaining { .. } | Self::PaymentsExceedInvoiceAmount { .. } => {
                ErrorCode::BR_0017
            }
            Self::InvoiceAlreadyPaid(_) => ErrorCode::BR_0018,
            Self::InvoiceCancelled(_) => ErrorCode::BR_0019,
            Self::InvoiceHasPayments(_) => ErrorCode::BR_0020,
            Self::PaymentInvoiceMismatch { .. } => ErrorCode::BR_0030,
            Self::InvalidInvoiceStatus { .. } => ErrorCode::BR_0029,
            Self::AdminAlreadyExists(_) | Self::InvoiceNumberConflict(_) => ErrorCode::BR_0022,
            Self::LedgerInconsistent { .. } => ErrorCode::BR_0032,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Forbidden => ErrorCode::BR_0008,
            Self::InvalidCapabilityToken(_) => ErrorCode::BR_0014,
            Self::MissingField(_) | Self::InvalidEmail(_) => ErrorCode::BR_0009,
            Self::InvalidExpiry { .. } => ErrorCode::BR_0021,
            Self::HearingCaseMismatch { .. } => ErrorCode::BR_0010,
            Self::EmptySubmission => ErrorCode::BR_0015,
            Self::NonPositivePaymentAmount(_) | Self::NegativeInvoiceAmount(_) => {
                ErrorCode::BR_0016
            }
            Self::InvalidPaymentMode(_) => ErrorCode::BR_0023,
        }
    }
}
