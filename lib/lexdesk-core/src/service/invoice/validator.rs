use rust_decimal::Decimal;

use super::dto::CreateInvoiceRequestDTO;
use crate::service::error::{ServiceError, ValidationError};

pub(super) fn validate_create_request(request: &CreateInvoiceRequestDTO) -> Result<(), ServiceError> {
    if request.amount < Decimal::ZERO {
        return Err(ValidationError::NegativeInvoiceAmount(request.amount).into());
    }

    Ok(())
}
