use validator::ValidateEmail;

use super::dto::CreateClientRequestDTO;
use crate::service::error::{ServiceError, ValidationError};

pub(super) fn validate_create_request(request: &CreateClientRequestDTO) -> Result<(), ServiceError> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name").into());
    }

    let email = request.email.trim();
    if !email.validate_email() {
        return Err(ValidationError::InvalidEmail(email.to_owned()).into());
    }

    Ok(())
}
