use validator::ValidateEmail;

use super::dto::CreateAdminRequestDTO;
use crate::service::error::{ServiceError, ValidationError};

pub(super) fn validate_create_request(request: &CreateAdminRequestDTO) -> Result<(), ServiceError> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name").into());
    }

    let email = request.email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingField("email").into());
    }

    if !email.validate_email() {
        return Err(ValidationError::InvalidEmail(email.to_owned()).into());
    }

    Ok(())
}
