use validator::ValidateEmail;

use super::dto::{CreateAccessLinkRequestDTO, SubmissionRequestDTO};
use crate::config::core_config::AccessLinkConfig;
use crate::service::error::{ServiceError, ValidationError};

pub(super) fn validate_create_request(
    request: &CreateAccessLinkRequestDTO,
    config: &AccessLinkConfig,
) -> Result<(), ServiceError> {
    if request.title.trim().is_empty() {
        return Err(ValidationError::MissingField("title").into());
    }

    if request.contact_email.trim().is_empty() {
        return Err(ValidationError::MissingField("contactEmail").into());
    }

    if !request.contact_email.validate_email() {
        return Err(ValidationError::InvalidEmail(request.contact_email.to_owned()).into());
    }

    if request.expires_in_hours == 0 || request.expires_in_hours > config.max_expires_in_hours {
        return Err(ValidationError::InvalidExpiry {
            value: request.expires_in_hours,
            max: config.max_expires_in_hours,
        }
        .into());
    }

    Ok(())
}

pub(super) fn validate_submission(request: &SubmissionRequestDTO) -> Result<(), ServiceError> {
    let has_text = request
        .text
        .as_ref()
        .is_some_and(|text| !text.trim().is_empty());

    if !has_text && request.attachments.is_empty() {
        return Err(ValidationError::EmptySubmission.into());
    }

    for attachment in &request.attachments {
        if attachment.file_name.trim().is_empty() {
            return Err(ValidationError::MissingField("attachments.fileName").into());
        }
        if attachment.storage_key.trim().is_empty() {
            return Err(ValidationError::MissingField("attachments.storageKey").into());
        }
    }

    Ok(())
}
