use super::dto::{CreateCaseRequestDTO, CreateCommentRequestDTO, CreateHearingRequestDTO};
use crate::service::error::{ServiceError, ValidationError};

pub(super) fn validate_create_case_request(
    request: &CreateCaseRequestDTO,
) -> Result<(), ServiceError> {
    if request.title.trim().is_empty() {
        return Err(ValidationError::MissingField("title").into());
    }

    if request.case_number.trim().is_empty() {
        return Err(ValidationError::MissingField("caseNumber").into());
    }

    Ok(())
}

pub(super) fn validate_create_hearing_request(
    request: &CreateHearingRequestDTO,
) -> Result<(), ServiceError> {
    if request.title.trim().is_empty() {
        return Err(ValidationError::MissingField("title").into());
    }

    Ok(())
}

pub(super) fn validate_create_comment_request(
    request: &CreateCommentRequestDTO,
) -> Result<(), ServiceError> {
    let has_text = request
        .text
        .as_deref()
        .is_some_and(|text| !text.trim().is_empty());

    if !has_text && request.attachments.is_empty() {
        return Err(ValidationError::EmptySubmission.into());
    }

    if request
        .attachments
        .iter()
        .any(|attachment| attachment.storage_key.trim().is_empty())
    {
        return Err(ValidationError::MissingField("attachments.storageKey").into());
    }

    Ok(())
}
