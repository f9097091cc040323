use secrecy::SecretString;
use shared_types::{AccessLinkId, AdminId, CaseId, CommentId, HearingId};
use time::OffsetDateTime;

use crate::model::access_link::AccessLinkStatus;

#[derive(Clone, Debug)]
pub struct CreateAccessLinkRequestDTO {
    pub case_id: CaseId,
    pub hearing_id: Option<HearingId>,
    pub title: String,
    pub description: Option<String>,
    pub expires_in_hours: u32,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

/// Result of link creation, the only place where the PIN is ever available
#[derive(Debug)]
pub struct CreateAccessLinkResponseDTO {
    pub link: AccessLinkResponseDTO,
    pub pin: SecretString,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessLinkResponseDTO {
    pub id: AccessLinkId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub case_id: CaseId,
    pub hearing_id: Option<HearingId>,
    pub title: String,
    pub description: Option<String>,
    pub status: AccessLinkStatus,
    pub expires_at: OffsetDateTime,
    pub created_by: AdminId,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyAccessLinkResponseDTO {
    pub token: String,
    pub expires_at: OffsetDateTime,
}

#[derive(Clone, Debug, Default)]
pub struct SubmissionRequestDTO {
    pub text: Option<String>,
    pub attachments: Vec<AttachmentRequestDTO>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentRequestDTO {
    pub file_name: String,
    pub media_type: String,
    pub size: u64,
    pub storage_key: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionReceiptDTO {
    pub comment_id: CommentId,
    pub link_id: AccessLinkId,
    pub submitted_at: OffsetDateTime,
    pub attachment_count: usize,
}
