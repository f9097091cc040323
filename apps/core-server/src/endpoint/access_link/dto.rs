use lexdesk_core::service::access_link::dto::{
    AccessLinkResponseDTO, AttachmentRequestDTO, CreateAccessLinkRequestDTO,
    CreateAccessLinkResponseDTO, SubmissionReceiptDTO, SubmissionRequestDTO,
    VerifyAccessLinkResponseDTO,
};
use one_dto_mapper::{From, Into, convert_inner};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use shared_types::{AccessLinkId, AdminId, CaseId, CommentId, HearingId};
use time::OffsetDateTime;
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(CreateAccessLinkRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateAccessLinkRequestRestDTO {
    pub case_id: CaseId,
    /// Scopes the link to one hearing of the case
    pub hearing_id: Option<HearingId>,
    pub title: String,
    pub description: Option<String>,
    pub expires_in_hours: u32,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From)]
#[from(lexdesk_core::model::access_link::AccessLinkStatus)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum AccessLinkStatusRestEnum {
    Active,
    Expired,
    Used,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(AccessLinkResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccessLinkResponseRestDTO {
    pub id: AccessLinkId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub created_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub last_modified: OffsetDateTime,
    pub case_id: CaseId,
    pub hearing_id: Option<HearingId>,
    pub title: String,
    pub description: Option<String>,
    pub status: AccessLinkStatusRestEnum,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-03T10:00:00Z")]
    pub expires_at: OffsetDateTime,
    pub created_by: AdminId,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

/// Newly created link together with its one-time PIN
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateAccessLinkResponseRestDTO {
    #[serde(flatten)]
    pub link: AccessLinkResponseRestDTO,
    #[schema(example = "482913")]
    pub pin: String,
}

impl From<CreateAccessLinkResponseDTO> for CreateAccessLinkResponseRestDTO {
    fn from(value: CreateAccessLinkResponseDTO) -> Self {
        Self {
            link: value.link.into(),
            pin: value.pin.expose_secret().to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyAccessLinkRequestRestDTO {
    #[schema(value_type = String, example = "482913")]
    pub pin: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(VerifyAccessLinkResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyAccessLinkResponseRestDTO {
    /// Capability token to present when submitting
    pub token: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:15:00Z")]
    pub expires_at: OffsetDateTime,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(AttachmentRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttachmentRequestRestDTO {
    pub file_name: String,
    #[schema(example = "application/pdf")]
    pub media_type: String,
    pub size: u64,
    /// Key of the already uploaded object in the external file store
    pub storage_key: String,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(SubmissionRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmissionRequestRestDTO {
    pub text: Option<String>,
    #[serde(default)]
    #[into(with_fn = convert_inner)]
    pub attachments: Vec<AttachmentRequestRestDTO>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(SubmissionReceiptDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmissionReceiptRestDTO {
    pub comment_id: CommentId,
    pub link_id: AccessLinkId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:05:00Z")]
    pub submitted_at: OffsetDateTime,
    pub attachment_count: usize,
}
