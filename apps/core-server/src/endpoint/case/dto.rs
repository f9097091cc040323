use lexdesk_core::model::comment::CommentAuthor;
use lexdesk_core::service::case::dto::{
    AttachmentResponseDTO, CaseResponseDTO, CommentResponseDTO, CreateCaseRequestDTO,
    CreateCommentRequestDTO, CreateHearingRequestDTO, GetCaseListQueryDTO, HearingResponseDTO,
};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{
    AccessLinkId, AdminId, AttachmentId, CaseId, ClientId, CommentId, HearingId,
};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, default_page_size, page_size};
use crate::endpoint::access_link::dto::AttachmentRequestRestDTO;

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(CreateCaseRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCaseRequestRestDTO {
    pub client_id: ClientId,
    pub title: String,
    pub case_number: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(CaseResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CaseResponseRestDTO {
    pub id: CaseId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub created_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub last_modified: OffsetDateTime,
    pub owner_id: AdminId,
    pub client_id: ClientId,
    pub title: String,
    pub case_number: String,
    pub description: Option<String>,
}

pub(crate) type GetCaseListResponseRestDTO = GetListResponseRestDTO<CaseResponseRestDTO>;

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetCaseListQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    pub client_id: Option<ClientId>,
}

impl From<GetCaseListQuery> for GetCaseListQueryDTO {
    fn from(value: GetCaseListQuery) -> Self {
        Self {
            page: value.page,
            page_size: page_size(value.page_size),
            client_id: value.client_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(CreateHearingRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateHearingRequestRestDTO {
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-04-15T09:30:00+05:30")]
    pub hearing_date: OffsetDateTime,
    pub title: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(HearingResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HearingResponseRestDTO {
    pub id: HearingId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub created_date: OffsetDateTime,
    pub case_id: CaseId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-04-15T09:30:00+05:30")]
    pub hearing_date: OffsetDateTime,
    pub title: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(CreateCommentRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCommentRequestRestDTO {
    pub hearing_id: Option<HearingId>,
    pub text: Option<String>,
    #[serde(default)]
    #[into(with_fn = convert_inner)]
    pub attachments: Vec<AttachmentRequestRestDTO>,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetCommentListQuery {
    /// Only comments posted against this hearing
    pub hearing_id: Option<HearingId>,
}

/// Who posted a comment
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(tag = "type", content = "id", rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum CommentAuthorRestDTO {
    Admin(AdminId),
    AccessLink(AccessLinkId),
}

impl From<CommentAuthor> for CommentAuthorRestDTO {
    fn from(value: CommentAuthor) -> Self {
        match value {
            CommentAuthor::Admin(id) => Self::Admin(id),
            CommentAuthor::AccessLink(id) => Self::AccessLink(id),
        }
    }
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(CommentResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentResponseRestDTO {
    pub id: CommentId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub created_date: OffsetDateTime,
    pub case_id: CaseId,
    pub hearing_id: Option<HearingId>,
    pub author: CommentAuthorRestDTO,
    pub text: Option<String>,
    #[from(with_fn = convert_inner)]
    pub attachments: Vec<AttachmentResponseRestDTO>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(AttachmentResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttachmentResponseRestDTO {
    pub id: AttachmentId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub created_date: OffsetDateTime,
    pub file_name: String,
    pub media_type: String,
    pub size: u64,
    pub storage_key: String,
}
