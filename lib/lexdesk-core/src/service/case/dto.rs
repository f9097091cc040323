use one_dto_mapper::From;
use shared_types::{AdminId, AttachmentId, CaseId, ClientId, CommentId, HearingId};
use time::OffsetDateTime;

use crate::model::case::{Case, Hearing};
use crate::model::comment::{Attachment, CommentAuthor};
use crate::model::common::GetListResponse;
use crate::service::access_link::dto::AttachmentRequestDTO;

#[derive(Clone, Debug)]
pub struct CreateCaseRequestDTO {
    pub client_id: ClientId,
    pub title: String,
    pub case_number: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Case)]
pub struct CaseResponseDTO {
    pub id: CaseId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub owner_id: AdminId,
    pub client_id: ClientId,
    pub title: String,
    pub case_number: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct GetCaseListQueryDTO {
    pub page: u32,
    pub page_size: u32,
    pub client_id: Option<ClientId>,
}

pub type GetCaseListResponseDTO = GetListResponse<CaseResponseDTO>;

#[derive(Clone, Debug)]
pub struct CreateHearingRequestDTO {
    pub hearing_date: OffsetDateTime,
    pub title: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Hearing)]
pub struct HearingResponseDTO {
    pub id: HearingId,
    pub created_date: OffsetDateTime,
    pub case_id: CaseId,
    pub hearing_date: OffsetDateTime,
    pub title: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CreateCommentRequestDTO {
    pub hearing_id: Option<HearingId>,
    pub text: Option<String>,
    pub attachments: Vec<AttachmentRequestDTO>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentResponseDTO {
    pub id: CommentId,
    pub created_date: OffsetDateTime,
    pub case_id: CaseId,
    pub hearing_id: Option<HearingId>,
    pub author: CommentAuthor,
    pub text: Option<String>,
    pub attachments: Vec<AttachmentResponseDTO>,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Attachment)]
pub struct AttachmentResponseDTO {
    pub id: AttachmentId,
    pub created_date: OffsetDateTime,
    pub file_name: String,
    pub media_type: String,
    pub size: u64,
    pub storage_key: String,
}
