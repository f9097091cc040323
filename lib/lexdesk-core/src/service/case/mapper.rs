use shared_types::{AdminId, CaseId, CommentId, HearingId};
use time::OffsetDateTime;

use super::dto::{
    CommentResponseDTO, CreateCaseRequestDTO, CreateCommentRequestDTO, CreateHearingRequestDTO,
};
use crate::model::case::{Case, Hearing};
use crate::model::client::Client;
use crate::model::comment::{Comment, CommentAuthor};
use crate::service::access_link::mapper::attachment_from_request;

impl From<Comment> for CommentResponseDTO {
    fn from(value: Comment) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            case_id: value.case_id,
            hearing_id: value.hearing_id,
            author: value.author,
            text: value.text,
            attachments: value.attachments.into_iter().map(Into::into).collect(),
        }
    }
}

pub(super) fn case_from_create_request(
    request: CreateCaseRequestDTO,
    client: &Client,
    now: OffsetDateTime,
) -> Case {
    Case {
        id: CaseId::new_v4(),
        created_date: now,
        last_modified: now,
        owner_id: client.owner_id,
        client_id: client.id,
        title: request.title.trim().to_owned(),
        case_number: request.case_number.trim().to_owned(),
        description: request.description,
    }
}

pub(super) fn hearing_from_create_request(
    request: CreateHearingRequestDTO,
    case_id: CaseId,
    now: OffsetDateTime,
) -> Hearing {
    Hearing {
        id: HearingId::new_v4(),
        created_date: now,
        case_id,
        hearing_date: request.hearing_date,
        title: request.title.trim().to_owned(),
        notes: request.notes,
    }
}

pub(super) fn comment_from_create_request(
    request: CreateCommentRequestDTO,
    case_id: CaseId,
    author_id: AdminId,
    now: OffsetDateTime,
) -> Comment {
    let id = CommentId::new_v4();

    Comment {
        id,
        created_date: now,
        case_id,
        hearing_id: request.hearing_id,
        author: CommentAuthor::Admin(author_id),
        text: request.text,
        attachments: request
            .attachments
            .into_iter()
            .map(|attachment| attachment_from_request(attachment, id, now))
            .collect(),
    }
}
