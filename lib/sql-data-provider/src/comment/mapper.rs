use lexdesk_core::model::comment::{Attachment, Comment, CommentAuthor};
use lexdesk_core::repository::error::DataLayerError;
use sea_orm::Set;

use crate::entity::{attachment, comment};

pub(super) fn comment_from_model(
    model: comment::Model,
    attachments: Vec<attachment::Model>,
) -> Result<Comment, DataLayerError> {
    let author = match (model.author_admin_id, model.author_access_link_id) {
        (Some(admin_id), _) => CommentAuthor::Admin(admin_id),
        (None, Some(access_link_id)) => CommentAuthor::AccessLink(access_link_id),
        (None, None) => {
            return Err(DataLayerError::MappingError(format!(
                "Comment {} has no author",
                model.id
            )));
        }
    };

    Ok(Comment {
        id: model.id,
        created_date: model.created_date,
        case_id: model.case_id,
        hearing_id: model.hearing_id,
        author,
        text: model.text,
        attachments: attachments
            .into_iter()
            .map(Attachment::try_from)
            .collect::<Result<_, _>>()?,
    })
}

impl From<&Comment> for comment::ActiveModel {
    fn from(value: &Comment) -> Self {
        let (author_admin_id, author_access_link_id) = match value.author {
            CommentAuthor::Admin(admin_id) => (Some(admin_id), None),
            CommentAuthor::AccessLink(access_link_id) => (None, Some(access_link_id)),
        };

        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            case_id: Set(value.case_id),
            hearing_id: Set(value.hearing_id),
            author_admin_id: Set(author_admin_id),
            author_access_link_id: Set(author_access_link_id),
            text: Set(value.text.clone()),
        }
    }
}

impl TryFrom<attachment::Model> for Attachment {
    type Error = DataLayerError;

    fn try_from(value: attachment::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            created_date: value.created_date,
            comment_id: value.comment_id,
            file_name: value.file_name,
            media_type: value.media_type,
            size: u64::try_from(value.size)
                .map_err(|error| DataLayerError::MappingError(error.to_string()))?,
            storage_key: value.storage_key,
        })
    }
}

impl TryFrom<Attachment> for attachment::ActiveModel {
    type Error = DataLayerError;

    fn try_from(value: Attachment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            comment_id: Set(value.comment_id),
            file_name: Set(value.file_name),
            media_type: Set(value.media_type),
            size: Set(i64::try_from(value.size)
                .map_err(|error| DataLayerError::MappingError(error.to_string()))?),
            storage_key: Set(value.storage_key),
        })
    }
}
