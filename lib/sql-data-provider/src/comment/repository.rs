use autometrics::autometrics;
use itertools::Itertools;
use lexdesk_core::model::comment::Comment;
use lexdesk_core::repository::comment_repository::CommentRepository;
use lexdesk_core::repository::error::DataLayerError;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{CaseId, CommentId, HearingId};

use super::CommentProvider;
use super::mapper::comment_from_model;
use crate::entity::{attachment, comment};
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl CommentRepository for CommentProvider {
    async fn create_comment(&self, request: Comment) -> Result<CommentId, DataLayerError> {
        let id = request.id;
        let db = self.db.tx();

        comment::Entity::insert(comment::ActiveModel::from(&request))
            .exec(&db)
            .await
            .map_err(to_data_layer_error)?;

        if !request.attachments.is_empty() {
            let attachments = request
                .attachments
                .into_iter()
                .map(attachment::ActiveModel::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            attachment::Entity::insert_many(attachments)
                .exec(&db)
                .await
                .map_err(to_data_layer_error)?;
        }

        Ok(id)
    }

    async fn get_comment_list(
        &self,
        case_id: &CaseId,
        hearing_id: Option<HearingId>,
    ) -> Result<Vec<Comment>, DataLayerError> {
        let db = self.db.tx();

        let mut select = comment::Entity::find()
            .filter(comment::Column::CaseId.eq(case_id))
            .order_by_desc(comment::Column::CreatedDate)
            .order_by_asc(comment::Column::Id);
        if let Some(hearing_id) = hearing_id {
            select = select.filter(comment::Column::HearingId.eq(hearing_id));
        }

        let comments = select.all(&db).await.map_err(to_data_layer_error)?;
        if comments.is_empty() {
            return Ok(vec![]);
        }

        let mut attachments = attachment::Entity::find()
            .filter(attachment::Column::CommentId.is_in(comments.iter().map(|comment| comment.id)))
            .order_by_asc(attachment::Column::CreatedDate)
            .order_by_asc(attachment::Column::FileName)
            .all(&db)
            .await
            .map_err(to_data_layer_error)?
            .into_iter()
            .into_group_map_by(|attachment| attachment.comment_id);

        comments
            .into_iter()
            .map(|comment| {
                let attachments = attachments.remove(&comment.id).unwrap_or_default();
                comment_from_model(comment, attachments)
            })
            .collect()
    }
}
