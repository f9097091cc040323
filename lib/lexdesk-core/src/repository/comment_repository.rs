use shared_types::{CaseId, CommentId, HearingId};

use super::error::DataLayerError;
use crate::model::comment::Comment;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait CommentRepository: Send + Sync {
    /// Inserts the comment together with its attachments
    async fn create_comment(&self, request: Comment) -> Result<CommentId, DataLayerError>;

    /// Comments of a case (or only of one of its hearings), newest first
    async fn get_comment_list(
        &self,
        case_id: &CaseId,
        hearing_id: Option<HearingId>,
    ) -> Result<Vec<Comment>, DataLayerError>;
}
