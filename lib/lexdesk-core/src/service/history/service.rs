use super::HistoryService;
use super::dto::{GetHistoryListQueryDTO, GetHistoryListResponseDTO};
use crate::model::common::ListPagination;
use crate::model::history::HistoryListQuery;
use crate::proto::session::Session;
use crate::service::error::ServiceError;

impl HistoryService {
    /// Returns audit entries, newest first, super-admin only
    ///
    /// # Arguments
    ///
    /// * `query` - pagination and optional entity filter
    /// * `session` - acting admin
    pub async fn get_history_list(
        &self,
        query: GetHistoryListQueryDTO,
        session: &Session,
    ) -> Result<GetHistoryListResponseDTO, ServiceError> {
        session.ensure_super_admin()?;

        let list = self
            .history_repository
            .get_history_list(HistoryListQuery {
                pagination: ListPagination {
                    page: query.page,
                    page_size: query.page_size,
                },
                entity_id: query.entity_id,
            })
            .await?;

        Ok(list.map(Into::into))
    }
}
