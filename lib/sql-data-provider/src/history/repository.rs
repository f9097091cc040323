use autometrics::autometrics;
use lexdesk_core::model::history::{GetHistoryList, History, HistoryListQuery};
use lexdesk_core::repository::error::DataLayerError;
use lexdesk_core::repository::history_repository::HistoryRepository;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::HistoryId;

use super::HistoryProvider;
use crate::common::fetch_page;
use crate::entity::history;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl HistoryRepository for HistoryProvider {
    async fn create_history(&self, request: History) -> Result<HistoryId, DataLayerError> {
        let id = request.id;

        history::Entity::insert(history::ActiveModel::from(request))
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_history_list(
        &self,
        query: HistoryListQuery,
    ) -> Result<GetHistoryList, DataLayerError> {
        let mut select = history::Entity::find()
            .order_by_desc(history::Column::CreatedDate)
            .order_by_desc(history::Column::Id);

        if let Some(entity_id) = query.entity_id {
            select = select.filter(history::Column::EntityId.eq(entity_id));
        }

        let page = fetch_page(select, &query.pagination, &self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(page.map(History::from))
    }
}
