use autometrics::autometrics;
use lexdesk_core::model::client::{Client, ClientListQuery, GetClientList};
use lexdesk_core::repository::client_repository::ClientRepository;
use lexdesk_core::repository::error::DataLayerError;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::ClientId;

use super::ClientProvider;
use crate::common::fetch_page;
use crate::entity::client;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl ClientRepository for ClientProvider {
    async fn create_client(&self, request: Client) -> Result<ClientId, DataLayerError> {
        let id = request.id;

        client::Entity::insert(client::ActiveModel::from(request))
            .exec(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(id)
    }

    async fn get_client(&self, id: &ClientId) -> Result<Option<Client>, DataLayerError> {
        let client = client::Entity::find_by_id(id)
            .one(&self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(client.map(Client::from))
    }

    async fn get_client_list(
        &self,
        query: ClientListQuery,
    ) -> Result<GetClientList, DataLayerError> {
        let mut select = client::Entity::find()
            .order_by_desc(client::Column::CreatedDate)
            .order_by_asc(client::Column::Id);

        if let Some(owner_id) = query.owner_id {
            select = select.filter(client::Column::OwnerId.eq(owner_id));
        }

        let page = fetch_page(select, &query.pagination, &self.db.tx())
            .await
            .map_err(to_data_layer_error)?;

        Ok(page.map(Client::from))
    }
}
