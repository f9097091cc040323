use shared_types::ClientId;

use super::error::DataLayerError;
use crate::model::client::{Client, ClientListQuery, GetClientList};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create_client(&self, request: Client) -> Result<ClientId, DataLayerError>;

    async fn get_client(&self, id: &ClientId) -> Result<Option<Client>, DataLayerError>;

    async fn get_client_list(
        &self,
        query: ClientListQuery,
    ) -> Result<GetClientList, DataLayerError>;
}
