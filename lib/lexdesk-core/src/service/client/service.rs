use shared_types::ClientId;

use super::ClientService;
use super::dto::{
    ClientResponseDTO, CreateClientRequestDTO, GetClientListQueryDTO, GetClientListResponseDTO,
};
use super::mapper::client_from_create_request;
use super::validator::validate_create_request;
use crate::model::client::ClientListQuery;
use crate::model::common::ListPagination;
use crate::model::history::{HistoryAction, HistoryEntityType};
use crate::proto::session::Session;
use crate::service::error::{EntityNotFoundError, ServiceError};
use crate::util::history::{history_event, log_history_event};

impl ClientService {
    /// Creates a client of the acting advocate
    ///
    /// # Arguments
    ///
    /// * `request` - client contact details
    /// * `session` - acting admin, super-admins may assign another owner
    pub async fn create_client(
        &self,
        request: CreateClientRequestDTO,
        session: &Session,
    ) -> Result<ClientId, ServiceError> {
        validate_create_request(&request)?;

        let owner_id = request.owner_id.unwrap_or(session.admin_id);
        session.ensure_owner(&owner_id)?;

        let client = client_from_create_request(request, owner_id, self.clock.now_utc());
        let id = self.client_repository.create_client(client).await?;

        tracing::info!(%id, %owner_id, "Client created");
        log_history_event(
            &*self.history_repository,
            history_event(
                id,
                HistoryEntityType::Client,
                HistoryAction::Created,
                Some(session.admin_id),
            ),
        )
        .await;

        Ok(id)
    }

    pub async fn get_client(
        &self,
        client_id: &ClientId,
        session: &Session,
    ) -> Result<ClientResponseDTO, ServiceError> {
        let Some(client) = self.client_repository.get_client(client_id).await? else {
            return Err(EntityNotFoundError::Client(*client_id).into());
        };

        session.ensure_owner(&client.owner_id)?;

        Ok(client.into())
    }

    /// Returns a page of clients, advocates only see their own
    pub async fn get_client_list(
        &self,
        query: GetClientListQueryDTO,
        session: &Session,
    ) -> Result<GetClientListResponseDTO, ServiceError> {
        let list = self
            .client_repository
            .get_client_list(ClientListQuery {
                pagination: ListPagination {
                    page: query.page,
                    page_size: query.page_size,
                },
                owner_id: session.owner_filter(),
            })
            .await?;

        Ok(list.map(Into::into))
    }
}
