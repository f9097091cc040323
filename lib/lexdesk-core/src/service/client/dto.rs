use one_dto_mapper::From;
use shared_types::{AdminId, ClientId};
use time::OffsetDateTime;

use crate::model::client::Client;
use crate::model::common::GetListResponse;

#[derive(Clone, Debug)]
pub struct CreateClientRequestDTO {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Advocate the client belongs to, only super-admins may set someone else
    pub owner_id: Option<AdminId>,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Client)]
pub struct ClientResponseDTO {
    pub id: ClientId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub owner_id: AdminId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct GetClientListQueryDTO {
    pub page: u32,
    pub page_size: u32,
}

pub type GetClientListResponseDTO = GetListResponse<ClientResponseDTO>;
