use shared_types::{AdminId, ClientId};
use time::OffsetDateTime;

use super::common::{GetListResponse, ListPagination};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub owner_id: AdminId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ClientListQuery {
    pub pagination: ListPagination,
    /// Restricts the list to clients of a single advocate
    pub owner_id: Option<AdminId>,
}

pub type GetClientList = GetListResponse<Client>;
