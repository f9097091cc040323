use lexdesk_core::service::client::dto::{
    ClientResponseDTO, CreateClientRequestDTO, GetClientListQueryDTO,
};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{AdminId, ClientId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, default_page_size, page_size};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(CreateClientRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateClientRequestRestDTO {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Owning advocate, defaults to the acting admin
    pub owner_id: Option<AdminId>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(ClientResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientResponseRestDTO {
    pub id: ClientId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub created_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub last_modified: OffsetDateTime,
    pub owner_id: AdminId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

pub(crate) type GetClientListResponseRestDTO = GetListResponseRestDTO<ClientResponseRestDTO>;

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetClientListQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl From<GetClientListQuery> for GetClientListQueryDTO {
    fn from(value: GetClientListQuery) -> Self {
        Self {
            page: value.page,
            page_size: page_size(value.page_size),
        }
    }
}
