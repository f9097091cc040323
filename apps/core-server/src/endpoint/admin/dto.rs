use lexdesk_core::service::admin::dto::{
    AdminResponseDTO, CreateAdminRequestDTO, GetAdminListQueryDTO,
};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::AdminId;
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, default_page_size, page_size};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(CreateAdminRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateAdminRequestRestDTO {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: AdminRoleRestEnum,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[from(lexdesk_core::model::admin::AdminRole)]
#[into(lexdesk_core::model::admin::AdminRole)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum AdminRoleRestEnum {
    SuperAdmin,
    Advocate,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(AdminResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdminResponseRestDTO {
    pub id: AdminId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub created_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub last_modified: OffsetDateTime,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: AdminRoleRestEnum,
    pub active: bool,
}

pub(crate) type GetAdminListResponseRestDTO = GetListResponseRestDTO<AdminResponseRestDTO>;

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetAdminListQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    pub role: Option<AdminRoleRestEnum>,
}

impl From<GetAdminListQuery> for GetAdminListQueryDTO {
    fn from(value: GetAdminListQuery) -> Self {
        Self {
            page: value.page,
            page_size: page_size(value.page_size),
            role: convert_inner(value.role),
        }
    }
}
