use shared_types::AdminId;
use time::OffsetDateTime;

use crate::model::admin::AdminRole;
use crate::model::common::GetListResponse;

#[derive(Clone, Debug)]
pub struct CreateAdminRequestDTO {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: AdminRole,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminResponseDTO {
    pub id: AdminId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: AdminRole,
    pub active: bool,
}

#[derive(Clone, Debug, Default)]
pub struct GetAdminListQueryDTO {
    pub page: u32,
    pub page_size: u32,
    pub role: Option<AdminRole>,
}

pub type GetAdminListResponseDTO = GetListResponse<AdminResponseDTO>;
