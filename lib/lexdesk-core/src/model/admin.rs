use shared_types::AdminId;
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::common::{GetListResponse, ListPagination};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Admin {
    pub id: AdminId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: AdminRole,
    pub deactivated_at: Option<OffsetDateTime>,
}

impl Admin {
    pub fn is_active(&self) -> bool {
        self.deactivated_at.is_none()
    }
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq, Hash)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminRole {
    SuperAdmin,
    Advocate,
}

#[derive(Clone, Debug, Default)]
pub struct AdminListQuery {
    pub pagination: ListPagination,
    pub role: Option<AdminRole>,
}

pub type GetAdminList = GetListResponse<Admin>;
