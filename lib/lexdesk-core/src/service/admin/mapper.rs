use shared_types::AdminId;
use time::OffsetDateTime;

use super::dto::{AdminResponseDTO, CreateAdminRequestDTO};
use crate::model::admin::Admin;

impl From<Admin> for AdminResponseDTO {
    fn from(value: Admin) -> Self {
        Self {
            active: value.is_active(),
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            name: value.name,
            email: value.email,
            phone: value.phone,
            role: value.role,
        }
    }
}

pub(super) fn admin_from_create_request(
    request: CreateAdminRequestDTO,
    now: OffsetDateTime,
) -> Admin {
    Admin {
        id: AdminId::new_v4(),
        created_date: now,
        last_modified: now,
        name: request.name.trim().to_owned(),
        email: normalize_email(&request.email),
        phone: request.phone,
        role: request.role,
        deactivated_at: None,
    }
}

pub(super) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
