use lexdesk_core::model::admin::Admin;
use sea_orm::Set;

use crate::entity::admin;

impl From<admin::Model> for Admin {
    fn from(value: admin::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            name: value.name,
            email: value.email,
            phone: value.phone,
            role: value.role.into(),
            deactivated_at: value.deactivated_at,
        }
    }
}

impl From<Admin> for admin::ActiveModel {
    fn from(value: Admin) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            name: Set(value.name),
            email: Set(value.email),
            phone: Set(value.phone),
            role: Set(value.role.into()),
            deactivated_at: Set(value.deactivated_at),
        }
    }
}
