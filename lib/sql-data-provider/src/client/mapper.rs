use lexdesk_core::model::client::Client;
use sea_orm::Set;

use crate::entity::client;

impl From<client::Model> for Client {
    fn from(value: client::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            owner_id: value.owner_id,
            name: value.name,
            email: value.email,
            phone: value.phone,
        }
    }
}

impl From<Client> for client::ActiveModel {
    fn from(value: Client) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            owner_id: Set(value.owner_id),
            name: Set(value.name),
            email: Set(value.email),
            phone: Set(value.phone),
        }
    }
}
