use lexdesk_core::model::history::History;
use sea_orm::Set;

use crate::entity::history;

impl From<history::Model> for History {
    fn from(value: history::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            action: value.action.into(),
            entity_id: value.entity_id,
            entity_type: value.entity_type.into(),
            actor_id: value.actor_id,
        }
    }
}

impl From<History> for history::ActiveModel {
    fn from(value: History) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            action: Set(value.action.into()),
            entity_id: Set(value.entity_id),
            entity_type: Set(value.entity_type.into()),
            actor_id: Set(value.actor_id),
        }
    }
}
