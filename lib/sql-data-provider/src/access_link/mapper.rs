use lexdesk_core::model::access_link::{AccessLink, AccessLinkTarget, CounterpartyContact};
use sea_orm::Set;

use crate::entity::access_link;

impl From<access_link::Model> for AccessLink {
    fn from(value: access_link::Model) -> Self {
        let target = match value.hearing_id {
            Some(hearing_id) => AccessLinkTarget::Hearing(value.case_id, hearing_id),
            None => AccessLinkTarget::Case(value.case_id),
        };

        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            target,
            title: value.title,
            description: value.description,
            status: value.status.into(),
            secret_hash: value.secret_hash,
            expires_at: value.expires_at,
            created_by: value.created_by,
            contact: CounterpartyContact {
                email: value.contact_email,
                phone: value.contact_phone,
            },
        }
    }
}

impl From<AccessLink> for access_link::ActiveModel {
    fn from(value: AccessLink) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            case_id: Set(value.target.case_id()),
            hearing_id: Set(value.target.hearing_id()),
            title: Set(value.title),
            description: Set(value.description),
            status: Set(value.status.into()),
            secret_hash: Set(value.secret_hash),
            expires_at: Set(value.expires_at),
            created_by: Set(value.created_by),
            contact_email: Set(value.contact.email),
            contact_phone: Set(value.contact.phone),
        }
    }
}
