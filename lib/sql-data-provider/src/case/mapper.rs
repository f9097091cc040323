use lexdesk_core::model::case::{Case, Hearing};
use sea_orm::Set;

use crate::entity::{hearing, legal_case};

impl From<legal_case::Model> for Case {
    fn from(value: legal_case::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            owner_id: value.owner_id,
            client_id: value.client_id,
            title: value.title,
            case_number: value.case_number,
            description: value.description,
        }
    }
}

impl From<Case> for legal_case::ActiveModel {
    fn from(value: Case) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            owner_id: Set(value.owner_id),
            client_id: Set(value.client_id),
            title: Set(value.title),
            case_number: Set(value.case_number),
            description: Set(value.description),
        }
    }
}

impl From<hearing::Model> for Hearing {
    fn from(value: hearing::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            case_id: value.case_id,
            hearing_date: value.hearing_date,
            title: value.title,
            notes: value.notes,
        }
    }
}

impl From<Hearing> for hearing::ActiveModel {
    fn from(value: Hearing) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            case_id: Set(value.case_id),
            hearing_date: Set(value.hearing_date),
            title: Set(value.title),
            notes: Set(value.notes),
        }
    }
}
