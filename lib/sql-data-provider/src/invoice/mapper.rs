use lexdesk_core::model::client::Client;
use lexdesk_core::model::invoice::Invoice;
use lexdesk_core::repository::error::DataLayerError;
use sea_orm::Set;

use crate::entity::{client, invoice};
use crate::mapper::{from_minor_units, to_minor_units};

pub(super) fn invoice_from_model(model: invoice::Model, client: Option<client::Model>) -> Invoice {
    Invoice {
        id: model.id,
        created_date: model.created_date,
        last_modified: model.last_modified,
        number: model.number,
        year: model.year,
        sequence: model.sequence,
        client_id: model.client_id,
        owner_id: model.owner_id,
        amount: from_minor_units(model.amount),
        paid_amount: from_minor_units(model.paid_amount),
        status: model.status.into(),
        due_date: model.due_date,
        comments: model.comments,
        last_reminder_sent_at: model.last_reminder_sent_at,
        reminder_count: model.reminder_count,
        client: client.map(Client::from),
    }
}

impl TryFrom<Invoice> for invoice::ActiveModel {
    type Error = DataLayerError;

    fn try_from(value: Invoice) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            number: Set(value.number),
            year: Set(value.year),
            sequence: Set(value.sequence),
            client_id: Set(value.client_id),
            owner_id: Set(value.owner_id),
            amount: Set(to_minor_units(value.amount)?),
            paid_amount: Set(to_minor_units(value.paid_amount)?),
            status: Set(value.status.into()),
            due_date: Set(value.due_date),
            comments: Set(value.comments),
            last_reminder_sent_at: Set(value.last_reminder_sent_at),
            reminder_count: Set(value.reminder_count),
        })
    }
}
