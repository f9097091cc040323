use lexdesk_core::model::invoice_payment::InvoicePayment;
use lexdesk_core::repository::error::DataLayerError;
use sea_orm::Set;

use crate::entity::invoice_payment;
use crate::mapper::{from_minor_units, to_minor_units};

impl From<invoice_payment::Model> for InvoicePayment {
    fn from(value: invoice_payment::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            invoice_id: value.invoice_id,
            amount: from_minor_units(value.amount),
            mode: value.mode.into(),
            transaction_ref: value.transaction_ref,
            comment: value.comment,
            payment_date: value.payment_date,
            recorded_by: value.recorded_by,
        }
    }
}

impl TryFrom<InvoicePayment> for invoice_payment::ActiveModel {
    type Error = DataLayerError;

    fn try_from(value: InvoicePayment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            invoice_id: Set(value.invoice_id),
            amount: Set(to_minor_units(value.amount)?),
            mode: Set(value.mode.into()),
            transaction_ref: Set(value.transaction_ref),
            comment: Set(value.comment),
            payment_date: Set(value.payment_date),
            recorded_by: Set(value.recorded_by),
        })
    }
}
