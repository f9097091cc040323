use rust_decimal::Decimal;
use shared_types::{AdminId, ClientId, InvoiceId};
use strum::{Display, EnumString};
use time::{Date, OffsetDateTime};

use super::client::Client;
use super::common::{GetListResponse, ListPagination};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub number: String,
    pub year: i32,
    pub sequence: u32,
    pub client_id: ClientId,
    pub owner_id: AdminId,
    pub amount: Decimal,
    pub paid_amount: Decimal,
    pub status: InvoiceStatus,
    pub due_date: Date,
    pub comments: Option<String>,
    pub last_reminder_sent_at: Option<OffsetDateTime>,
    pub reminder_count: u32,

    // Relations
    pub client: Option<Client>,
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Unpaid,
    PartiallyPaid,
    Paid,
    Cancelled,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InvoiceRelations {
    pub client: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateInvoiceRequest {
    pub id: InvoiceId,
    pub last_modified: OffsetDateTime,
    pub paid_amount: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
    pub reminder: Option<ReminderBookkeeping>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReminderBookkeeping {
    pub last_reminder_sent_at: OffsetDateTime,
    pub reminder_count: u32,
}

#[derive(Clone, Debug, Default)]
pub struct InvoiceListQuery {
    pub pagination: ListPagination,
    pub owner_id: Option<AdminId>,
    pub client_id: Option<ClientId>,
    pub status: Option<InvoiceStatus>,
}

/// Selects invoices that should receive a payment reminder
#[derive(Clone, Debug)]
pub struct ReminderQuery {
    pub due_before: Date,
    pub last_reminded_before: OffsetDateTime,
    pub limit: u64,
}

pub type GetInvoiceList = GetListResponse<Invoice>;
