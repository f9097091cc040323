use rust_decimal::Decimal;
use shared_types::{AdminId, ClientId, InvoiceId, InvoicePaymentId};
use time::{Date, OffsetDateTime};

use crate::model::common::GetListResponse;
use crate::model::invoice::InvoiceStatus;
use crate::model::invoice_payment::PaymentMode;

#[derive(Clone, Debug)]
pub struct CreateInvoiceRequestDTO {
    pub client_id: ClientId,
    pub amount: Decimal,
    pub due_date: Date,
    pub comments: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoiceResponseDTO {
    pub id: InvoiceId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub number: String,
    pub client_id: ClientId,
    pub owner_id: AdminId,
    pub amount: Decimal,
    pub paid_amount: Decimal,
    pub remaining_amount: Decimal,
    pub status: InvoiceStatus,
    pub due_date: Date,
    pub comments: Option<String>,
    pub last_reminder_sent_at: Option<OffsetDateTime>,
    pub reminder_count: u32,
}

#[derive(Clone, Debug, Default)]
pub struct GetInvoiceListQueryDTO {
    pub page: u32,
    pub page_size: u32,
    pub status: Option<InvoiceStatus>,
    pub client_id: Option<ClientId>,
}

pub type GetInvoiceListResponseDTO = GetListResponse<InvoiceResponseDTO>;

#[derive(Clone, Debug)]
pub struct CreatePaymentRequestDTO {
    pub amount: Decimal,
    /// One of `cash`, `upi`, `bank`, `cheque`, `others`, any letter case
    pub mode: String,
    pub transaction_ref: Option<String>,
    pub comment: Option<String>,
    pub payment_date: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, Default)]
pub struct UpdatePaymentRequestDTO {
    pub amount: Option<Decimal>,
    pub mode: Option<String>,
    pub transaction_ref: Option<Option<String>>,
    pub comment: Option<Option<String>>,
    pub payment_date: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoicePaymentResponseDTO {
    pub id: InvoicePaymentId,
    pub created_date: OffsetDateTime,
    pub invoice_id: InvoiceId,
    pub amount: Decimal,
    pub mode: PaymentMode,
    pub transaction_ref: Option<String>,
    pub comment: Option<String>,
    pub payment_date: OffsetDateTime,
    pub recorded_by: AdminId,
}

/// Ledger totals derived from an invoice
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoiceSummaryDTO {
    pub total: Decimal,
    pub paid: Decimal,
    pub remaining: Decimal,
    pub status: InvoiceStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentResultDTO {
    pub payment: InvoicePaymentResponseDTO,
    pub invoice: InvoiceSummaryDTO,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoicePaymentListDTO {
    pub payments: Vec<InvoicePaymentResponseDTO>,
    pub summary: InvoiceSummaryDTO,
}
