use rust_decimal::Decimal;
use shared_types::{AdminId, InvoiceId, InvoicePaymentId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvoicePayment {
    pub id: InvoicePaymentId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub invoice_id: InvoiceId,
    pub amount: Decimal,
    pub mode: PaymentMode,
    pub transaction_ref: Option<String>,
    pub comment: Option<String>,
    pub payment_date: OffsetDateTime,
    pub recorded_by: AdminId,
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PaymentMode {
    Cash,
    Upi,
    Bank,
    Cheque,
    Others,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UpdateInvoicePaymentRequest {
    pub id: InvoicePaymentId,
    pub amount: Option<Decimal>,
    pub mode: Option<PaymentMode>,
    pub transaction_ref: Option<Option<String>>,
    pub comment: Option<Option<String>>,
    pub payment_date: Option<OffsetDateTime>,
}
