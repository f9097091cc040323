use lexdesk_core::service::invoice::dto::{
    CreateInvoiceRequestDTO, CreatePaymentRequestDTO, GetInvoiceListQueryDTO,
    InvoicePaymentListDTO, InvoicePaymentResponseDTO, InvoiceResponseDTO, InvoiceSummaryDTO,
    PaymentResultDTO, UpdatePaymentRequestDTO,
};
use one_dto_mapper::{From, Into, convert_inner};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared_types::{AdminId, ClientId, InvoiceId, InvoicePaymentId};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, default_page_size, page_size};
use crate::dto::serialize::iso_date;

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(CreateInvoiceRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateInvoiceRequestRestDTO {
    pub client_id: ClientId,
    #[schema(value_type = String, example = "1000.00")]
    pub amount: Decimal,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, example = "2026-04-30")]
    pub due_date: Date,
    pub comments: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[from(lexdesk_core::model::invoice::InvoiceStatus)]
#[into(lexdesk_core::model::invoice::InvoiceStatus)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum InvoiceStatusRestEnum {
    Unpaid,
    PartiallyPaid,
    Paid,
    Cancelled,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, ToSchema, From)]
#[from(lexdesk_core::model::invoice_payment::PaymentMode)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum PaymentModeRestEnum {
    Cash,
    Upi,
    Bank,
    Cheque,
    Others,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(InvoiceResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvoiceResponseRestDTO {
    pub id: InvoiceId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub created_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-02T10:00:00Z")]
    pub last_modified: OffsetDateTime,
    #[schema(example = "INV-2026-00001")]
    pub number: String,
    pub client_id: ClientId,
    pub owner_id: AdminId,
    #[schema(value_type = String, example = "1000.00")]
    pub amount: Decimal,
    #[schema(value_type = String, example = "400.00")]
    pub paid_amount: Decimal,
    #[schema(value_type = String, example = "600.00")]
    pub remaining_amount: Decimal,
    pub status: InvoiceStatusRestEnum,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, example = "2026-04-30")]
    pub due_date: Date,
    pub comments: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>, example = "2026-05-07T09:00:00Z")]
    pub last_reminder_sent_at: Option<OffsetDateTime>,
    pub reminder_count: u32,
}

pub(crate) type GetInvoiceListResponseRestDTO = GetListResponseRestDTO<InvoiceResponseRestDTO>;

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetInvoiceListQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    pub status: Option<InvoiceStatusRestEnum>,
    pub client_id: Option<ClientId>,
}

impl From<GetInvoiceListQuery> for GetInvoiceListQueryDTO {
    fn from(value: GetInvoiceListQuery) -> Self {
        Self {
            page: value.page,
            page_size: page_size(value.page_size),
            status: convert_inner(value.status),
            client_id: value.client_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[into(CreatePaymentRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePaymentRequestRestDTO {
    #[schema(value_type = String, example = "400.00")]
    pub amount: Decimal,
    /// One of `cash`, `upi`, `bank`, `cheque`, `others`, any letter case
    #[schema(example = "upi")]
    pub mode: String,
    pub transaction_ref: Option<String>,
    pub comment: Option<String>,
    /// Defaults to the time of recording
    #[serde(default, with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>, example = "2026-03-05T12:00:00Z")]
    pub payment_date: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema, Into)]
#[into(UpdatePaymentRequestDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePaymentRequestRestDTO {
    #[schema(value_type = Option<String>, example = "450.00")]
    pub amount: Option<Decimal>,
    pub mode: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub transaction_ref: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub comment: Option<Option<String>>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>)]
    pub payment_date: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(InvoicePaymentResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvoicePaymentResponseRestDTO {
    pub id: InvoicePaymentId,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-05T12:00:00Z")]
    pub created_date: OffsetDateTime,
    pub invoice_id: InvoiceId,
    #[schema(value_type = String, example = "400.00")]
    pub amount: Decimal,
    pub mode: PaymentModeRestEnum,
    pub transaction_ref: Option<String>,
    pub comment: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, example = "2026-03-05T12:00:00Z")]
    pub payment_date: OffsetDateTime,
    pub recorded_by: AdminId,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(InvoiceSummaryDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvoiceSummaryRestDTO {
    #[schema(value_type = String, example = "1000.00")]
    pub total: Decimal,
    #[schema(value_type = String, example = "400.00")]
    pub paid: Decimal,
    #[schema(value_type = String, example = "600.00")]
    pub remaining: Decimal,
    pub status: InvoiceStatusRestEnum,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(PaymentResultDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentResultRestDTO {
    pub payment: InvoicePaymentResponseRestDTO,
    pub invoice: InvoiceSummaryRestDTO,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(InvoicePaymentListDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvoicePaymentListRestDTO {
    #[from(with_fn = convert_inner)]
    pub payments: Vec<InvoicePaymentResponseRestDTO>,
    pub summary: InvoiceSummaryRestDTO,
}
