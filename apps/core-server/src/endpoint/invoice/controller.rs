use axum::extract::{Path, State};
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use lexdesk_core::proto::session::Session;
use shared_types::{InvoiceId, InvoicePaymentId};

use super::dto::{
    CreateInvoiceRequestRestDTO, CreatePaymentRequestRestDTO, GetInvoiceListQuery,
    GetInvoiceListResponseRestDTO, InvoicePaymentListRestDTO, InvoiceResponseRestDTO,
    PaymentResultRestDTO, UpdatePaymentRequestRestDTO,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{
    CreatedOrErrorResponse, EmptyOrErrorResponse, OkOrErrorResponse, PdfOrErrorResponse,
};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/invoice/v1",
    request_body = CreateInvoiceRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "invoice_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Create invoice",
    description = indoc::formatdoc! {"
        Issues an invoice for a client and assigns it the next sequential
        number of the current year. A zero amount invoice is created as paid.
    "},
)]
pub(crate) async fn post_invoice(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateInvoiceRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .invoice_service
        .create_invoice(request.into(), &session)
        .await;

    CreatedOrErrorResponse::from_result(result, state, "creating invoice")
}

#[utoipa::path(
    get,
    path = "/api/invoice/v1",
    responses(OkOrErrorResponse<GetInvoiceListResponseRestDTO>),
    params(GetInvoiceListQuery),
    tag = "invoice_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "List invoices",
)]
pub(crate) async fn get_invoice_list(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetInvoiceListQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetInvoiceListResponseRestDTO> {
    let result = state
        .core
        .invoice_service
        .get_invoice_list(query.into(), &session)
        .await;

    OkOrErrorResponse::from_result(result, state, "getting invoice list")
}

#[utoipa::path(
    get,
    path = "/api/invoice/v1/{id}",
    params(
        ("id" = InvoiceId, Path, description = "Invoice id")
    ),
    responses(OkOrErrorResponse<InvoiceResponseRestDTO>),
    tag = "invoice_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Retrieve invoice",
)]
pub(crate) async fn get_invoice(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<InvoiceId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<InvoiceResponseRestDTO> {
    let result = state.core.invoice_service.get_invoice(&id, &session).await;

    OkOrErrorResponse::from_result(result, state, "getting invoice")
}

#[utoipa::path(
    delete,
    path = "/api/invoice/v1/{id}",
    params(
        ("id" = InvoiceId, Path, description = "Invoice id")
    ),
    responses(EmptyOrErrorResponse),
    tag = "invoice_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Delete invoice",
    description = "Removes an invoice that has no recorded payments.",
)]
pub(crate) async fn delete_invoice(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<InvoiceId>, ErrorResponseRestDTO>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .invoice_service
        .delete_invoice(&id, &session)
        .await;

    EmptyOrErrorResponse::from_result(result, state, "deleting invoice")
}

#[utoipa::path(
    post,
    path = "/api/invoice/v1/{id}/cancel",
    params(
        ("id" = InvoiceId, Path, description = "Invoice id")
    ),
    responses(EmptyOrErrorResponse),
    tag = "invoice_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Cancel invoice",
)]
pub(crate) async fn post_cancel_invoice(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<InvoiceId>, ErrorResponseRestDTO>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .invoice_service
        .cancel_invoice(&id, &session)
        .await;

    EmptyOrErrorResponse::from_result(result, state, "cancelling invoice")
}

#[utoipa::path(
    get,
    path = "/api/invoice/v1/{id}/pdf",
    params(
        ("id" = InvoiceId, Path, description = "Invoice id")
    ),
    responses(PdfOrErrorResponse),
    tag = "invoice_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Render invoice",
    description = "Renders the invoice as a PDF document through the configured renderer.",
)]
pub(crate) async fn get_invoice_pdf(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<InvoiceId>, ErrorResponseRestDTO>,
) -> PdfOrErrorResponse {
    let result = state
        .core
        .invoice_service
        .render_invoice_pdf(&id, &session)
        .await;

    PdfOrErrorResponse::from_result(result, state, "rendering invoice")
}

#[utoipa::path(
    post,
    path = "/api/invoice/v1/{id}/payment",
    params(
        ("id" = InvoiceId, Path, description = "Invoice id")
    ),
    request_body = CreatePaymentRequestRestDTO,
    responses(CreatedOrErrorResponse<PaymentResultRestDTO>),
    tag = "invoice_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Record payment",
    description = indoc::formatdoc! {"
        Records a payment against an invoice and returns the payment with the
        updated totals. Payments exceeding the remaining amount are rejected.
    "},
)]
pub(crate) async fn post_payment(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<InvoiceId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreatePaymentRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<PaymentResultRestDTO> {
    let result = state
        .core
        .invoice_service
        .add_payment(&id, request.into(), &session)
        .await;

    CreatedOrErrorResponse::from_result(result, state, "adding payment")
}

#[utoipa::path(
    get,
    path = "/api/invoice/v1/{id}/payment",
    params(
        ("id" = InvoiceId, Path, description = "Invoice id")
    ),
    responses(OkOrErrorResponse<InvoicePaymentListRestDTO>),
    tag = "invoice_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "List payments",
)]
pub(crate) async fn get_payment_list(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<InvoiceId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<InvoicePaymentListRestDTO> {
    let result = state
        .core
        .invoice_service
        .list_payments(&id, &session)
        .await;

    OkOrErrorResponse::from_result(result, state, "getting payment list")
}

#[utoipa::path(
    patch,
    path = "/api/invoice/v1/{id}/payment/{paymentId}",
    params(
        ("id" = InvoiceId, Path, description = "Invoice id"),
        ("paymentId" = InvoicePaymentId, Path, description = "Payment id")
    ),
    request_body = UpdatePaymentRequestRestDTO,
    responses(OkOrErrorResponse<PaymentResultRestDTO>),
    tag = "invoice_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Update payment",
    description = "Changes a recorded payment. Super-admins only.",
)]
pub(crate) async fn patch_payment(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path((id, payment_id)), _): WithRejection<
        Path<(InvoiceId, InvoicePaymentId)>,
        ErrorResponseRestDTO,
    >,
    WithRejection(Json(request), _): WithRejection<
        Json<UpdatePaymentRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<PaymentResultRestDTO> {
    let result = state
        .core
        .invoice_service
        .update_payment(&id, &payment_id, request.into(), &session)
        .await;

    OkOrErrorResponse::from_result(result, state, "updating payment")
}

#[utoipa::path(
    delete,
    path = "/api/invoice/v1/{id}/payment/{paymentId}",
    params(
        ("id" = InvoiceId, Path, description = "Invoice id"),
        ("paymentId" = InvoicePaymentId, Path, description = "Payment id")
    ),
    responses(OkOrErrorResponse<InvoiceResponseRestDTO>),
    tag = "invoice_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Delete payment",
    description = "Removes a recorded payment and returns the recalculated invoice. Super-admins only.",
)]
pub(crate) async fn delete_payment(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path((id, payment_id)), _): WithRejection<
        Path<(InvoiceId, InvoicePaymentId)>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<InvoiceResponseRestDTO> {
    let result = state
        .core
        .invoice_service
        .delete_payment(&id, &payment_id, &session)
        .await;

    OkOrErrorResponse::from_result(result, state, "deleting payment")
}
