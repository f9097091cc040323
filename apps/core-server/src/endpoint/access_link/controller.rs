use axum::extract::{Path, State};
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use lexdesk_core::proto::session::Session;
use secrecy::SecretString;
use shared_types::{AccessLinkId, CaseId};

use super::dto::{
    AccessLinkResponseRestDTO, CreateAccessLinkRequestRestDTO, CreateAccessLinkResponseRestDTO,
    SubmissionReceiptRestDTO, SubmissionRequestRestDTO, VerifyAccessLinkRequestRestDTO,
    VerifyAccessLinkResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, OkOrErrorResponse};
use crate::extractor::CapabilityToken;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/access-link/v1",
    request_body = CreateAccessLinkRequestRestDTO,
    responses(CreatedOrErrorResponse<CreateAccessLinkResponseRestDTO>),
    tag = "access_link_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Create access link",
    description = indoc::formatdoc! {"
        Creates a PIN-protected link through which a counterparty can submit
        material for a case or hearing. The PIN is returned only in this
        response and is also sent to the counterparty contact.
    "},
)]
pub(crate) async fn post_access_link(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateAccessLinkRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<CreateAccessLinkResponseRestDTO> {
    let result = state
        .core
        .access_link_service
        .create_access_link(request.into(), &session)
        .await;

    CreatedOrErrorResponse::from_result(result, state, "creating access link")
}

#[utoipa::path(
    get,
    path = "/api/access-link/v1/{id}",
    params(
        ("id" = AccessLinkId, Path, description = "Access link id")
    ),
    responses(OkOrErrorResponse<AccessLinkResponseRestDTO>),
    tag = "access_link_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Retrieve access link",
    description = "Returns the link, expiring it first if its deadline has passed.",
)]
pub(crate) async fn get_access_link(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<AccessLinkId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<AccessLinkResponseRestDTO> {
    let result = state
        .core
        .access_link_service
        .get_access_link(&id, &session)
        .await;

    OkOrErrorResponse::from_result(result, state, "getting access link")
}

#[utoipa::path(
    get,
    path = "/api/case/v1/{id}/access-link",
    params(
        ("id" = CaseId, Path, description = "Case id")
    ),
    responses(OkOrErrorResponse<Vec<AccessLinkResponseRestDTO>>),
    tag = "access_link_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "List access links of a case",
)]
pub(crate) async fn get_case_access_link_list(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<CaseId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<Vec<AccessLinkResponseRestDTO>> {
    let result: Result<Vec<AccessLinkResponseRestDTO>, _> = state
        .core
        .access_link_service
        .get_access_link_list(&id, &session)
        .await
        .map(one_dto_mapper::convert_inner);

    OkOrErrorResponse::from_result(result, state, "getting access link list")
}

#[utoipa::path(
    post,
    path = "/public/access-link/v1/{id}/verify",
    params(
        ("id" = AccessLinkId, Path, description = "Access link id")
    ),
    request_body = VerifyAccessLinkRequestRestDTO,
    responses(OkOrErrorResponse<VerifyAccessLinkResponseRestDTO>),
    tag = "public",
    summary = "Verify access link PIN",
    description = indoc::formatdoc! {"
        Checks the PIN of an active link and returns a short-lived capability
        token. The token authorizes exactly one submission through the link.
    "},
)]
pub(crate) async fn post_verify_access_link(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<AccessLinkId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<VerifyAccessLinkRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<VerifyAccessLinkResponseRestDTO> {
    let result = state
        .core
        .access_link_service
        .verify(&id, SecretString::from(request.pin))
        .await;

    OkOrErrorResponse::from_result(result, state, "verifying access link")
}

#[utoipa::path(
    post,
    path = "/public/access-link/v1/submit",
    request_body = SubmissionRequestRestDTO,
    responses(CreatedOrErrorResponse<SubmissionReceiptRestDTO>),
    tag = "public",
    security(
        ("bearer" = [])
    ),
    summary = "Submit through access link",
    description = "Records the counterparty's text and attachment metadata and closes the link.",
)]
pub(crate) async fn post_submission(
    state: State<AppState>,
    CapabilityToken(token): CapabilityToken,
    WithRejection(Json(request), _): WithRejection<
        Json<SubmissionRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<SubmissionReceiptRestDTO> {
    let result = state
        .core
        .access_link_service
        .consume(&token, request.into())
        .await;

    CreatedOrErrorResponse::from_result(result, state, "submitting through access link")
}
