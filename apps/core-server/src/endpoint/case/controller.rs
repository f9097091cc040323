use axum::extract::{Path, State};
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use lexdesk_core::proto::session::Session;
use one_dto_mapper::convert_inner;
use shared_types::CaseId;

use super::dto::{
    CaseResponseRestDTO, CommentResponseRestDTO, CreateCaseRequestRestDTO,
    CreateCommentRequestRestDTO, CreateHearingRequestRestDTO, GetCaseListQuery,
    GetCaseListResponseRestDTO, GetCommentListQuery, HearingResponseRestDTO,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/case/v1",
    request_body = CreateCaseRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "case_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Create case",
    description = "Opens a case for a client. The case is owned by the client's advocate.",
)]
pub(crate) async fn post_case(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateCaseRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .case_service
        .create_case(request.into(), &session)
        .await;

    CreatedOrErrorResponse::from_result(result, state, "creating case")
}

#[utoipa::path(
    get,
    path = "/api/case/v1",
    responses(OkOrErrorResponse<GetCaseListResponseRestDTO>),
    params(GetCaseListQuery),
    tag = "case_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "List cases",
)]
pub(crate) async fn get_case_list(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetCaseListQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetCaseListResponseRestDTO> {
    let result = state
        .core
        .case_service
        .get_case_list(query.into(), &session)
        .await;

    OkOrErrorResponse::from_result(result, state, "getting case list")
}

#[utoipa::path(
    get,
    path = "/api/case/v1/{id}",
    params(
        ("id" = CaseId, Path, description = "Case id")
    ),
    responses(OkOrErrorResponse<CaseResponseRestDTO>),
    tag = "case_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Retrieve case",
)]
pub(crate) async fn get_case(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<CaseId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<CaseResponseRestDTO> {
    let result = state.core.case_service.get_case(&id, &session).await;

    OkOrErrorResponse::from_result(result, state, "getting case")
}

#[utoipa::path(
    post,
    path = "/api/case/v1/{id}/hearing",
    params(
        ("id" = CaseId, Path, description = "Case id")
    ),
    request_body = CreateHearingRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "case_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Schedule hearing",
)]
pub(crate) async fn post_hearing(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<CaseId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateHearingRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .case_service
        .create_hearing(&id, request.into(), &session)
        .await;

    CreatedOrErrorResponse::from_result(result, state, "creating hearing")
}

#[utoipa::path(
    get,
    path = "/api/case/v1/{id}/hearing",
    params(
        ("id" = CaseId, Path, description = "Case id")
    ),
    responses(OkOrErrorResponse<Vec<HearingResponseRestDTO>>),
    tag = "case_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "List hearings",
    description = "Returns the hearings of a case ordered by hearing date.",
)]
pub(crate) async fn get_hearing_list(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<CaseId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<Vec<HearingResponseRestDTO>> {
    let result: Result<Vec<HearingResponseRestDTO>, _> = state
        .core
        .case_service
        .get_hearing_list(&id, &session)
        .await
        .map(convert_inner);

    OkOrErrorResponse::from_result(result, state, "getting hearing list")
}

#[utoipa::path(
    post,
    path = "/api/case/v1/{id}/comment",
    params(
        ("id" = CaseId, Path, description = "Case id")
    ),
    request_body = CreateCommentRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "case_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Post comment",
    description = "Adds a comment with optional attachment metadata to a case or one of its hearings.",
)]
pub(crate) async fn post_comment(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<CaseId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateCommentRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .case_service
        .create_comment(&id, request.into(), &session)
        .await;

    CreatedOrErrorResponse::from_result(result, state, "creating comment")
}

#[utoipa::path(
    get,
    path = "/api/case/v1/{id}/comment",
    params(
        ("id" = CaseId, Path, description = "Case id"),
        GetCommentListQuery
    ),
    responses(OkOrErrorResponse<Vec<CommentResponseRestDTO>>),
    tag = "case_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "List comments",
)]
pub(crate) async fn get_comment_list(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<CaseId>, ErrorResponseRestDTO>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetCommentListQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<Vec<CommentResponseRestDTO>> {
    let result: Result<Vec<CommentResponseRestDTO>, _> = state
        .core
        .case_service
        .get_comment_list(&id, query.hearing_id, &session)
        .await
        .map(convert_inner);

    OkOrErrorResponse::from_result(result, state, "getting comment list")
}
