use axum::extract::{Path, State};
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use lexdesk_core::proto::session::Session;
use shared_types::ClientId;

use super::dto::{
    ClientResponseRestDTO, CreateClientRequestRestDTO, GetClientListQuery,
    GetClientListResponseRestDTO,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/client/v1",
    request_body = CreateClientRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "client_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Create client",
)]
pub(crate) async fn post_client(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateClientRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .client_service
        .create_client(request.into(), &session)
        .await;

    CreatedOrErrorResponse::from_result(result, state, "creating client")
}

#[utoipa::path(
    get,
    path = "/api/client/v1",
    responses(OkOrErrorResponse<GetClientListResponseRestDTO>),
    params(GetClientListQuery),
    tag = "client_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "List clients",
    description = "Advocates see their own clients, super-admins see all of them.",
)]
pub(crate) async fn get_client_list(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetClientListQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetClientListResponseRestDTO> {
    let result = state
        .core
        .client_service
        .get_client_list(query.into(), &session)
        .await;

    OkOrErrorResponse::from_result(result, state, "getting client list")
}

#[utoipa::path(
    get,
    path = "/api/client/v1/{id}",
    params(
        ("id" = ClientId, Path, description = "Client id")
    ),
    responses(OkOrErrorResponse<ClientResponseRestDTO>),
    tag = "client_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Retrieve client",
)]
pub(crate) async fn get_client(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<ClientId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<ClientResponseRestDTO> {
    let result = state.core.client_service.get_client(&id, &session).await;

    OkOrErrorResponse::from_result(result, state, "getting client")
}
