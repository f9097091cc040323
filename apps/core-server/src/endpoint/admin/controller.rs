use axum::extract::{Path, State};
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use lexdesk_core::proto::session::Session;
use shared_types::AdminId;

use super::dto::{
    AdminResponseRestDTO, CreateAdminRequestRestDTO, GetAdminListQuery,
    GetAdminListResponseRestDTO,
};
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{CreatedOrErrorResponse, OkOrErrorResponse};
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/admin/v1",
    request_body = CreateAdminRequestRestDTO,
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    tag = "admin_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Create admin",
    description = "Creates a super-admin or advocate account. Super-admins only.",
)]
pub(crate) async fn post_admin(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(request), _): WithRejection<
        Json<CreateAdminRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let result = state
        .core
        .admin_service
        .create_admin(request.into(), &session)
        .await;

    CreatedOrErrorResponse::from_result(result, state, "creating admin")
}

#[utoipa::path(
    get,
    path = "/api/admin/v1",
    responses(OkOrErrorResponse<GetAdminListResponseRestDTO>),
    params(GetAdminListQuery),
    tag = "admin_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "List admins",
    description = "Returns a page of admin accounts ordered by name. Super-admins only.",
)]
pub(crate) async fn get_admin_list(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetAdminListQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetAdminListResponseRestDTO> {
    let result = state
        .core
        .admin_service
        .get_admin_list(query.into(), &session)
        .await;

    OkOrErrorResponse::from_result(result, state, "getting admin list")
}

#[utoipa::path(
    get,
    path = "/api/admin/v1/{id}",
    params(
        ("id" = AdminId, Path, description = "Admin id")
    ),
    responses(OkOrErrorResponse<AdminResponseRestDTO>),
    tag = "admin_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Retrieve admin",
    description = "Returns an admin account. Advocates can only read their own account.",
)]
pub(crate) async fn get_admin(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Path(id), _): WithRejection<Path<AdminId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<AdminResponseRestDTO> {
    let result = state.core.admin_service.get_admin(&id, &session).await;

    OkOrErrorResponse::from_result(result, state, "getting admin")
}
