use axum::Extension;
use axum::extract::State;
use axum_extra::extract::WithRejection;
use lexdesk_core::proto::session::Session;

use super::dto::{GetHistoryListQuery, GetHistoryListResponseRestDTO};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::extractor::Qs;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/api/history/v1",
    responses(OkOrErrorResponse<GetHistoryListResponseRestDTO>),
    params(GetHistoryListQuery),
    tag = "history_management",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "List history events",
    description = "Returns audit events newest first, optionally for a single entity. Super-admins only.",
)]
pub(crate) async fn get_history_list(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Qs(query), _): WithRejection<Qs<GetHistoryListQuery>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<GetHistoryListResponseRestDTO> {
    let result = state
        .core
        .history_service
        .get_history_list(query.into(), &session)
        .await;

    OkOrErrorResponse::from_result(result, state, "getting history list")
}
