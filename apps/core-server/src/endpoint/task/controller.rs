use axum::extract::State;
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use lexdesk_core::proto::session::Session;

use super::dto::{TaskRequestRestDTO, TaskResponseRestDTO};
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/task/v1/run",
    request_body = TaskRequestRestDTO,
    responses(OkOrErrorResponse<TaskResponseRestDTO>),
    tag = "task",
    security(
        ("bearer" = [], "actor" = [])
    ),
    summary = "Run a task",
    description = "Runs one of the configured maintenance tasks on demand. Super-admins only.",
)]
pub(crate) async fn post_task_run(
    state: State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(request), _): WithRejection<
        Json<TaskRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<TaskResponseRestDTO> {
    let result = state
        .core
        .task_service
        .run_task(&request.name, &session)
        .await;

    OkOrErrorResponse::from_result(result, state, "running task")
}
