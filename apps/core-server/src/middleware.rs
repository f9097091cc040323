use std::str::FromStr;
use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use sentry::{Hub, SentryFutureExt};
use shared_types::AdminId;

use crate::dto::response::ErrorResponse;
use crate::metrics;
use crate::router::AppState;

pub(crate) const ACTOR_HEADER: &str = "x-actor-id";

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
    pub actor_id: Option<&'a str>,
}

// create new sentry hub per request
pub async fn sentry_layer(request: Request<Body>, next: Next) -> Response {
    async {
        let HttpRequestContext {
            method,
            path,
            request_id,
            actor_id,
        } = get_http_request_context(&request);

        let method_path = format!("{method} {path}");

        sentry::configure_scope(|scope| {
            scope.set_tag("http-request", method_path);

            if let Some(request_id) = request_id {
                scope.set_tag("request-id", request_id);
            }

            if let Some(actor_id) = actor_id {
                scope.set_tag("actor-id", actor_id);
            }
        });

        next.run(request).await
    }
    // make sure that the future is run in the new hub
    .bind_hub(Hub::new_from_top(Hub::main()))
    .await
}

pub async fn metrics_counter(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    metrics::track_request(&method, response.status(), start.elapsed().as_secs_f64());
    response
}

/// Authenticates the back-office frontend by its bearer token and resolves the acting admin
/// from the actor header into a [`lexdesk_core::proto::session::Session`] extension
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let headers = request.headers();

    let token = headers
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "));

    if !token.is_some_and(|token| !token.is_empty() && token == state.config.auth_token) {
        tracing::warn!("Could not authorize request. Incorrect authorization method or token.");
        return ErrorResponse::Unauthorized.into_response();
    }

    let Some(actor_id) = headers
        .get(ACTOR_HEADER)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| AdminId::from_str(value).ok())
    else {
        tracing::warn!("Missing or malformed actor header");
        return ErrorResponse::Unauthorized.into_response();
    };

    match state.core.admin_service.get_session(&actor_id).await {
        Ok(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        Err(error) => {
            ErrorResponse::from_service_error(error, state.config.hide_error_response_cause)
                .into_response()
        }
    }
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext<'_> {
    let headers = request.headers();
    let request_id = headers
        .get("x-request-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    let actor_id = headers
        .get(ACTOR_HEADER)
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id,
        actor_id,
    }
}
