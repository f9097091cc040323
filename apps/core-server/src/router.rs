use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use lexdesk_core::config::core_config::AppConfig;
use lexdesk_core::{LexdeskCore, LexdeskCoreBuilder};
use secrecy::{ExposeSecret, SecretSlice};
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::response::ErrorResponse;
use crate::endpoint::{access_link, admin, case, client, history, invoice, misc, task};
use crate::middleware::get_http_request_context;
use crate::scheduler::spawn_scheduled_tasks;
use crate::{ServerConfig, build_info, dto, endpoint};

pub(crate) struct InternalAppState {
    pub core: LexdeskCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>, db_conn: DbConn) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set TCP listener non-blocking");

    let core = build_core(&config, db_conn);

    if let Some(bootstrap) = &config.app.bootstrap_admin {
        core.admin_service
            .bootstrap_super_admin(&bootstrap.name, &bootstrap.email)
            .await
            .expect("Failed to bootstrap initial super-admin");
    }

    if config.app.enable_task_scheduler {
        spawn_scheduled_tasks(&core.task_service);
    }

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn build_core(config: &AppConfig<ServerConfig>, db_conn: DbConn) -> LexdeskCore {
    let capability_token_key = config
        .app
        .capability_token_key
        .as_ref()
        .expect("capabilityTokenKey must be configured");

    LexdeskCoreBuilder::new(config.core.clone())
        .with_data_repository(Arc::new(DataLayer::build(db_conn)))
        .with_capability_token_key(SecretSlice::from(
            capability_token_key.expose_secret().as_bytes().to_vec(),
        ))
        .build()
        .expect("Failed to parse config")
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let protected = Router::new()
        .route(
            "/api/admin/v1",
            get(admin::controller::get_admin_list).post(admin::controller::post_admin),
        )
        .route("/api/admin/v1/{id}", get(admin::controller::get_admin))
        .route(
            "/api/client/v1",
            get(client::controller::get_client_list).post(client::controller::post_client),
        )
        .route("/api/client/v1/{id}", get(client::controller::get_client))
        .route(
            "/api/case/v1",
            get(case::controller::get_case_list).post(case::controller::post_case),
        )
        .route("/api/case/v1/{id}", get(case::controller::get_case))
        .route(
            "/api/case/v1/{id}/hearing",
            get(case::controller::get_hearing_list).post(case::controller::post_hearing),
        )
        .route(
            "/api/case/v1/{id}/comment",
            get(case::controller::get_comment_list).post(case::controller::post_comment),
        )
        .route(
            "/api/case/v1/{id}/access-link",
            get(access_link::controller::get_case_access_link_list),
        )
        .route(
            "/api/access-link/v1",
            post(access_link::controller::post_access_link),
        )
        .route(
            "/api/access-link/v1/{id}",
            get(access_link::controller::get_access_link),
        )
        .route(
            "/api/invoice/v1",
            get(invoice::controller::get_invoice_list).post(invoice::controller::post_invoice),
        )
        .route(
            "/api/invoice/v1/{id}",
            get(invoice::controller::get_invoice).delete(invoice::controller::delete_invoice),
        )
        .route(
            "/api/invoice/v1/{id}/cancel",
            post(invoice::controller::post_cancel_invoice),
        )
        .route(
            "/api/invoice/v1/{id}/pdf",
            get(invoice::controller::get_invoice_pdf),
        )
        .route(
            "/api/invoice/v1/{id}/payment",
            get(invoice::controller::get_payment_list).post(invoice::controller::post_payment),
        )
        .route(
            "/api/invoice/v1/{id}/payment/{paymentId}",
            patch(invoice::controller::patch_payment)
                .delete(invoice::controller::delete_payment),
        )
        .route("/api/task/v1/run", post(task::controller::post_task_run))
        .route(
            "/api/history/v1",
            get(history::controller::get_history_list),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::authenticate,
        ));

    let public = Router::new()
        .route(
            "/public/access-link/v1/{id}/verify",
            post(access_link::controller::post_verify_access_link),
        )
        .route(
            "/public/access-link/v1/submit",
            post(access_link::controller::post_submission),
        );

    let technical_endpoints = Router::new()
        .route("/build-info", get(misc::get_build_info))
        .route("/health", get(misc::health_check))
        .route("/metrics", get(misc::get_metrics));

    let mut router = Router::new()
        .merge(protected)
        .merge(public)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "lexdesk",
                        RequestId = context.request_id,
                        ActorId = context.actor_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {})
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .layer(middleware::from_fn(crate::middleware::sentry_layer));

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::admin::controller::post_admin,
            endpoint::admin::controller::get_admin_list,
            endpoint::admin::controller::get_admin,

            endpoint::client::controller::post_client,
            endpoint::client::controller::get_client_list,
            endpoint::client::controller::get_client,

            endpoint::case::controller::post_case,
            endpoint::case::controller::get_case_list,
            endpoint::case::controller::get_case,
            endpoint::case::controller::post_hearing,
            endpoint::case::controller::get_hearing_list,
            endpoint::case::controller::post_comment,
            endpoint::case::controller::get_comment_list,

            endpoint::access_link::controller::post_access_link,
            endpoint::access_link::controller::get_access_link,
            endpoint::access_link::controller::get_case_access_link_list,
            endpoint::access_link::controller::post_verify_access_link,
            endpoint::access_link::controller::post_submission,

            endpoint::invoice::controller::post_invoice,
            endpoint::invoice::controller::get_invoice_list,
            endpoint::invoice::controller::get_invoice,
            endpoint::invoice::controller::delete_invoice,
            endpoint::invoice::controller::post_cancel_invoice,
            endpoint::invoice::controller::get_invoice_pdf,
            endpoint::invoice::controller::post_payment,
            endpoint::invoice::controller::get_payment_list,
            endpoint::invoice::controller::patch_payment,
            endpoint::invoice::controller::delete_payment,

            endpoint::task::controller::post_task_run,

            endpoint::history::controller::get_history_list,

            endpoint::misc::get_build_info,
            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                dto::common::EntityResponseRestDTO,
                dto::error::ErrorResponseRestDTO,
                dto::error::ErrorCode,
                dto::error::Cause,

                shared_types::AccessLinkId,
                shared_types::AdminId,
                shared_types::AttachmentId,
                shared_types::CaseId,
                shared_types::ClientId,
                shared_types::CommentId,
                shared_types::EntityId,
                shared_types::HearingId,
                shared_types::HistoryId,
                shared_types::InvoiceId,
                shared_types::InvoicePaymentId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "admin_management", description = "Admin accounts"),
            (name = "client_management", description = "Client management"),
            (name = "case_management", description = "Cases, hearings and comments"),
            (name = "access_link_management", description = "Counterparty access links"),
            (name = "invoice_management", description = "Invoices and payments"),
            (name = "task", description = "Maintenance tasks"),
            (name = "history_management", description = "Audit history"),
            (name = "public", description = "Counterparty endpoints"),
        ),
        modifiers(&SecurityAddon)
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            let Some(components) = openapi.components.as_mut() else {
                return;
            };
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Back-office token or counterparty capability token"))
                        .build(),
                ),
            );
            components.add_security_scheme(
                "actor",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "X-Actor-Id",
                    "Id of the acting admin",
                ))),
            );
        }
    }

    let mut docs = ApiDoc::openapi();
    docs.info.version = app_version();

    docs
}

fn app_version() -> String {
    format!("{}-{}", build_info::PKG_VERSION, build_info::SHORT_COMMIT)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
