//! HTTP surface: router assembly, middleware stack and server loop.

use anyhow::Result;
use axum::{
    Extension, Router,
    body::Body,
    http::{HeaderName, HeaderValue, Method, Request},
    middleware,
    routing::get,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{Span, debug_span, info};
use ulid::Ulid;
use utoipa_swagger_ui::{Config, SwaggerUi};

pub mod actor;
pub mod config;
pub mod directory;
pub mod error;
pub mod guard;
pub mod handlers;
mod openapi;
pub mod pagination;

pub use openapi::openapi;

use config::AppConfig;
use handlers::{docs, root};

/// Assemble the full application router.
///
/// Split out from [`new`] so integration tests can drive the router with
/// `tower::ServiceExt::oneshot` without binding a socket.
#[must_use]
pub fn app(config: Arc<AppConfig>) -> Router {
    let (router, openapi) = openapi::api_router().split_for_parts();
    let openapi = Arc::new(openapi);

    // The UI is gated by the same policy as /v1/openapi.json. The document
    // URL is handed to the UI config only; the gated handler serves it.
    let swagger = Router::from(
        SwaggerUi::new("/docs").config(Config::new(["/v1/openapi.json"])),
    )
    .layer(middleware::from_fn_with_state(
        config.clone(),
        docs::guard_docs_ui,
    ));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-dev-role"),
        ])
        // allow requests from any origin
        .allow_origin(Any);

    router
        .merge(swagger)
        .route("/", get(root::root))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(config))
                .layer(Extension(openapi)),
        )
}

/// Bind the listener and serve until interrupted.
///
/// # Errors
/// Returns an error if the server fails to start
pub async fn new(port: u16, config: AppConfig) -> Result<()> {
    let app = app(Arc::new(config));

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let request_id = headers
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, ?headers, request_id)
}
