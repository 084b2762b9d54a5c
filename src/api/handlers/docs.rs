//! Gated access to the OpenAPI document and Swagger UI.
//!
//! Both surfaces share one policy, evaluated per request. Denials that hide
//! existence return a bare 404 with no envelope so the gated routes cannot be
//! told apart from unknown paths.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
    Extension,
};
use tracing::debug;
use utoipa::openapi::OpenApi;

use super::super::{
    actor::Actor,
    config::AppConfig,
    error::{ApiError, ErrorCode, ErrorEnvelope},
    guard,
};

fn deny(status: StatusCode, reason: &'static str) -> Response {
    match status {
        StatusCode::UNAUTHORIZED => {
            ApiError::new(ErrorCode::AuthRequired, reason).into_response()
        }
        StatusCode::FORBIDDEN => ApiError::new(ErrorCode::Forbidden, reason).into_response(),
        // Existence-hiding denial, no envelope.
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/v1/openapi.json",
    responses(
        (status = 200, description = "The OpenAPI document", body = serde_json::Value),
        (status = 401, description = "No role hint resolved", body = ErrorEnvelope),
        (status = 403, description = "Actor is not an admin", body = ErrorEnvelope),
        (status = 404, description = "Docs disabled or hidden in production"),
    ),
    tag = "docs"
)]
pub async fn openapi_json(
    Extension(config): Extension<Arc<AppConfig>>,
    Extension(doc): Extension<Arc<OpenApi>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let actor = Actor::from_headers(&headers);
    let access = guard::evaluate_docs_access(actor.role, &config);

    if !access.allowed {
        debug!("OpenAPI document denied: {}", access.reason);
        return deny(access.status, access.reason);
    }

    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-store")],
        Json(doc.as_ref().clone()),
    )
        .into_response()
}

/// Middleware in front of the Swagger UI routes, same policy as the document.
pub async fn guard_docs_ui(
    State(config): State<Arc<AppConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let actor = Actor::from_headers(request.headers());
    let access = guard::evaluate_docs_access(actor.role, &config);

    if !access.allowed {
        debug!("Swagger UI denied: {}", access.reason);
        return deny(access.status, access.reason);
    }

    next.run(request).await
}
