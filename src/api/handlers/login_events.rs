//! Admin login-event history for one user.
//!
//! Unknown user ids answer an empty page rather than 404; the endpoint is a
//! paging contract over seeded data, not a user lookup.

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::{
    directory::{self, LoginEvent},
    error::{ApiError, ErrorCode, ErrorEnvelope},
    guard,
    pagination::{self, PageParams, Pagination},
};

const SORT_VALUES: &[&str] = &["occurred_at_desc", "occurred_at_asc"];

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginEventPage {
    pub data: Vec<LoginEvent>,
    pub page: Pagination,
}

#[utoipa::path(
    get,
    path = "/v1/admin/users/{id}/login-events",
    params(
        ("id" = String, Path, description = "User id"),
        PageParams,
    ),
    responses(
        (status = 200, description = "One page of the user's login events", body = LoginEventPage),
        (status = 400, description = "Unsupported sort value or missing user id", body = ErrorEnvelope),
        (status = 401, description = "No role hint resolved", body = ErrorEnvelope),
        (status = 403, description = "Actor is not an admin", body = ErrorEnvelope),
    ),
    tag = "admin"
)]
pub async fn list_login_events(
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    if let Err(err) = guard::require_admin(&headers) {
        return err.into_response();
    }

    if id.trim().is_empty() {
        return ApiError::new(ErrorCode::ValidationError, "User id is required").into_response();
    }

    let query = match pagination::parse(&params, SORT_VALUES) {
        Ok(query) => query,
        Err(err) => return err.into_response(),
    };

    let mut events = directory::login_events_for(&id);
    // Timestamps are uniform RFC 3339 UTC, so string order is chronological.
    if query.sort.as_deref() == Some("occurred_at_asc") {
        events.sort_by(|a, b| a.occurred_at.cmp(&b.occurred_at));
    } else {
        events.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    }

    let (data, page) = pagination::paginate(&events, &query);

    (StatusCode::OK, Json(LoginEventPage { data, page })).into_response()
}
