//! Admin user management endpoints.
//!
//! Flow Overview:
//! 1) Resolve the actor from the development role hint.
//! 2) Enforce the admin guard before touching any data.
//! 3) Page over the seeded directory, or echo a lifecycle contract.
//!
//! Delete and disable are contract-only at this stage: they validate input
//! and return the intended shape without mutating anything.

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::{
    directory::{self, UserRecord, UserStatus},
    error::{ApiError, ErrorCode, ErrorEnvelope},
    guard,
    pagination::{self, PageParams, Pagination},
};

const SORT_VALUES: &[&str] = &["created_at_desc", "created_at_asc"];

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserPage {
    pub data: Vec<UserRecord>,
    pub page: Pagination,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserLifecycle {
    pub id: String,
    pub status: UserStatus,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserLifecycleResponse {
    pub data: UserLifecycle,
}

#[utoipa::path(
    get,
    path = "/v1/admin/users",
    params(PageParams),
    responses(
        (status = 200, description = "One page of the user directory", body = UserPage),
        (status = 400, description = "Unsupported sort value", body = ErrorEnvelope),
        (status = 401, description = "No role hint resolved", body = ErrorEnvelope),
        (status = 403, description = "Actor is not an admin", body = ErrorEnvelope),
    ),
    tag = "admin"
)]
pub async fn list_users(headers: HeaderMap, Query(params): Query<PageParams>) -> impl IntoResponse {
    if let Err(err) = guard::require_admin(&headers) {
        return err.into_response();
    }

    let query = match pagination::parse(&params, SORT_VALUES) {
        Ok(query) => query,
        Err(err) => return err.into_response(),
    };

    let mut users = directory::users();
    // Timestamps are uniform RFC 3339 UTC, so string order is chronological.
    if query.sort.as_deref() == Some("created_at_asc") {
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    } else {
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    let (data, page) = pagination::paginate(&users, &query);

    (StatusCode::OK, Json(UserPage { data, page })).into_response()
}

#[utoipa::path(
    delete,
    path = "/v1/admin/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Deletion contract echo", body = UserLifecycleResponse),
        (status = 400, description = "Missing user id", body = ErrorEnvelope),
        (status = 401, description = "No role hint resolved", body = ErrorEnvelope),
        (status = 403, description = "Actor is not an admin", body = ErrorEnvelope),
    ),
    tag = "admin"
)]
pub async fn delete_user(headers: HeaderMap, Path(id): Path<String>) -> impl IntoResponse {
    if let Err(err) = guard::require_admin(&headers) {
        return err.into_response();
    }

    if id.trim().is_empty() {
        return ApiError::new(ErrorCode::ValidationError, "User id is required").into_response();
    }

    // Foundation stage: contract-only endpoint, no mutation happens.
    let body = UserLifecycleResponse {
        data: UserLifecycle {
            id,
            status: UserStatus::Deleted,
        },
    };

    (StatusCode::OK, Json(body)).into_response()
}

#[utoipa::path(
    post,
    path = "/v1/admin/users/{id}/disable",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Disable contract echo", body = UserLifecycleResponse),
        (status = 400, description = "Missing user id", body = ErrorEnvelope),
        (status = 401, description = "No role hint resolved", body = ErrorEnvelope),
        (status = 403, description = "Actor is not an admin", body = ErrorEnvelope),
    ),
    tag = "admin"
)]
pub async fn disable_user(headers: HeaderMap, Path(id): Path<String>) -> impl IntoResponse {
    if let Err(err) = guard::require_admin(&headers) {
        return err.into_response();
    }

    if id.trim().is_empty() {
        return ApiError::new(ErrorCode::ValidationError, "User id is required").into_response();
    }

    let body = UserLifecycleResponse {
        data: UserLifecycle {
            id,
            status: UserStatus::Disabled,
        },
    };

    (StatusCode::OK, Json(body)).into_response()
}
