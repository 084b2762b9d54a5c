//! Cursor pagination over fixed in-memory collections.
//!
//! Cursors are base64url-encoded decimal offsets: reversible on purpose, not
//! tamper-proof. A crafted cursor can seek anywhere; malformed input falls
//! back to offset 0. Limits are clamped to `1..=100` with a default of 20 on
//! missing or unparseable input.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::error::{ApiError, ErrorCode};

pub const DEFAULT_LIMIT: usize = 20;
pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 100;

/// Raw pagination query parameters.
///
/// `limit` stays a string so an unparseable value degrades to the default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page size, clamped to 1..=100 (default 20).
    pub limit: Option<String>,
    /// Opaque cursor returned by a previous page.
    pub cursor: Option<String>,
    /// Endpoint-specific sort key.
    pub sort: Option<String>,
}

/// Validated pagination request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: usize,
    pub offset: usize,
    pub sort: Option<String>,
}

/// Page metadata attached to list responses.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub next_cursor: Option<String>,
    pub has_more: bool,
    pub limit: usize,
}

/// Validate raw query parameters against an endpoint's sort whitelist.
///
/// Sort validation happens before any cursor decoding or slicing; a sort
/// value outside the whitelist rejects the whole request.
///
/// # Errors
/// Returns `VALIDATION_ERROR` (400) for an unsupported sort value.
pub fn parse(params: &PageParams, sort_whitelist: &[&str]) -> Result<PageQuery, ApiError> {
    if let Some(sort) = params.sort.as_deref() {
        if !sort_whitelist.contains(&sort) {
            return Err(ApiError::new(
                ErrorCode::ValidationError,
                format!("Unsupported sort value: {sort}"),
            ));
        }
    }

    let limit = params
        .limit
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .map_or(DEFAULT_LIMIT, clamp_limit);

    Ok(PageQuery {
        limit,
        offset: decode_cursor(params.cursor.as_deref()),
        sort: params.sort.clone(),
    })
}

/// Encode a collection offset into an opaque cursor.
#[must_use]
pub fn encode_cursor(offset: usize) -> String {
    Base64UrlUnpadded::encode_string(offset.to_string().as_bytes())
}

/// Decode a cursor back to an offset; malformed or negative input yields 0.
/// Decoding is strictly unpadded: a padded cursor like `MQ==` counts as
/// malformed, since the server only ever issues unpadded ones.
#[must_use]
pub fn decode_cursor(cursor: Option<&str>) -> usize {
    let Some(cursor) = cursor else {
        return 0;
    };
    let Ok(bytes) = Base64UrlUnpadded::decode_vec(cursor) else {
        return 0;
    };
    let Ok(text) = String::from_utf8(bytes) else {
        return 0;
    };

    text.trim()
        .parse::<i64>()
        .ok()
        .and_then(|offset| usize::try_from(offset).ok())
        .unwrap_or(0)
}

/// Slice one page out of a sorted collection.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], query: &PageQuery) -> (Vec<T>, Pagination) {
    let start = query.offset.min(items.len());
    let end = query.offset.saturating_add(query.limit).min(items.len());
    let has_more = query.offset.saturating_add(query.limit) < items.len();

    let data = items[start..end].to_vec();
    let next_cursor = if has_more { Some(encode_cursor(end)) } else { None };

    (
        data,
        Pagination {
            next_cursor,
            has_more,
            limit: query.limit,
        },
    )
}

fn clamp_limit(requested: i64) -> usize {
    if requested < MIN_LIMIT as i64 {
        MIN_LIMIT
    } else if requested > MAX_LIMIT as i64 {
        MAX_LIMIT
    } else {
        usize::try_from(requested).unwrap_or(DEFAULT_LIMIT)
    }
}
