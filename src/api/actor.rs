//! Actor resolution from the development role hint.
//!
//! The role comes from the `x-dev-role` header, falling back to the
//! `dev_role` cookie; the header wins when both are present. Nothing here is
//! verified against a credential store. A verified session or token must
//! replace this resolution before the guards mean anything in production.

use axum::http::{header, HeaderMap};

pub const ROLE_HEADER: &str = "x-dev-role";
pub const ROLE_COOKIE: &str = "dev_role";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Anonymous,
}

impl Role {
    /// Normalize an untrusted hint. Matching is case-insensitive after
    /// trimming; anything unrecognized (or absent) is anonymous.
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_lowercase()) {
            Some(value) if value == "admin" => Self::Admin,
            Some(value) if value == "user" => Self::User,
            _ => Self::Anonymous,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Anonymous => "anonymous",
        }
    }
}

/// The resolved identity for the current request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    pub role: Role,
}

impl Actor {
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let hint = headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .or_else(|| cookie_value(headers, ROLE_COOKIE));

        Self {
            role: Role::normalize(hint.as_deref()),
        }
    }
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(header::COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == name {
            return Some(val.to_string());
        }
    }
    None
}
