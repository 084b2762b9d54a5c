//! Access guards: admin-only routes and docs visibility.
//!
//! Guards always run before any data access in a handler. The docs policy is
//! ordered so that existence-hiding 404s take priority over 401/403; disabled
//! docs must be indistinguishable from a route that does not exist.

use axum::http::{HeaderMap, StatusCode};

use super::{
    actor::{Actor, Role},
    config::{AppConfig, Environment},
    error::{ApiError, ErrorCode},
};

/// Resolve the actor and require the admin role.
///
/// # Errors
/// Returns `AUTH_REQUIRED` (401) for anonymous actors and `FORBIDDEN` (403)
/// for any other non-admin role.
pub fn require_admin(headers: &HeaderMap) -> Result<Actor, ApiError> {
    let actor = Actor::from_headers(headers);

    match actor.role {
        Role::Admin => Ok(actor),
        Role::Anonymous => Err(ApiError::new(
            ErrorCode::AuthRequired,
            "Authentication is required",
        )),
        Role::User => Err(ApiError::new(ErrorCode::Forbidden, "Admin role is required")),
    }
}

/// Outcome of the docs-visibility policy for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocsAccess {
    pub allowed: bool,
    pub status: StatusCode,
    pub reason: &'static str,
}

#[must_use]
pub fn evaluate_docs_access(role: Role, config: &AppConfig) -> DocsAccess {
    if !config.docs.enabled {
        return DocsAccess {
            allowed: false,
            status: StatusCode::NOT_FOUND,
            reason: "API docs are disabled",
        };
    }

    if config.environment == Environment::Production && !config.docs.allow_in_prod {
        return DocsAccess {
            allowed: false,
            status: StatusCode::NOT_FOUND,
            reason: "API docs are not allowed in production",
        };
    }

    if config.docs.require_admin && role != Role::Admin {
        if role == Role::Anonymous {
            return DocsAccess {
                allowed: false,
                status: StatusCode::UNAUTHORIZED,
                reason: "Authentication is required",
            };
        }

        return DocsAccess {
            allowed: false,
            status: StatusCode::FORBIDDEN,
            reason: "Admin role is required",
        };
    }

    DocsAccess {
        allowed: true,
        status: StatusCode::OK,
        reason: "Allowed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::{DocsPolicy, OtpPolicy};
    use axum::http::HeaderValue;

    fn config(environment: Environment, docs: DocsPolicy) -> AppConfig {
        AppConfig {
            environment,
            docs,
            otp: OtpPolicy::default(),
        }
    }

    fn docs(enabled: bool, require_admin: bool, allow_in_prod: bool) -> DocsPolicy {
        DocsPolicy {
            enabled,
            require_admin,
            allow_in_prod,
        }
    }

    #[test]
    fn admin_guard_allows_admin() {
        let mut headers = HeaderMap::new();
        headers.insert("x-dev-role", HeaderValue::from_static("admin"));
        let actor = require_admin(&headers).expect("admin should pass");
        assert_eq!(actor.role, Role::Admin);
    }

    #[test]
    fn admin_guard_requires_auth_for_anonymous() {
        let err = require_admin(&HeaderMap::new()).expect_err("anonymous should fail");
        assert_eq!(err.code, ErrorCode::AuthRequired);
        assert_eq!(err.code.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn admin_guard_forbids_plain_users() {
        let mut headers = HeaderMap::new();
        headers.insert("x-dev-role", HeaderValue::from_static("user"));
        let err = require_admin(&headers).expect_err("user should fail");
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.code.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn disabled_docs_hide_existence_even_for_admin() {
        let config = config(Environment::Development, docs(false, true, false));
        for role in [Role::Admin, Role::User, Role::Anonymous] {
            let access = evaluate_docs_access(role, &config);
            assert!(!access.allowed);
            assert_eq!(access.status, StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn production_hides_docs_unless_allowed() {
        let config = config(Environment::Production, docs(true, true, false));
        for role in [Role::Admin, Role::User, Role::Anonymous] {
            let access = evaluate_docs_access(role, &config);
            assert_eq!(access.status, StatusCode::NOT_FOUND);
        }

        let config = self::config(Environment::Production, docs(true, true, true));
        let access = evaluate_docs_access(Role::Admin, &config);
        assert!(access.allowed);
    }

    #[test]
    fn admin_requirement_distinguishes_anonymous_and_user() {
        let config = config(Environment::Development, docs(true, true, false));

        let access = evaluate_docs_access(Role::Anonymous, &config);
        assert_eq!(access.status, StatusCode::UNAUTHORIZED);

        let access = evaluate_docs_access(Role::User, &config);
        assert_eq!(access.status, StatusCode::FORBIDDEN);

        let access = evaluate_docs_access(Role::Admin, &config);
        assert!(access.allowed);
        assert_eq!(access.status, StatusCode::OK);
    }

    #[test]
    fn docs_open_to_everyone_when_admin_not_required() {
        let config = config(Environment::Test, docs(true, false, false));
        for role in [Role::Admin, Role::User, Role::Anonymous] {
            let access = evaluate_docs_access(role, &config);
            assert!(access.allowed, "role {role:?} should be allowed");
        }
    }
}
