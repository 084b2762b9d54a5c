//! # Gardisto (Auth Platform Foundation API)
//!
//! `gardisto` is the foundation stage of an authentication/admin platform:
//! an HTTP JSON API whose handlers return fixed-shape stub payloads while the
//! surrounding contracts are nailed down.
//!
//! ## Actors and guards
//!
//! Each request resolves an actor role (`admin`, `user`, `anonymous`) from a
//! development hint: the `x-dev-role` header, falling back to the `dev_role`
//! cookie. The hint is **not verified** against any credential store; it is a
//! development convenience that must be replaced by session/token-derived
//! identity before any real deployment.
//!
//! Admin-namespaced routes are gated by an admin guard (401 for anonymous,
//! 403 for non-admin). The `OpenAPI` document and Swagger UI are gated by a
//! docs-visibility policy where "disabled" and "not allowed in production"
//! deliberately answer 404 so the routes do not leak their existence.
//!
//! ## Pagination
//!
//! List endpoints page over a fixed in-memory directory with opaque cursors:
//! a base64url-encoded decimal offset. Cursors are reversible by design, not
//! tamper-proof; malformed cursors fall back to offset 0.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
