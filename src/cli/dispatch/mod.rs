//! Command-line argument dispatch and server initialization.
//!
//! This module parses validated CLI arguments, builds the immutable
//! [`AppConfig`] once, and maps everything to the appropriate action.

use crate::api::config::{AppConfig, Environment};
use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{self, docs, otp};
use anyhow::{Context, Result};

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches
        .get_one::<u16>(commands::ARG_PORT)
        .copied()
        .unwrap_or(8080);

    let environment: Environment = matches
        .get_one::<String>(commands::ARG_ENVIRONMENT)
        .map_or("development", String::as_str)
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("invalid deployment mode")?;

    let config = AppConfig {
        environment,
        docs: docs::parse(matches, environment),
        otp: otp::parse(matches),
    };

    Ok(Action::Server(Args { port, config }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_development_config_by_default() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("GARDISTO_PORT", None::<&str>),
                ("API_DOCS_ENABLED", None::<&str>),
            ],
            || {
                let command = crate::cli::commands::new();
                let matches = command.get_matches_from(vec!["gardisto"]);
                let action = handler(&matches).expect("dispatch should succeed");
                let Action::Server(args) = action;
                assert_eq!(args.port, 8080);
                assert_eq!(args.config.environment, Environment::Development);
                // Docs default on only in development.
                assert!(args.config.docs.enabled);
                assert!(args.config.docs.require_admin);
                assert_eq!(args.config.otp.ttl_seconds, 300);
            },
        );
    }

    #[test]
    fn production_disables_docs_unless_flagged() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("API_DOCS_ENABLED", None::<&str>),
            ],
            || {
                let command = crate::cli::commands::new();
                let matches = command.get_matches_from(vec!["gardisto"]);
                let action = handler(&matches).expect("dispatch should succeed");
                let Action::Server(args) = action;
                assert_eq!(args.config.environment, Environment::Production);
                assert!(!args.config.docs.enabled);
                assert!(!args.config.docs.allow_in_prod);
            },
        );
    }

    #[test]
    fn env_flags_flow_into_config() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("test")),
                ("API_DOCS_ENABLED", Some("true")),
                ("API_DOCS_REQUIRE_ADMIN", Some("false")),
                ("OTP_TTL_SECONDS", Some("60")),
            ],
            || {
                let command = crate::cli::commands::new();
                let matches = command.get_matches_from(vec!["gardisto"]);
                let action = handler(&matches).expect("dispatch should succeed");
                let Action::Server(args) = action;
                assert_eq!(args.config.environment, Environment::Test);
                assert!(args.config.docs.enabled);
                assert!(!args.config.docs.require_admin);
                assert_eq!(args.config.otp.ttl_seconds, 60);
            },
        );
    }
}
