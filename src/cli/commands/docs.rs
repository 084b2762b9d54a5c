//! Docs-visibility flags.
//!
//! When `--docs-enabled` is not given, docs default to on only in the
//! development deployment mode.

use crate::api::config::{DocsPolicy, Environment};
use clap::{Arg, ArgMatches, Command};

pub const ARG_DOCS_ENABLED: &str = "docs-enabled";
pub const ARG_DOCS_REQUIRE_ADMIN: &str = "docs-require-admin";
pub const ARG_DOCS_ALLOW_IN_PROD: &str = "docs-allow-in-prod";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_DOCS_ENABLED)
                .long(ARG_DOCS_ENABLED)
                .help("Expose the OpenAPI document and Swagger UI")
                .env("API_DOCS_ENABLED")
                .value_parser(clap::value_parser!(bool)),
        )
        .arg(
            Arg::new(ARG_DOCS_REQUIRE_ADMIN)
                .long(ARG_DOCS_REQUIRE_ADMIN)
                .help("Require the admin role to view API docs")
                .env("API_DOCS_REQUIRE_ADMIN")
                .default_value("true")
                .value_parser(clap::value_parser!(bool)),
        )
        .arg(
            Arg::new(ARG_DOCS_ALLOW_IN_PROD)
                .long(ARG_DOCS_ALLOW_IN_PROD)
                .help("Allow API docs while running in production mode")
                .env("API_DOCS_ALLOW_IN_PROD")
                .default_value("false")
                .value_parser(clap::value_parser!(bool)),
        )
}

#[must_use]
pub fn parse(matches: &ArgMatches, environment: Environment) -> DocsPolicy {
    DocsPolicy {
        enabled: matches
            .get_one::<bool>(ARG_DOCS_ENABLED)
            .copied()
            .unwrap_or(environment == Environment::Development),
        require_admin: matches
            .get_one::<bool>(ARG_DOCS_REQUIRE_ADMIN)
            .copied()
            .unwrap_or(true),
        allow_in_prod: matches
            .get_one::<bool>(ARG_DOCS_ALLOW_IN_PROD)
            .copied()
            .unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_from(args: Vec<&str>) -> ArgMatches {
        with_args(Command::new("test")).get_matches_from(args)
    }

    #[test]
    fn enabled_defaults_follow_environment() {
        temp_env::with_vars([("API_DOCS_ENABLED", None::<&str>)], || {
            let matches = matches_from(vec!["test"]);
            assert!(parse(&matches, Environment::Development).enabled);
            assert!(!parse(&matches, Environment::Test).enabled);
            assert!(!parse(&matches, Environment::Production).enabled);
        });
    }

    #[test]
    fn explicit_flag_overrides_environment_default() {
        temp_env::with_vars([("API_DOCS_ENABLED", None::<&str>)], || {
            let matches = matches_from(vec!["test", "--docs-enabled", "true"]);
            let policy = parse(&matches, Environment::Production);
            assert!(policy.enabled);
            assert!(policy.require_admin);
            assert!(!policy.allow_in_prod);
        });
    }

    #[test]
    fn env_vars_feed_the_flags() {
        temp_env::with_vars(
            [
                ("API_DOCS_ENABLED", Some("false")),
                ("API_DOCS_REQUIRE_ADMIN", Some("false")),
                ("API_DOCS_ALLOW_IN_PROD", Some("true")),
            ],
            || {
                let matches = matches_from(vec!["test"]);
                let policy = parse(&matches, Environment::Development);
                assert!(!policy.enabled);
                assert!(!policy.require_admin);
                assert!(policy.allow_in_prod);
            },
        );
    }

    #[test]
    fn invalid_boolean_is_rejected() {
        temp_env::with_vars([("API_DOCS_ENABLED", None::<&str>)], || {
            let result = with_args(Command::new("test"))
                .try_get_matches_from(vec!["test", "--docs-enabled", "maybe"]);
            assert!(result.is_err());
        });
    }
}
