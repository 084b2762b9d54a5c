//! Immutable runtime configuration.
//!
//! Built once from CLI/env at startup and handed to handlers via an axum
//! `Extension`; nothing mutates it afterwards.

use std::str::FromStr;

/// Deployment mode, from `APP_ENV`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" => Ok(Self::Production),
            other => Err(format!("unknown deployment mode: {other}")),
        }
    }
}

/// Visibility policy for the OpenAPI document and Swagger UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocsPolicy {
    pub enabled: bool,
    pub require_admin: bool,
    pub allow_in_prod: bool,
}

/// OTP policy constants surfaced in stub responses.
///
/// None of these are enforced yet; the request/verify handlers only echo the
/// ttl and cooldown, and the remaining fields are reserved for the limiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OtpPolicy {
    pub ttl_seconds: u64,
    pub resend_cooldown_seconds: u64,
    pub request_max_per_phone_window: u32,
    pub request_max_per_ip_window: u32,
    pub request_window_minutes: u32,
    pub verify_max_attempts: u32,
    pub verify_lockout_minutes: u32,
}

impl Default for OtpPolicy {
    fn default() -> Self {
        Self {
            ttl_seconds: 300,
            resend_cooldown_seconds: 30,
            request_max_per_phone_window: 5,
            request_max_per_ip_window: 10,
            request_window_minutes: 15,
            verify_max_attempts: 5,
            verify_lockout_minutes: 15,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub docs: DocsPolicy,
    pub otp: OtpPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_known_modes() {
        assert_eq!(
            "development".parse::<Environment>(),
            Ok(Environment::Development)
        );
        assert_eq!("TEST".parse::<Environment>(), Ok(Environment::Test));
        assert_eq!(
            " production ".parse::<Environment>(),
            Ok(Environment::Production)
        );
    }

    #[test]
    fn environment_rejects_unknown_modes() {
        assert!("staging".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }

    #[test]
    fn environment_round_trips_as_str() {
        for env in [
            Environment::Development,
            Environment::Test,
            Environment::Production,
        ] {
            assert_eq!(env.as_str().parse::<Environment>(), Ok(env));
        }
    }
}
