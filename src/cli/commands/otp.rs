//! OTP policy flags.
//!
//! These values are surfaced in stub responses; no limiter or delivery is
//! wired up at this stage.

use crate::api::config::OtpPolicy;
use clap::{Arg, ArgMatches, Command};

pub const ARG_OTP_TTL_SECONDS: &str = "otp-ttl-seconds";
pub const ARG_OTP_RESEND_COOLDOWN_SECONDS: &str = "otp-resend-cooldown-seconds";
pub const ARG_OTP_REQUEST_MAX_PER_PHONE_WINDOW: &str = "otp-request-max-per-phone-window";
pub const ARG_OTP_REQUEST_MAX_PER_IP_WINDOW: &str = "otp-request-max-per-ip-window";
pub const ARG_OTP_REQUEST_WINDOW_MINUTES: &str = "otp-request-window-minutes";
pub const ARG_OTP_VERIFY_MAX_ATTEMPTS: &str = "otp-verify-max-attempts";
pub const ARG_OTP_VERIFY_LOCKOUT_MINUTES: &str = "otp-verify-lockout-minutes";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_OTP_TTL_SECONDS)
                .long(ARG_OTP_TTL_SECONDS)
                .help("OTP code time to live in seconds")
                .env("OTP_TTL_SECONDS")
                .default_value("300")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_OTP_RESEND_COOLDOWN_SECONDS)
                .long(ARG_OTP_RESEND_COOLDOWN_SECONDS)
                .help("Cooldown before an OTP may be resent")
                .env("OTP_RESEND_COOLDOWN_SECONDS")
                .default_value("30")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_OTP_REQUEST_MAX_PER_PHONE_WINDOW)
                .long(ARG_OTP_REQUEST_MAX_PER_PHONE_WINDOW)
                .help("Max OTP requests per phone per window")
                .env("OTP_REQUEST_MAX_PER_PHONE_WINDOW")
                .default_value("5")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new(ARG_OTP_REQUEST_MAX_PER_IP_WINDOW)
                .long(ARG_OTP_REQUEST_MAX_PER_IP_WINDOW)
                .help("Max OTP requests per IP per window")
                .env("OTP_REQUEST_MAX_PER_IP_WINDOW")
                .default_value("10")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new(ARG_OTP_REQUEST_WINDOW_MINUTES)
                .long(ARG_OTP_REQUEST_WINDOW_MINUTES)
                .help("OTP request rate window in minutes")
                .env("OTP_REQUEST_WINDOW_MINUTES")
                .default_value("15")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new(ARG_OTP_VERIFY_MAX_ATTEMPTS)
                .long(ARG_OTP_VERIFY_MAX_ATTEMPTS)
                .help("Max OTP verify attempts before lockout")
                .env("OTP_VERIFY_MAX_ATTEMPTS")
                .default_value("5")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new(ARG_OTP_VERIFY_LOCKOUT_MINUTES)
                .long(ARG_OTP_VERIFY_LOCKOUT_MINUTES)
                .help("Lockout duration after exhausted verify attempts")
                .env("OTP_VERIFY_LOCKOUT_MINUTES")
                .default_value("15")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
}

#[must_use]
pub fn parse(matches: &ArgMatches) -> OtpPolicy {
    let defaults = OtpPolicy::default();
    OtpPolicy {
        ttl_seconds: matches
            .get_one::<u64>(ARG_OTP_TTL_SECONDS)
            .copied()
            .unwrap_or(defaults.ttl_seconds),
        resend_cooldown_seconds: matches
            .get_one::<u64>(ARG_OTP_RESEND_COOLDOWN_SECONDS)
            .copied()
            .unwrap_or(defaults.resend_cooldown_seconds),
        request_max_per_phone_window: matches
            .get_one::<u32>(ARG_OTP_REQUEST_MAX_PER_PHONE_WINDOW)
            .copied()
            .unwrap_or(defaults.request_max_per_phone_window),
        request_max_per_ip_window: matches
            .get_one::<u32>(ARG_OTP_REQUEST_MAX_PER_IP_WINDOW)
            .copied()
            .unwrap_or(defaults.request_max_per_ip_window),
        request_window_minutes: matches
            .get_one::<u32>(ARG_OTP_REQUEST_WINDOW_MINUTES)
            .copied()
            .unwrap_or(defaults.request_window_minutes),
        verify_max_attempts: matches
            .get_one::<u32>(ARG_OTP_VERIFY_MAX_ATTEMPTS)
            .copied()
            .unwrap_or(defaults.verify_max_attempts),
        verify_lockout_minutes: matches
            .get_one::<u32>(ARG_OTP_VERIFY_LOCKOUT_MINUTES)
            .copied()
            .unwrap_or(defaults.verify_lockout_minutes),
    }
}
