//! Seeded in-memory user directory.
//!
//! The foundation stage has no database; admin endpoints page over this
//! fixed data so the contracts can be exercised end to end. Timestamps are
//! uniform RFC 3339 UTC strings, so lexicographic order is chronological.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Disabled,
    Deleted,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: String,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginEventKind {
    LoginSuccess,
    LoginFailed,
    OtpRequested,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginEvent {
    pub id: String,
    pub event_type: LoginEventKind,
    pub failure_reason: Option<String>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub device_id: Option<String>,
    pub occurred_at: String,
}

pub const ADMIN_USER_ID: &str = "87a4332b-cf39-41e4-b1fd-917f1ab57e86";
pub const PLAIN_USER_ID: &str = "9e9ec31d-ac29-43ba-ae0a-c63bda955a54";

/// The seeded user directory.
#[must_use]
pub fn users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: ADMIN_USER_ID.to_string(),
            phone: Some("+84912345678".to_string()),
            email: Some("admin@auth.local".to_string()),
            role: UserRole::Admin,
            status: UserStatus::Active,
            created_at: "2026-02-10T08:00:00.000Z".to_string(),
        },
        UserRecord {
            id: PLAIN_USER_ID.to_string(),
            phone: Some("+84999900000".to_string()),
            email: Some("user@auth.local".to_string()),
            role: UserRole::User,
            status: UserStatus::Active,
            created_at: "2026-02-12T10:30:00.000Z".to_string(),
        },
    ]
}

/// Login events recorded for one user; unknown ids get an empty history.
#[must_use]
pub fn login_events_for(user_id: &str) -> Vec<LoginEvent> {
    if user_id != PLAIN_USER_ID {
        return Vec::new();
    }

    vec![
        LoginEvent {
            id: "2f2bc8f1-395f-41ad-b451-b38758cc4ea4".to_string(),
            event_type: LoginEventKind::LoginSuccess,
            failure_reason: None,
            ip: Some("192.168.1.9".to_string()),
            user_agent: Some("iOS Safari".to_string()),
            device_id: Some("ios-15-pro-max".to_string()),
            occurred_at: "2026-02-15T07:13:21.000Z".to_string(),
        },
        LoginEvent {
            id: "d6c17e5f-a5f4-47cd-b0d5-31b0ca97f058".to_string(),
            event_type: LoginEventKind::OtpRequested,
            failure_reason: None,
            ip: Some("192.168.1.9".to_string()),
            user_agent: Some("iOS Safari".to_string()),
            device_id: Some("ios-15-pro-max".to_string()),
            occurred_at: "2026-02-15T07:12:30.000Z".to_string(),
        },
    ]
}
