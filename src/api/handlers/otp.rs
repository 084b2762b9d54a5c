//! OTP request/verify stubs for the auth surface.
//!
//! No codes are generated, stored, or checked yet. The handlers validate
//! input shape and answer the contracted response bodies, echoing the ttl and
//! cooldown from [`OtpPolicy`] so clients can build against the final wire
//! format before delivery exists.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::{
    super::{
        config::AppConfig,
        error::{ApiError, ErrorCode, ErrorEnvelope},
    },
    valid_phone,
};

const OTP_CODE_MIN_LEN: usize = 4;
const OTP_CODE_MAX_LEN: usize = 8;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub enum OtpStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "VERIFIED")]
    Verified,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct OtpRequestBody {
    pub phone: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct OtpVerifyBody {
    pub phone: Option<String>,
    pub code: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OtpRequested {
    pub status: OtpStatus,
    pub ttl_seconds: u64,
    pub resend_cooldown_seconds: u64,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct OtpRequestResponse {
    pub data: OtpRequested,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct OtpVerified {
    pub status: OtpStatus,
    /// Always null until session issuance lands.
    pub session: Option<serde_json::Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct OtpVerifyResponse {
    pub data: OtpVerified,
}

#[utoipa::path(
    post,
    path = "/v1/auth/otp/request",
    request_body = OtpRequestBody,
    responses(
        (status = 200, description = "OTP issuance acknowledged", body = OtpRequestResponse),
        (status = 400, description = "Missing or malformed phone", body = ErrorEnvelope),
    ),
    tag = "auth"
)]
pub async fn request_otp(
    Extension(config): Extension<Arc<AppConfig>>,
    body: Result<Json<OtpRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return ApiError::new(ErrorCode::ValidationError, "Invalid JSON body").into_response();
    };

    if !valid_phone(body.phone.as_deref()) {
        return ApiError::new(
            ErrorCode::ValidationError,
            "A valid phone number is required",
        )
        .into_response();
    }

    info!("OTP requested");

    let response = OtpRequestResponse {
        data: OtpRequested {
            status: OtpStatus::Pending,
            ttl_seconds: config.otp.ttl_seconds,
            resend_cooldown_seconds: config.otp.resend_cooldown_seconds,
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}

#[utoipa::path(
    post,
    path = "/v1/auth/otp/verify",
    request_body = OtpVerifyBody,
    responses(
        (status = 200, description = "OTP accepted", body = OtpVerifyResponse),
        (status = 400, description = "Missing fields or code outside 4-8 characters", body = ErrorEnvelope),
    ),
    tag = "auth"
)]
pub async fn verify_otp(body: Result<Json<OtpVerifyBody>, JsonRejection>) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return ApiError::new(ErrorCode::ValidationError, "Invalid JSON body").into_response();
    };

    // Length counts raw characters; surrounding whitespace is not forgiven.
    let code = body.code.as_deref().unwrap_or_default();

    if !valid_phone(body.phone.as_deref()) || code.trim().is_empty() {
        return ApiError::new(
            ErrorCode::ValidationError,
            "Phone and OTP code are required",
        )
        .into_response();
    }

    if code.len() < OTP_CODE_MIN_LEN || code.len() > OTP_CODE_MAX_LEN {
        return ApiError::new(
            ErrorCode::OtpInvalid,
            "OTP must be between 4 and 8 characters",
        )
        .into_response();
    }

    info!("OTP verified");

    let response = OtpVerifyResponse {
        data: OtpVerified {
            status: OtpStatus::Verified,
            session: None,
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn statuses_serialize_uppercase() -> Result<()> {
        assert_eq!(
            serde_json::to_value(OtpStatus::Pending)?,
            serde_json::json!("PENDING")
        );
        assert_eq!(
            serde_json::to_value(OtpStatus::Verified)?,
            serde_json::json!("VERIFIED")
        );
        Ok(())
    }

    #[test]
    fn requested_body_uses_camel_case_fields() -> Result<()> {
        let value = serde_json::to_value(OtpRequestResponse {
            data: OtpRequested {
                status: OtpStatus::Pending,
                ttl_seconds: 300,
                resend_cooldown_seconds: 30,
            },
        })?;
        assert_eq!(value["data"]["ttlSeconds"], 300);
        assert_eq!(value["data"]["resendCooldownSeconds"], 30);
        Ok(())
    }

    #[test]
    fn verified_body_carries_null_session() -> Result<()> {
        let value = serde_json::to_value(OtpVerifyResponse {
            data: OtpVerified {
                status: OtpStatus::Verified,
                session: None,
            },
        })?;
        assert_eq!(value["data"]["status"], "VERIFIED");
        assert!(value["data"]["session"].is_null());
        Ok(())
    }
}
