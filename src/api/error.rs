//! Error envelope for the HTTP surface.
//!
//! Every non-2xx response carries `{ "error": { code, message, requestId,
//! retryable } }`. The code set is closed; status and retryable are derived
//! from the code so handlers cannot produce inconsistent pairs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    AuthRequired,
    Forbidden,
    NotFound,
    ValidationError,
    RateLimited,
    OtpInvalid,
    OtpExpired,
    OtpRateLimited,
    InternalError,
}

impl ErrorCode {
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::AuthRequired => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ValidationError | Self::OtpInvalid | Self::OtpExpired => StatusCode::BAD_REQUEST,
            Self::RateLimited | Self::OtpRateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether a client may retry the same request unchanged.
    #[must_use]
    pub const fn retryable(self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::OtpRateLimited | Self::InternalError
        )
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    pub request_id: Uuid,
    pub retryable: bool,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// A guard or validation failure destined for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Fresh request id per envelope for log correlation.
        let envelope = ErrorEnvelope {
            error: ErrorBody {
                code: self.code,
                message: self.message,
                request_id: Uuid::new_v4(),
                retryable: self.code.retryable(),
            },
        };

        (self.code.status(), Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const ALL_CODES: [ErrorCode; 9] = [
        ErrorCode::AuthRequired,
        ErrorCode::Forbidden,
        ErrorCode::NotFound,
        ErrorCode::ValidationError,
        ErrorCode::RateLimited,
        ErrorCode::OtpInvalid,
        ErrorCode::OtpExpired,
        ErrorCode::OtpRateLimited,
        ErrorCode::InternalError,
    ];

    #[test]
    fn status_mapping_is_exhaustive() {
        for code in ALL_CODES {
            let status = code.status();
            match code {
                ErrorCode::AuthRequired => assert_eq!(status, StatusCode::UNAUTHORIZED),
                ErrorCode::Forbidden => assert_eq!(status, StatusCode::FORBIDDEN),
                ErrorCode::NotFound => assert_eq!(status, StatusCode::NOT_FOUND),
                ErrorCode::ValidationError | ErrorCode::OtpInvalid | ErrorCode::OtpExpired => {
                    assert_eq!(status, StatusCode::BAD_REQUEST);
                }
                ErrorCode::RateLimited | ErrorCode::OtpRateLimited => {
                    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                }
                ErrorCode::InternalError => {
                    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                }
            }
        }
    }

    #[test]
    fn only_throttling_and_internal_are_retryable() {
        for code in ALL_CODES {
            let expected = matches!(
                code,
                ErrorCode::RateLimited | ErrorCode::OtpRateLimited | ErrorCode::InternalError
            );
            assert_eq!(code.retryable(), expected, "code {code:?}");
        }
    }

    #[test]
    fn codes_serialize_in_screaming_snake_case() -> Result<()> {
        assert_eq!(
            serde_json::to_value(ErrorCode::AuthRequired)?,
            serde_json::json!("AUTH_REQUIRED")
        );
        assert_eq!(
            serde_json::to_value(ErrorCode::OtpRateLimited)?,
            serde_json::json!("OTP_RATE_LIMITED")
        );
        let decoded: ErrorCode = serde_json::from_value(serde_json::json!("VALIDATION_ERROR"))?;
        assert_eq!(decoded, ErrorCode::ValidationError);
        Ok(())
    }

    #[test]
    fn envelope_carries_a_fresh_request_id() -> Result<()> {
        let error = ApiError::new(ErrorCode::Forbidden, "Admin role is required");
        let envelope = ErrorEnvelope {
            error: ErrorBody {
                code: error.code,
                message: error.message,
                request_id: Uuid::new_v4(),
                retryable: error.code.retryable(),
            },
        };
        let value = serde_json::to_value(&envelope)?;
        assert_eq!(value["error"]["code"], "FORBIDDEN");
        assert_eq!(value["error"]["retryable"], false);
        let raw_id = value["error"]["requestId"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("missing requestId"))?;
        Uuid::parse_str(raw_id)?;
        Ok(())
    }
}
