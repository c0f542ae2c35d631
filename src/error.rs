//! Application error taxonomy and its HTTP mapping.
//!
//! Every variant is an expected, per-request condition. Storage failures that are
//! not uniqueness conflicts collapse into [`AppError::Internal`] and only fail the
//! request that hit them.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::db_error::is_unique_violation_on_code;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload shared by all JSON endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request input that is not covered by a more specific variant.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Target URL is malformed or not an absolute HTTP/HTTPS URL.
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },

    /// Custom code violates the length or charset policy.
    #[error("{message}")]
    InvalidCustomCode { message: String, details: Value },

    /// Code is already reserved, either pre-checked or rejected by the store.
    #[error("{message}")]
    CodeTaken { message: String, details: Value },

    /// Unknown or inactive code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Code exists but has passed its expiry and was deactivated by this request.
    #[error("{message}")]
    Expired { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_custom_code(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidCustomCode {
            message: message.into(),
            details,
        }
    }

    pub fn code_taken(message: impl Into<String>, details: Value) -> Self {
        Self::CodeTaken {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status the presentation layer should answer with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. }
            | AppError::InvalidUrl { .. }
            | AppError::InvalidCustomCode { .. } => StatusCode::BAD_REQUEST,
            AppError::CodeTaken { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Expired { .. } => StatusCode::GONE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable identifier used in the `error.code` field of JSON responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::InvalidUrl { .. } => "invalid_url",
            AppError::InvalidCustomCode { .. } => "invalid_custom_code",
            AppError::CodeTaken { .. } => "code_taken",
            AppError::NotFound { .. } => "not_found",
            AppError::Expired { .. } => "expired",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = self.parts();
        ErrorInfo {
            code: self.error_code(),
            message: message.clone(),
            details: details.clone(),
        }
    }

    fn parts(&self) -> (&String, &Value) {
        match self {
            AppError::Validation { message, details }
            | AppError::InvalidUrl { message, details }
            | AppError::InvalidCustomCode { message, details }
            | AppError::CodeTaken { message, details }
            | AppError::NotFound { message, details }
            | AppError::Expired { message, details }
            | AppError::Internal { message, details } => (message, details),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_code(&e) {
            return AppError::code_taken("Short code is already taken", json!({}));
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let (bad_url, bad_code) = {
            let field_errors = e.field_errors();
            (
                field_errors.contains_key("url"),
                field_errors.contains_key("custom_code"),
            )
        };

        if bad_url {
            return AppError::invalid_url(
                "Please enter a valid URL (including http:// or https://)",
                json!({ "fields": e }),
            );
        }

        if bad_code {
            return AppError::invalid_custom_code(
                "Custom code must be 1-16 chars (letters, numbers, - or _)",
                json!({ "fields": e }),
            );
        }

        AppError::bad_request("Request validation failed", json!({ "fields": e }))
    }
}
