//! HTTP error handling and response conversion.
//!
//! Client input errors are answered with a descriptive body. Everything else
//! collapses into a generic 500 whose cause is logged server-side only.

use crate::domain::catalog::{errors::DomainError, language::SUPPORTED_LANGUAGES};
use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Language code outside the allow-list (400). Carries the rejected code.
    UnsupportedLanguage(String),

    /// Invalid or missing request parameter (400).
    BadRequest(String),

    /// No route matched (404).
    NotFound,

    /// Backing document missing, unreadable or malformed (500).
    DataAccess(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLanguage(code) => write!(f, "Unsupported language: {}", code),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound => write!(f, "Not found"),
            Self::DataAccess(msg) => write!(f, "Data access error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedLanguage(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::DataAccess(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-safe message, without implementation details.
    fn user_message(&self) -> String {
        match self {
            Self::UnsupportedLanguage(_) => "Unsupported language".into(),
            Self::BadRequest(msg) => msg.clone(),
            Self::NotFound => "Not found".into(),
            Self::DataAccess(_) | Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        if status.is_server_error() {
            tracing::error!("error={}", self);
        } else {
            tracing::debug!("error={}", self);
        }

        let body = match self {
            Self::UnsupportedLanguage(_) => json!({
                "error": message,
                "supportedLanguages": SUPPORTED_LANGUAGES,
            }),
            _ => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnsupportedLanguage(code) => AppError::UnsupportedLanguage(code),
            DomainError::ValidationError(msg) => AppError::BadRequest(msg),
            err @ DomainError::DataAccess { .. } => AppError::DataAccess(err.to_string()),
        }
    }
}

// === Extractor Rejections ===

impl From<PathRejection> for AppError {
    fn from(err: PathRejection) -> Self {
        tracing::debug!(rejection = %err.body_text(), "Path rejected");
        AppError::BadRequest("Invalid path parameters".into())
    }
}

/// Deserializer wording stays in the logs; clients get a fixed message.
impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        tracing::debug!(rejection = %err.body_text(), "Query string rejected");
        AppError::BadRequest("Invalid query parameters".into())
    }
}
