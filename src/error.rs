use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Domain failures raised by the services, independent of the HTTP surface.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Client input violates a domain rule (e.g. winner and loser are the same player).
    #[error("{0}")]
    Validation(String),
    /// A referenced player or game type does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The store rejected the operation or could not be reached.
    #[error("Database error: {0}")]
    Persistence(#[from] sea_orm::DbErr),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Unified application error type that maps to JSON HTTP responses.
///
/// Body format: `{ "detail": "...", "error": { "code": "...", "message": "..." } }`.
/// `detail` mirrors the message for clients that only read that field.
#[derive(Debug)]
pub enum AppError {
    /// 400 Bad Request
    BadRequest(String),
    /// 404 Not Found
    NotFound(String),
    /// 422 Unprocessable Entity
    UnprocessableEntity(String),
    /// 500 Internal Server Error (wraps any error, logs details, returns generic message)
    Internal(anyhow::Error),
}

impl AppError {
    /// Translate a service failure for the operation named `operation`.
    ///
    /// Validation and missing-reference failures are client errors (400);
    /// store failures become 500s.
    #[must_use]
    pub fn from_service(operation: &'static str, err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) | ServiceError::NotFound(msg) => {
                tracing::warn!(operation, reason = %msg, "Request rejected");
                Self::BadRequest(msg)
            }
            ServiceError::Persistence(e) => {
                Self::Internal(anyhow::Error::new(e).context(format!("{operation} failed")))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            Self::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", msg)
            }
            Self::Internal(err) => {
                tracing::error!("Internal server error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({
                "detail": message,
                "error": {
                    "code": code,
                    "message": message,
                }
            })),
        )
            .into_response()
    }
}

/// Well-formed JSON of the wrong shape is a 422; anything else the extractor
/// rejects (syntax, content type, unreadable body) is a 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => Self::UnprocessableEntity(err.body_text()),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
