//! Error types for the guide API server.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bahia_db::DbError;

/// Errors that can occur in the guide API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request body or query parameters failed validation.
    #[error("invalid request: {0}")]
    Validation(String),

    /// A data layer failure.
    #[error(transparent)]
    Db(#[from] DbError),

    /// A serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // A missing plan is a client error, not a server fault. 422
            // matches what the JSON extractor returns for a plan label
            // that is not in the enum at all.
            Self::Db(DbError::PlanNotFound(plan)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("unknown plan: {plan}"),
            ),
            Self::Db(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_owned(),
                )
            }
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_track_error_kind() {
        let resp = ApiError::NotFound("no such restaurant".to_owned()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::Validation("query must not be empty".to_owned()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // An unknown plan mirrors the extractor's 422 for a bad enum label.
        let resp = ApiError::Db(DbError::PlanNotFound("platinum".to_owned())).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
