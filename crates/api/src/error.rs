//! JSON error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tally_core::expense::{ExpenseError, StoreError};
use tally_shared::AppError;
use tracing::error;

/// Result type for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An [`AppError`] rendered as `{ "error": <code>, "message": <text> }`.
///
/// Server-side failures are logged and reported with a generic message.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::ValidationFailed(message.into()))
    }

    fn public_message(&self) -> String {
        match &self.0 {
            AppError::Unauthenticated(m) | AppError::NotFound(m) | AppError::ValidationFailed(m) => {
                m.clone()
            }
            AppError::TransportFailure(_) => {
                "The expense service is unavailable. Please try again.".to_string()
            }
            AppError::Internal(_) => "An error occurred".to_string(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<ExpenseError> for ApiError {
    fn from(err: ExpenseError) -> Self {
        Self::validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = json!({
            "error": self.0.error_code().to_ascii_lowercase(),
            "message": self.public_message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use tally_shared::types::ExpenseId;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let response = ApiError::from(ExpenseError::EmptyTitle).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_failed");
        assert_eq!(body["message"], "Title is required");
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let id = ExpenseId::new();
        let response = ApiError::from(StoreError::NotFound(id)).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], format!("Expense not found: {id}"));
    }

    #[tokio::test]
    async fn test_transport_failure_hides_detail() {
        let response = ApiError::from(StoreError::TransportFailure(
            "connection refused at 10.0.0.5".to_string(),
        ))
        .into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["error"], "transport_failure");
        assert!(!body["message"].as_str().unwrap().contains("10.0.0.5"));
    }
}
