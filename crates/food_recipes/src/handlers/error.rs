use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use food_recipes_core::{
    storage::{repository_error_to_status_code, RepositoryError},
    ApiError, ErrorResponse,
};
use thiserror::Error;

/// A request turned away with a known status and error body.
#[derive(Debug, Error)]
#[error("request rejected with {status}")]
pub struct Rejection {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn rejected(status: StatusCode, body: ErrorResponse) -> Self {
        Self(Rejection { status, body }.into())
    }

    /// 400 listing every domain error.
    pub fn bad_request<E: ApiError>(errors: &[E]) -> Self {
        Self::rejected(StatusCode::BAD_REQUEST, ErrorResponse::from_errors(errors))
    }

    /// 400 with a single message.
    pub fn bad_request_message(message: impl Into<String>) -> Self {
        Self::rejected(StatusCode::BAD_REQUEST, ErrorResponse::message(message))
    }
}

fn repository_error_message(error: &RepositoryError) -> &'static str {
    match error {
        RepositoryError::NotFound { .. } => "recipe not found",
        RepositoryError::AlreadyExists { .. } => "recipe already exists, use different title",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(rejection) = self.0.downcast_ref::<Rejection>() {
            tracing::warn!(
                status = %rejection.status,
                errors = rejection.body.errors.len(),
                "request rejected"
            );
            return (rejection.status, Json(rejection.body.clone())).into_response();
        }

        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            tracing::debug!(error = %repo_error, "storage lookup failed");
            return (
                status,
                Json(ErrorResponse::message(repository_error_message(repo_error))),
            )
                .into_response();
        }

        tracing::error!(error = %self.0, "unhandled error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::message("internal server error")),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
