use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::ApiErrorBody;
use sea_orm::{DbErr, SqlErr};

/// Failure of a catalog service call, mapped to an HTTP status by handlers
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message for the response body; internal details stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Map a unique index violation to `Conflict(message)`, anything else to `Internal`.
    pub fn from_write(err: anyhow::Error, conflict_message: &str) -> Self {
        match err.downcast_ref::<DbErr>() {
            Some(db_err) if is_unique_violation(db_err) => {
                ServiceError::Conflict(conflict_message.to_string())
            }
            _ => ServiceError::Internal(err),
        }
    }
}

pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ServiceError::Internal(e) = &self {
            tracing::error!("internal error: {:#}", e);
        }
        (status, Json(ApiErrorBody::new(self.public_message()))).into_response()
    }
}
