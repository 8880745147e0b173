use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ConflictError(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("The transaction could not be completed")]
    TransactionError(#[source] sqlx::Error),
    #[error("A database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("A key value store operation failed")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("A password operation failed")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("Invalid credentials")]
    UnauthenticatedError,
    #[error("Your account has been banned. Contact support.")]
    BannedUserError,
    #[error("Admin privileges are required")]
    UnauthorizedError,
    #[error("{0}")]
    ConversionEntityError(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnprocessableEntity(_)
            | AppError::ConflictError(_)
            | AppError::ValidationError(_)
            | AppError::ConvertToUuidError(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::BannedUserError | AppError::UnauthorizedError => StatusCode::FORBIDDEN,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();

        // Persistence-layer error strings must not leak to clients; log the
        // cause chain and return the fixed message from the variant instead.
        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
        } else {
            tracing::warn!(
                error.cause_chain = ?self,
                error.message = %self,
                "Request was rejected"
            );
        }

        (status_code, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_rule_violations_map_to_bad_request() {
        let err = AppError::UnprocessableEntity("You must rent before reviewing".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = AppError::ConflictError("Email already exists".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn auth_failures_map_to_401_and_403() {
        assert_eq!(
            AppError::UnauthenticatedError.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::BannedUserError.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::UnauthorizedError.status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn missing_records_map_to_not_found() {
        let err = AppError::EntityNotFound("User not found".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_failures_are_sanitized() {
        let err = AppError::SpecificOperationError(sqlx::Error::PoolClosed);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        // The client-facing message is fixed, not the sqlx error string.
        assert_eq!(err.to_string(), "A database operation failed");
    }
}
