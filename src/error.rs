use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::auth::validation::FieldError;

/// Failures raised by the service layer. Services log at the point of
/// origin and propagate unchanged; this is the only place they are mapped
/// to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("Email already exist")]
    DuplicateEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Error hashing: {0}")]
    Hashing(String),
    #[error("Error comparing password: {0}")]
    PasswordComparison(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Serialize)]
struct ValidationBody {
    error: &'static str,
    details: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationBody {
                    error: "Validation failed",
                    details,
                }),
            )
                .into_response(),
            AppError::DuplicateEmail => (
                StatusCode::CONFLICT,
                Json(ErrorBody {
                    error: "Email already exist",
                }),
            )
                .into_response(),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody {
                    error: "Invalid credentials",
                }),
            )
                .into_response(),
            // Internal failures get a generic body; the detail stays in the logs.
            AppError::Hashing(msg) | AppError::PasswordComparison(msg) => {
                error!(error = %msg, "password primitive failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Internal server error",
                    }),
                )
                    .into_response()
            }
            AppError::Database(e) => {
                error!(error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::Validation(vec![FieldError::new("email", "Invalid email address")]);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_email_maps_to_409() {
        let resp = AppError::DuplicateEmail.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn invalid_credentials_maps_to_401() {
        let resp = AppError::InvalidCredentials.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn internal_failures_map_to_500() {
        let hashing = AppError::Hashing("boom".into()).into_response();
        assert_eq!(hashing.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let db = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn duplicate_email_message_is_stable() {
        assert_eq!(AppError::DuplicateEmail.to_string(), "Email already exist");
    }
}
