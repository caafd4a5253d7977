// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// Each variant maps to an HTTP status code and a JSON error body
#[derive(Error, Debug)]
pub enum DoctorsError {
    #[error("Doctor not found with id: {0}")]
    DoctorNotFound(i64),

    #[error("Review not found with id: {0}")]
    ReviewNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl DoctorsError {
    fn error_code(&self) -> &'static str {
        match self {
            DoctorsError::DoctorNotFound(_) | DoctorsError::ReviewNotFound(_) => "NOT_FOUND",
            DoctorsError::DatabaseError(_) => "DATABASE_ERROR",
            DoctorsError::InvalidInput(_) => "INVALID_INPUT",
            DoctorsError::ValidationError(_) => "VALIDATION_ERROR",
        }
    }
}

/// Convert DoctorsError to HTTP response
impl ResponseError for DoctorsError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            DoctorsError::DoctorNotFound(_) => StatusCode::NOT_FOUND,
            DoctorsError::ReviewNotFound(_) => StatusCode::NOT_FOUND,
            DoctorsError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DoctorsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DoctorsError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}
