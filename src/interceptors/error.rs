use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use thiserror::Error;
use serde_json::json;

use super::response::ApiError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Dequeue found both lanes empty. Expected during normal operation;
    /// workers poll again later.
    #[error("No jobs available")]
    NoJobsAvailable,

    #[error("Job {0} not found")]
    JobNotFound(u64),

    #[error("Invalid job type: {0}")]
    InvalidJobType(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Error codes for API responses
#[derive(Debug)]
pub enum ErrorCode {
    NoJobsAvailable,
    JobNotFound,
    InvalidJobType,
    ValidationError,
    BadRequest,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NoJobsAvailable => "NO_JOBS_AVAILABLE",
            ErrorCode::JobNotFound => "JOB_NOT_FOUND",
            ErrorCode::InvalidJobType => "INVALID_JOB_TYPE",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::NoJobsAvailable => ErrorCode::NoJobsAvailable,
            AppError::JobNotFound(_) => ErrorCode::JobNotFound,
            AppError::InvalidJobType(_) => ErrorCode::InvalidJobType,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::InternalError(_) => ErrorCode::InternalError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoJobsAvailable => StatusCode::NOT_FOUND,
            AppError::JobNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidJobType(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        let error_code = self.error_code().as_str();
        let message = self.to_string();

        // Add additional details for specific errors
        match self {
            AppError::ValidationError(msg) => ApiError::with_details(
                message,
                error_code,
                json!({ "validation_errors": msg }),
            ),
            AppError::InvalidJobType(job_type) => ApiError::with_details(
                message,
                error_code,
                json!({ "known_types": ["TIME_CRITICAL", "NOT_TIME_CRITICAL"], "got": job_type }),
            ),
            _ => ApiError::new(message, error_code),
        }
    }
}

// Implement IntoResponse for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // An empty queue is business as usual, keep it off the error log.
            AppError::NoJobsAvailable | AppError::JobNotFound(_) => {
                tracing::debug!("Request failed: {:?}", self)
            }
            _ => tracing::error!("Application error: {:?}", self),
        }

        let api_error = self.to_api_error();
        api_error.into_response()
    }
}

// Result type alias
pub type AppResult<T> = Result<T, AppError>;
