use actix_web::{error, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors that can originate in the skill matching core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Error returned by HTTP handlers, rendered as an `ErrorResponse` body
#[derive(Debug, Error)]
#[error("{error}: {message}")]
pub struct ApiError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ApiError {
    pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: 400,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: "Not found".to_string(),
            message: message.into(),
            status_code: 404,
        }
    }
}

impl From<MatchError> for ApiError {
    fn from(err: MatchError) -> Self {
        ApiError::bad_request("invalid_input", err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::bad_request("Validation failed", errors.to_string())
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.error.clone(),
            message: self.message.clone(),
            status_code: self.status_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let err: ApiError = MatchError::InvalidInput("student_skills[0] must be a string".into()).into();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error, "invalid_input");
        assert!(err.message.contains("student_skills[0]"));
    }

    #[test]
    fn test_not_found_status() {
        let err = ApiError::not_found("No route for /nope");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
