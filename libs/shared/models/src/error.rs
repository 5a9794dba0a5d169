use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation error: {message}: {details}")]
    ValidationError { message: String, details: String },

    #[error("Internal Server Error: {message}")]
    Internal {
        message: String,
        details: Option<String>,
    },
}

impl AppError {
    pub fn internal(message: impl Into<String>, details: impl ToString) -> Self {
        AppError::Internal {
            message: message.into(),
            details: Some(details.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::BadRequest(error) => ErrorBody { error, details: None },
            AppError::ValidationError { message, details } => ErrorBody {
                error: message,
                details: Some(details),
            },
            AppError::Internal { message, details } => ErrorBody {
                error: message,
                details,
            },
        };

        tracing::error!("Error: {}: {}", status, body.error);

        (status, Json(body)).into_response()
    }
}
