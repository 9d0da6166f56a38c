use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::envelope::ApiResponse;
use crate::models::{StoreError, Violation};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Rejected(String),
    #[error("Internal Server Error: {0}")]
    Internal(String)
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::InvalidInput { .. }) | Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn violations(&self) -> &[Violation] {
        match self {
            Self::Store(StoreError::InvalidInput { violations, .. }) => violations.as_slice(),
            _ => &[]
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = self.violations().iter().fold(
            ApiResponse::<()>::failure(self.to_string()),
            |envelope, violation| envelope.with_error(violation.field, violation.detail)
        );

        (self.status(), Json(envelope)).into_response()
    }
}

/// Turns a panic inside a handler into the generic 500 envelope.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic".to_string()
    };

    ApiError::Internal(detail).into_response()
}
