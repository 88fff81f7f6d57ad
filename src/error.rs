use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUPPORT_NOTICE: &str = "Something went wrong! Please contact support.";

/// Failure side of the response envelope.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not supported")]
    MethodNotSupported,

    /// `detail` is what reaches the client, empty when redacted.
    #[error("{detail}{}", SUPPORT_NOTICE)]
    Internal {
        detail: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(source: anyhow::Error, redact: bool) -> Self {
        let detail = if redact {
            String::new()
        } else {
            format!("{:#}", source)
        };
        ApiError::Internal { detail, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotSupported => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal { source, .. } = &self {
            tracing::error!("request failed: {:#}", source);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
