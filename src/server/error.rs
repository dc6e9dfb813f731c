use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::ItemDeskError;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl ItemDeskError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ItemDeskError::Validation(_) | ItemDeskError::InvalidId => StatusCode::BAD_REQUEST,
            ItemDeskError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ItemDeskError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = if self.is_client_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "Rejected request");
            ErrorBody::new(self.to_string())
        } else {
            tracing::error!(error = %self, "Internal server error");
            ErrorBody::new("Internal server error")
        };

        (status, Json(body)).into_response()
    }
}
