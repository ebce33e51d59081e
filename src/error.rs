use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_derive::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DashboardError {
    #[error("request to upstream failed: {0}")]
    Http(#[from] hyper::Error),

    #[error("upstream {url} answered {status}")]
    Status { status: StatusCode, url: String },

    #[error("invalid upstream url: {0}")]
    InvalidUri(#[from] axum::http::uri::InvalidUri),

    #[error("unable to build upstream request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unable to decode response body: {0}")]
    Decode(#[from] std::io::Error),

    #[error("unknown ranking column `{0}`")]
    InvalidColumn(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub(crate) type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl DashboardError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::InvalidColumn(_) => StatusCode::BAD_REQUEST,
            DashboardError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "rejected request");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_input_is_a_client_error() {
        let err = DashboardError::InvalidColumn("bogus".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "unknown ranking column `bogus`");
    }

    #[test]
    fn upstream_failures_are_bad_gateway() {
        let err = DashboardError::Status {
            status: StatusCode::NOT_FOUND,
            url: "http://example.invalid/world.json".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
