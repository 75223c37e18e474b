use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No route for {method} {path}")]
    NotFound { method: Method, path: String },
}

impl AppError {
    pub fn not_found(method: Method, uri: &Uri) -> Self {
        AppError::NotFound {
            method,
            path: uri.path().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "Not Found"),
        };

        let body = Json(json!({
            "error": error_message,
            "details": self.to_string()
        }));

        (status, body).into_response()
    }
}
