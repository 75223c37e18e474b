use axum::http::{Method, Uri};

use crate::error::AppError;

pub mod health;
pub mod pages;
pub mod root;

/// Catch-all for the JSON API: unknown paths and unsupported methods are both 404.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "no matching route");
    AppError::not_found(method, &uri)
}
