use axum::{
    http::{StatusCode, Uri},
    response::Html,
};

use crate::pages::{self, Page};

pub async fn show(page: Page) -> Html<String> {
    tracing::debug!(path = page.path(), "rendering page");
    Html(page.render())
}

pub async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    tracing::debug!(path = uri.path(), "no page registered");
    (StatusCode::NOT_FOUND, Html(pages::render_not_found(uri.path())))
}
