// Not every helper is used in every test binary
#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request},
    response::Response,
};
use http_body_util::BodyExt;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Build a request the way a browser on another origin would send it
pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, TEST_ORIGIN)
        .body(Body::empty())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    request(Method::GET, uri)
}

pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

pub fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
