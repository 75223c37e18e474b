use axum::Json;
use serde::Serialize;

pub const GREETING: &str = "Hello from Hono!";

#[derive(Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

pub async fn hello() -> Json<Greeting> {
    Json(Greeting { message: GREETING })
}
