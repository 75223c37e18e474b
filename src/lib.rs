//! Starter services: a JSON API (`backend`) and a static page server (`frontend`).

pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod telemetry;
