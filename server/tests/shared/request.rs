use axum::{body::Body, http::Request};
use serde_json::{Value, json};

use crate::request;

pub fn check_rank(email: &str) -> Request<Body> {
    check_rank_raw(json!({ "email": email }))
}

pub fn check_rank_raw(body: Value) -> Request<Body> {
    check_rank_bytes(body.to_string())
}

pub fn check_rank_bytes(body: impl Into<String>) -> Request<Body> {
    let body: String = body.into();
    request!(
        POST server::api::check_rank::PATH;
        "content-type" => "application/json";
        body
    )
}

pub fn health() -> Request<Body> {
    request!(GET server::api::health::PATH;)
}
