use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hello World from Rust Axum";

#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub result: String,
}

impl IntoResponse for HomeResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn home() -> HomeResponse {
    HomeResponse {
        result: GREETING.to_string(),
    }
}
