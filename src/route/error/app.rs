use axum::{http::StatusCode, routing::get, Router};

use crate::state::ApiState;

/// Routes answering with fixed error responses, for exercising dashboards and alerts.
pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .route("/create40x", get(create_40x))
        .route("/create50x", get(create_50x))
}

pub async fn create_40x() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "40x error")
}

pub async fn create_50x() -> (StatusCode, &'static str) {
    (StatusCode::NOT_IMPLEMENTED, "50x error")
}
