use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::state::ApiState;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().route("/metrics", get(metrics))
}

pub async fn metrics(State(state): State<ApiState>) -> Response {
    let body = state.telemetry().render();

    (
        [(CONTENT_TYPE, HeaderValue::from_static(PROMETHEUS_CONTENT_TYPE))],
        body,
    )
        .into_response()
}
