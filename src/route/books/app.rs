use axum::{routing::get, Router};

use crate::state::ApiState;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().route(
        "/pythonbooks",
        get(super::get_python_books::get_python_books),
    )
}
