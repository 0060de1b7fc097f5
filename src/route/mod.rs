use axum::Router;

use crate::state::ApiState;

pub mod base;
pub mod books;
pub mod error;
pub mod metrics;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new()
        .merge(base::app::app())
        .merge(error::app::app())
        .merge(books::app::app())
        .merge(metrics::app())
}
