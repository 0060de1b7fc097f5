use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{
    catalog::BookDetail,
    error::{ApiError, ErrorVerbosityProvider, InternalServerError},
    state::ApiState,
};

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetPythonBooksResponse {
    pub books: Vec<BookDetail>,
}

impl IntoResponse for GetPythonBooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Aggregates the details of every work listed under the `python` subject.
///
/// Any catalog failure turns the whole request into an internal server error.
pub async fn get_python_books(
    State(state): State<ApiState>,
) -> Result<GetPythonBooksResponse, ApiError> {
    let books = state
        .catalog()
        .python_books()
        .await
        .map_err(|err| InternalServerError::from_generic_error(state.error_verbosity(), err))?;

    Ok(GetPythonBooksResponse { books })
}
